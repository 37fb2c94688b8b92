// ABOUTME: Authenticated Garmin Connect client implementing the GarminApi trait
// ABOUTME: Owns the token pair, refreshes the OAuth2 token and maps HTTP failures to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::GarminApi;
use crate::endpoints::GarminEndpoints;
use crate::http_client::{shared_client, sso_client};
use crate::models::{ActivitySummary, DailySteps, SocialProfile};
use crate::oauth::{self, OAuthConsumer};
use crate::sso;
use crate::tokens::{TokenPair, TokenStore};
use async_trait::async_trait;
use chrono::Utc;
use garmin_core::constants::garmin::{limits, paths, MAX_ERROR_BODY_CHARS, PROVIDER_NAME};
use garmin_core::errors::{ProviderError, ProviderResult};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info, warn};

/// Garmin Connect session
///
/// Created by [`GarminClient::login`] or [`GarminClient::resume`]; both
/// fetch the social profile, so a constructed client is known to work.
///
/// The OAuth consumer is only needed to sign token exchanges. When none is
/// configured it is fetched on first use.
pub struct GarminClient {
    endpoints: GarminEndpoints,
    http: Client,
    consumer: OnceCell<OAuthConsumer>,
    tokens: RwLock<TokenPair>,
    token_stores: Vec<TokenStore>,
    profile: SocialProfile,
}

impl GarminClient {
    fn new(endpoints: GarminEndpoints, consumer: Option<OAuthConsumer>, tokens: TokenPair) -> Self {
        Self {
            endpoints,
            http: shared_client().clone(),
            consumer: OnceCell::new_with(consumer),
            tokens: RwLock::new(tokens),
            token_stores: Vec::new(),
            profile: SocialProfile::default(),
        }
    }

    /// Sign in through SSO with email and password
    ///
    /// Without a `consumer` the published one is fetched after the SSO step.
    ///
    /// # Errors
    ///
    /// Returns `MfaRequired` if the account needs a verification code,
    /// `AuthenticationFailed` if the credentials are rejected, and network
    /// or parse errors otherwise
    pub async fn login(
        endpoints: GarminEndpoints,
        consumer: Option<OAuthConsumer>,
        email: &str,
        password: &str,
    ) -> ProviderResult<Self> {
        info!("Signing in to {PROVIDER_NAME} ({})", endpoints.domain);

        let ticket = sso::login(&sso_client()?, &endpoints, email, password).await?;
        let http = shared_client();
        let consumer = match consumer {
            Some(consumer) => consumer,
            None => oauth::fetch_consumer(http, &endpoints).await?,
        };
        let oauth1 = oauth::preauthorized_token(http, &endpoints, &consumer, &ticket).await?;
        let oauth2 = oauth::exchange_oauth2(http, &endpoints, &consumer, &oauth1).await?;

        Self::new(endpoints, Some(consumer), TokenPair { oauth1, oauth2 })
            .with_profile()
            .await
    }

    /// Resume a session from saved tokens
    ///
    /// An expired OAuth2 token is re-exchanged before the profile is fetched.
    /// No consumer is fetched while the OAuth2 token is still valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens are rejected or the profile cannot be fetched
    pub async fn resume(
        endpoints: GarminEndpoints,
        consumer: Option<OAuthConsumer>,
        tokens: TokenPair,
    ) -> ProviderResult<Self> {
        info!("Resuming {PROVIDER_NAME} session from saved tokens");
        Self::new(endpoints, consumer, tokens).with_profile().await
    }

    async fn with_profile(mut self) -> ProviderResult<Self> {
        self.profile = self
            .get_typed(paths::SOCIAL_PROFILE, &[], "social profile")
            .await?;
        info!(
            "{PROVIDER_NAME} session ready for {}",
            self.profile.display_name
        );
        Ok(self)
    }

    /// Persist refreshed tokens to these stores
    #[must_use]
    pub fn with_token_stores(mut self, stores: Vec<TokenStore>) -> Self {
        self.token_stores = stores;
        self
    }

    /// Endpoints this session talks to
    #[must_use]
    pub const fn endpoints(&self) -> &GarminEndpoints {
        &self.endpoints
    }

    /// Snapshot of the current token pair
    pub async fn tokens(&self) -> TokenPair {
        self.tokens.read().await.clone()
    }

    /// Write the current tokens to every configured store
    ///
    /// Failures are logged and skipped; returns how many stores were written.
    pub async fn save_tokens(&self) -> usize {
        let tokens = self.tokens.read().await;
        Self::save_to_stores(&self.token_stores, &tokens).await
    }

    async fn save_to_stores(stores: &[TokenStore], tokens: &TokenPair) -> usize {
        let mut saved = 0;
        for store in stores {
            match store.save(tokens).await {
                Ok(()) => saved += 1,
                Err(e) => warn!(
                    "Failed to save {PROVIDER_NAME} tokens to {}: {e}",
                    store.path().display()
                ),
            }
        }
        saved
    }

    async fn consumer(&self) -> ProviderResult<&OAuthConsumer> {
        self.consumer
            .get_or_try_init(|| oauth::fetch_consumer(&self.http, &self.endpoints))
            .await
    }

    /// `Authorization` header value, refreshing the OAuth2 token first if it expired
    async fn authorization(&self) -> ProviderResult<String> {
        {
            let tokens = self.tokens.read().await;
            if !tokens.oauth2.is_expired(Utc::now().timestamp()) {
                return Ok(tokens.oauth2.authorization_header());
            }
        }

        let mut tokens = self.tokens.write().await;
        // Another request may have refreshed while we waited for the lock
        if tokens.oauth2.is_expired(Utc::now().timestamp()) {
            info!("{PROVIDER_NAME} OAuth2 token expired, exchanging OAuth1 token");
            let consumer = self.consumer().await?;
            tokens.oauth2 =
                oauth::exchange_oauth2(&self.http, &self.endpoints, consumer, &tokens.oauth1)
                    .await?;
            Self::save_to_stores(&self.token_stores, &tokens).await;
        }
        Ok(tokens.oauth2.authorization_header())
    }

    /// Authenticated GET returning the raw JSON body, `Value::Null` for empty responses
    async fn get_value(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> ProviderResult<Value> {
        let url = self.endpoints.api_url(path);
        let authorization = self.authorization().await?;

        debug!("{PROVIDER_NAME} request: GET {url}");
        let response = self
            .http
            .get(&url)
            .query(query)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        debug!("{PROVIDER_NAME} response: {status} for {resource}");
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let body = response.text().await?;
        if !status.is_success() {
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!("{PROVIDER_NAME} request for {resource} failed with {status}");
            return Err(ProviderError::from_status(status.as_u16(), body, resource));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> ProviderResult<T> {
        let value = self.get_value(path, query, resource).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Like `get_typed` for list endpoints, treating an empty body as an empty list
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> ProviderResult<Vec<T>> {
        let value = self.get_value(path, query, resource).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    fn user_path(&self, base: &str) -> String {
        format!(
            "{base}/{}",
            urlencoding::encode(&self.profile.display_name)
        )
    }
}

#[async_trait]
impl GarminApi for GarminClient {
    fn profile(&self) -> &SocialProfile {
        &self.profile
    }

    async fn get_activities(
        &self,
        start: usize,
        limit: usize,
    ) -> ProviderResult<Vec<ActivitySummary>> {
        let limit = limit.min(limits::MAX_ACTIVITY_LIMIT);
        let mut activities: Vec<ActivitySummary> = Vec::with_capacity(limit);
        let mut offset = start;

        while activities.len() < limit {
            let remaining = limit - activities.len();
            let page_size = remaining.min(limits::MAX_ACTIVITIES_PER_REQUEST);
            let page: Vec<ActivitySummary> = self
                .get_list(
                    paths::ACTIVITY_SEARCH,
                    &[("start", offset.to_string()), ("limit", page_size.to_string())],
                    "activities",
                )
                .await?;

            let received = page.len();
            debug!("Activity page at offset {offset}: requested {page_size}, received {received}");
            activities.extend(page.into_iter().take(remaining));

            if received < page_size {
                break;
            }
            offset += received;
        }

        Ok(activities)
    }

    async fn get_activity(&self, activity_id: u64) -> ProviderResult<Value> {
        self.get_value(
            &format!("{}/{activity_id}", paths::ACTIVITY),
            &[],
            &format!("activity {activity_id}"),
        )
        .await
    }

    async fn get_daily_steps(&self, start: &str, end: &str) -> ProviderResult<Vec<DailySteps>> {
        self.get_list(
            &format!("{}/{start}/{end}", paths::DAILY_STEPS),
            &[],
            "daily steps",
        )
        .await
    }

    async fn get_heart_rates(&self, date: &str) -> ProviderResult<Value> {
        self.get_value(
            &self.user_path(paths::DAILY_HEART_RATE),
            &[("date", date.to_owned())],
            "heart rate data",
        )
        .await
    }

    async fn get_sleep_data(&self, date: &str) -> ProviderResult<Value> {
        self.get_value(
            &self.user_path(paths::DAILY_SLEEP),
            &[
                ("date", date.to_owned()),
                ("nonSleepBufferMinutes", "60".to_owned()),
            ],
            "sleep data",
        )
        .await
    }

    async fn get_body_composition(&self, start: &str, end: &str) -> ProviderResult<Value> {
        self.get_value(
            paths::WEIGHT_DATE_RANGE,
            &[("startDate", start.to_owned()), ("endDate", end.to_owned())],
            "body composition",
        )
        .await
    }

    async fn get_user_summary(&self, date: &str) -> ProviderResult<Value> {
        self.get_value(
            &self.user_path(paths::DAILY_SUMMARY),
            &[("calendarDate", date.to_owned())],
            "daily summary",
        )
        .await
    }

    async fn get_stress_data(&self, date: &str) -> ProviderResult<Value> {
        self.get_value(
            &format!("{}/{date}", paths::DAILY_STRESS),
            &[],
            "stress data",
        )
        .await
    }

    async fn get_training_status(&self, date: &str) -> ProviderResult<Value> {
        self.get_value(
            &format!("{}/{date}", paths::TRAINING_STATUS),
            &[],
            "training status",
        )
        .await
    }

    async fn get_training_readiness(&self, date: &str) -> ProviderResult<Value> {
        self.get_value(
            &format!("{}/{date}", paths::TRAINING_READINESS),
            &[],
            "training readiness",
        )
        .await
    }

    async fn get_devices(&self) -> ProviderResult<Value> {
        self.get_value(paths::DEVICES, &[], "devices").await
    }
}
