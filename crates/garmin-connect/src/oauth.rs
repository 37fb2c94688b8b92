// ABOUTME: OAuth1 HMAC-SHA1 request signing and Garmin OAuth1/OAuth2 token exchange
// ABOUTME: Turns an SSO ticket into an OAuth1 token and an OAuth1 token into a bearer token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::endpoints::GarminEndpoints;
use crate::tokens::{OAuth1Token, OAuth2Token};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use garmin_core::constants::garmin::{paths, OAUTH_USER_AGENT};
use garmin_core::errors::{ProviderError, ProviderResult};
use rand::{distributions::Alphanumeric, Rng};
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method};
use ring::hmac;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// OAuth consumer credentials of the Garmin Connect mobile app
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthConsumer {
    /// Consumer key
    pub consumer_key: String,
    /// Consumer secret
    pub consumer_secret: String,
}

impl std::fmt::Debug for OAuthConsumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthConsumer")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}

/// RFC 3986 percent-encoding as required by OAuth1
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Build the OAuth1 signature base string
///
/// `params` must contain every query, form and `oauth_*` parameter of the request.
#[must_use]
pub fn signature_base_string(method: &Method, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(base_url),
        percent_encode(&normalized)
    )
}

/// HMAC-SHA1 signature of a base string, base64 encoded
#[must_use]
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: Option<&str>) -> String {
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    );
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
    STANDARD.encode(hmac::sign(&key, base_string.as_bytes()).as_ref())
}

/// Per-request OAuth1 values that must be unique
#[derive(Debug, Clone)]
pub struct Nonce {
    /// Random nonce
    pub nonce: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
}

impl Nonce {
    /// Fresh nonce for the current time
    #[must_use]
    pub fn generate() -> Self {
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        Self {
            nonce,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Build the `Authorization: OAuth ...` header value for a request
#[must_use]
pub fn authorization_header(
    method: &Method,
    base_url: &str,
    request_params: &[(String, String)],
    consumer: &OAuthConsumer,
    token: Option<&OAuth1Token>,
    nonce: &Nonce,
) -> String {
    let mut oauth_params = vec![
        ("oauth_consumer_key".to_owned(), consumer.consumer_key.clone()),
        ("oauth_nonce".to_owned(), nonce.nonce.clone()),
        ("oauth_signature_method".to_owned(), "HMAC-SHA1".to_owned()),
        ("oauth_timestamp".to_owned(), nonce.timestamp.to_string()),
        ("oauth_version".to_owned(), "1.0".to_owned()),
    ];
    if let Some(token) = token {
        oauth_params.push(("oauth_token".to_owned(), token.oauth_token.clone()));
    }

    let mut all_params = oauth_params.clone();
    all_params.extend_from_slice(request_params);

    let base_string = signature_base_string(method, base_url, &all_params);
    let signature = sign(
        &base_string,
        &consumer.consumer_secret,
        token.map(|t| t.oauth_token_secret.as_str()),
    );
    oauth_params.push(("oauth_signature".to_owned(), signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {fields}")
}

/// Parse an `application/x-www-form-urlencoded` body into pairs
fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.trim()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(key).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

/// Parse the preauthorized endpoint response into an OAuth1 token
///
/// # Errors
///
/// Returns an error if `oauth_token` or `oauth_token_secret` is missing
pub fn parse_oauth1_response(body: &str, domain: &str) -> ProviderResult<OAuth1Token> {
    let pairs = parse_form_body(body);
    let field = |name: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    };

    let oauth_token = field("oauth_token").ok_or_else(|| {
        ProviderError::AuthenticationFailed("OAuth1 response is missing oauth_token".to_owned())
    })?;
    let oauth_token_secret = field("oauth_token_secret").ok_or_else(|| {
        ProviderError::AuthenticationFailed(
            "OAuth1 response is missing oauth_token_secret".to_owned(),
        )
    })?;

    Ok(OAuth1Token {
        oauth_token,
        oauth_token_secret,
        mfa_token: field("mfa_token"),
        mfa_expiration_timestamp: field("mfa_expiration_timestamp"),
        domain: Some(domain.to_owned()),
    })
}

/// Download the OAuth consumer key/secret document
///
/// # Errors
///
/// Returns an error if the request fails or the document is malformed
pub async fn fetch_consumer(http: &Client, endpoints: &GarminEndpoints) -> ProviderResult<OAuthConsumer> {
    debug!("Fetching OAuth consumer from {}", endpoints.consumer_url);

    let response = http.get(&endpoints.consumer_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::ApiError {
            status: status.as_u16(),
            body: "failed to download OAuth consumer".to_owned(),
        });
    }

    Ok(response.json::<OAuthConsumer>().await?)
}

/// Trade an SSO ticket for an OAuth1 token
///
/// # Errors
///
/// Returns an error if Garmin rejects the ticket or the response is malformed
pub async fn preauthorized_token(
    http: &Client,
    endpoints: &GarminEndpoints,
    consumer: &OAuthConsumer,
    ticket: &str,
) -> ProviderResult<OAuth1Token> {
    let url = endpoints.api_url(paths::OAUTH_PREAUTHORIZED);
    let query = vec![
        ("ticket".to_owned(), ticket.to_owned()),
        ("login-url".to_owned(), endpoints.sso_embed()),
        ("accepts-mfa-tokens".to_owned(), "true".to_owned()),
    ];
    let header = authorization_header(
        &Method::GET,
        &url,
        &query,
        consumer,
        None,
        &Nonce::generate(),
    );

    let response = http
        .get(&url)
        .query(&query)
        .header(AUTHORIZATION, header)
        .header(USER_AGENT, OAUTH_USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ProviderError::AuthenticationFailed(format!(
            "ticket exchange returned HTTP {status}"
        )));
    }

    info!("Obtained Garmin Connect OAuth1 token");
    parse_oauth1_response(&body, &endpoints.domain)
}

/// Exchange an OAuth1 token for a fresh OAuth2 bearer token
///
/// # Errors
///
/// Returns an error if Garmin rejects the OAuth1 token or the response is malformed
pub async fn exchange_oauth2(
    http: &Client,
    endpoints: &GarminEndpoints,
    consumer: &OAuthConsumer,
    oauth1: &OAuth1Token,
) -> ProviderResult<OAuth2Token> {
    let url = endpoints.api_url(paths::OAUTH_EXCHANGE);
    let form: Vec<(String, String)> = oauth1
        .mfa_token
        .as_ref()
        .map(|mfa| vec![("mfa_token".to_owned(), mfa.clone())])
        .unwrap_or_default();
    let header = authorization_header(
        &Method::POST,
        &url,
        &form,
        consumer,
        Some(oauth1),
        &Nonce::generate(),
    );

    let response = http
        .post(&url)
        .form(&form)
        .header(AUTHORIZATION, header)
        .header(USER_AGENT, OAUTH_USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::AuthenticationFailed(format!(
            "OAuth2 exchange returned HTTP {status}"
        )));
    }

    let token: OAuth2Token = response.json().await?;
    info!("Obtained Garmin Connect OAuth2 token");
    Ok(token.with_computed_expiry(Utc::now().timestamp()))
}
