// ABOUTME: Garmin Connect session establishment from saved tokens or credentials
// ABOUTME: Runs once at startup; any failure here stops the server before it serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Establishment
//!
//! Order of attempts:
//!
//! 1. Saved tokens, from the token directory then the base64 token file
//! 2. SSO login with `GARMIN_EMAIL` / `GARMIN_PASSWORD`, saving the new tokens
//!
//! Without usable tokens and without credentials the call fails before any
//! network request is made. The OAuth consumer document is only downloaded
//! when a token exchange actually needs it.

use crate::config::environment::ServerConfig;
use crate::errors::{AppResult, ProviderError};
use garmin_connect::{GarminClient, TokenPair, TokenStore};
use tracing::{info, warn};

/// Build the authenticated session the tools share
///
/// # Errors
///
/// Returns `AuthRequired` when there are neither saved tokens nor
/// credentials, `UnsupportedAuthMode` when the account needs MFA, and
/// authentication or network errors from the sign-in
pub async fn establish_session(config: &ServerConfig) -> AppResult<GarminClient> {
    let stores = config.tokens.stores();
    let saved = load_saved_tokens(&stores).await;
    let credentials = config.credentials.pair();

    if saved.is_none() && credentials.is_none() {
        return Err(ProviderError::MissingCredentials.into());
    }

    let endpoints = config.endpoints();

    if let Some((tokens, source)) = saved {
        match GarminClient::resume(endpoints.clone(), config.consumer.clone(), tokens).await {
            Ok(client) => {
                info!("Resumed Garmin Connect session from {source}");
                return Ok(client.with_token_stores(stores));
            }
            Err(e) if credentials.is_some() => {
                warn!("Saved tokens from {source} were not usable ({e}); signing in again");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let Some((email, password)) = credentials else {
        return Err(ProviderError::MissingCredentials.into());
    };

    let client = GarminClient::login(endpoints, config.consumer.clone(), email, password)
        .await?
        .with_token_stores(stores);
    let saved_count = client.save_tokens().await;
    info!("Signed in to Garmin Connect; tokens saved to {saved_count} location(s)");
    Ok(client)
}

/// First token pair found in `stores`, with where it came from
///
/// Unreadable stores are logged and skipped.
async fn load_saved_tokens(stores: &[TokenStore]) -> Option<(TokenPair, String)> {
    for store in stores {
        let location = store.path().display().to_string();
        match store.load().await {
            Ok(Some(tokens)) => return Some((tokens, location)),
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable Garmin tokens at {location}: {e}"),
        }
    }
    None
}
