// ABOUTME: Shared HTTP client with connection pooling for Garmin Connect API calls
// ABOUTME: Singleton with configurable timeouts plus per-login cookie-enabled SSO clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use garmin_core::constants::env_config::{
    DEFAULT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS,
};
use garmin_core::constants::garmin::{API_USER_AGENT, SSO_USER_AGENT};
use garmin_core::errors::{ProviderError, ProviderResult};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before the first request.
/// If not called, defaults are used (30s timeout, 10s connect timeout).
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

fn configured_timeouts() -> (u64, u64) {
    CLIENT_TIMEOUTS
        .get()
        .copied()
        .unwrap_or((DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_HTTP_CONNECT_TIMEOUT_SECS))
}

/// Get the shared HTTP client for Connect API calls
///
/// This client uses connection pooling and configured timeouts.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = configured_timeouts();

        ClientBuilder::new()
            .user_agent(API_USER_AGENT)
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Build a fresh cookie-enabled client for one SSO sign-in
///
/// SSO keeps its CSRF state in cookies, so each login gets its own jar.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn sso_client() -> ProviderResult<Client> {
    let (timeout, connect_timeout) = configured_timeouts();

    ClientBuilder::new()
        .cookie_store(true)
        .user_agent(SSO_USER_AGENT)
        .timeout(Duration::from_secs(timeout))
        .connect_timeout(Duration::from_secs(connect_timeout))
        .build()
        .map_err(|e| ProviderError::Network(format!("Failed to build SSO HTTP client: {e}")))
}
