// ABOUTME: Environment configuration for credentials, token locations and HTTP timeouts
// ABOUTME: Parses environment variables once at startup into a typed ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use garmin_connect::{GarminEndpoints, OAuthConsumer, TokenStore};
use garmin_core::constants::env_config;
use garmin_core::constants::garmin::{CN_DOMAIN, DEFAULT_DOMAIN};
use garmin_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Garmin Connect account credentials
///
/// Empty values are stored as `None`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GarminCredentials {
    /// Account email
    pub email: Option<String>,
    /// Account password
    pub password: Option<String>,
}

impl GarminCredentials {
    /// Credentials from explicit values, treating empty strings as absent
    #[must_use]
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email: email.filter(|v| !v.trim().is_empty()),
            password: password.filter(|v| !v.is_empty()),
        }
    }

    /// Email and password when both are present
    #[must_use]
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }
}

impl fmt::Debug for GarminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GarminCredentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Where saved OAuth tokens are read from and written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStoreConfig {
    /// Directory with `oauth1_token.json` / `oauth2_token.json`
    pub directory: PathBuf,
    /// File with the base64-encoded token pair
    pub base64_file: PathBuf,
}

impl TokenStoreConfig {
    /// Stores in lookup order: directory first, then the base64 file
    #[must_use]
    pub fn stores(&self) -> Vec<TokenStore> {
        vec![
            TokenStore::Directory(self.directory.clone()),
            TokenStore::Base64File(self.base64_file.clone()),
        ]
    }
}

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: env_config::DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: env_config::DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Account credentials, only needed when no saved tokens work
    pub credentials: GarminCredentials,
    /// Saved token locations
    pub tokens: TokenStoreConfig,
    /// `garmin.com` or `garmin.cn`
    pub domain: String,
    /// Single base URL replacing every Garmin host
    pub base_url: Option<String>,
    /// OAuth consumer supplied through the environment
    pub consumer: Option<OAuthConsumer>,
    /// HTTP client timeouts
    pub http_client: HttpClientConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let credentials = GarminCredentials::new(
            env_var_opt(env_config::GARMIN_EMAIL),
            env_var_opt(env_config::GARMIN_PASSWORD),
        );

        let tokens = TokenStoreConfig {
            directory: expand_home(
                &env_var_opt(env_config::GARMIN_TOKENS)
                    .unwrap_or_else(|| env_config::DEFAULT_TOKEN_DIR.to_owned()),
            ),
            base64_file: expand_home(
                &env_var_opt(env_config::GARMIN_TOKENS_BASE64)
                    .unwrap_or_else(|| env_config::DEFAULT_TOKEN_BASE64_FILE.to_owned()),
            ),
        };

        let domain = if env_var_opt(env_config::GARMIN_IS_CN).is_some_and(|v| parse_flag(&v)) {
            CN_DOMAIN
        } else {
            DEFAULT_DOMAIN
        };

        let consumer = match (
            env_var_opt(env_config::GARMIN_CONSUMER_KEY),
            env_var_opt(env_config::GARMIN_CONSUMER_SECRET),
        ) {
            (Some(consumer_key), Some(consumer_secret)) => Some(OAuthConsumer {
                consumer_key,
                consumer_secret,
            }),
            (None, None) => None,
            _ => {
                warn!(
                    "Only one of {} and {} is set; downloading the OAuth consumer instead",
                    env_config::GARMIN_CONSUMER_KEY,
                    env_config::GARMIN_CONSUMER_SECRET
                );
                None
            }
        };

        let http_client = HttpClientConfig {
            timeout_secs: env_var_parse(
                env_config::HTTP_CLIENT_TIMEOUT_SECS,
                env_config::DEFAULT_HTTP_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: env_var_parse(
                env_config::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                env_config::DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let config = Self {
            credentials,
            tokens,
            domain: domain.to_owned(),
            base_url: env_var_opt(env_config::GARMIN_BASE_URL),
            consumer,
            http_client,
        };
        debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    /// Endpoints for the configured domain or base URL
    #[must_use]
    pub fn endpoints(&self) -> GarminEndpoints {
        self.base_url.as_deref().map_or_else(
            || GarminEndpoints::for_domain(&self.domain),
            GarminEndpoints::with_base_url,
        )
    }

    /// Log-safe multi-line summary; never includes the password
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Garmin MCP Server Configuration:\n\
             - Domain: {}\n\
             - Base URL override: {}\n\
             - Credentials: {}\n\
             - Token directory: {}\n\
             - Token file: {}\n\
             - OAuth consumer: {}\n\
             - HTTP timeout: {}s (connect {}s)",
            self.domain,
            self.base_url.as_deref().unwrap_or("none"),
            if self.credentials.pair().is_some() {
                "provided"
            } else {
                "not provided"
            },
            self.tokens.directory.display(),
            self.tokens.base64_file.display(),
            if self.consumer.is_some() {
                "from environment"
            } else {
                "downloaded"
            },
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
        )
    }
}

/// Outcome of [`load_env_file`], reported once logging is up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// Variables were read from this file
    Loaded(PathBuf),
    /// No default `.env` was usable; holds the reason
    NotLoaded(String),
}

impl EnvFileStatus {
    /// Log where the environment came from
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => info!("Loaded environment from {}", path.display()),
            Self::NotLoaded(reason) => warn!("No .env file found or failed to load: {reason}"),
        }
    }
}

/// Load a `.env` file into the process environment
///
/// An explicit path must exist; a missing default `.env` is not an error.
/// Variables already set in the environment win over the file. This runs
/// before the tracing subscriber exists, so the outcome is returned rather
/// than logged.
///
/// # Errors
///
/// Returns a configuration error if an explicit file cannot be read
pub fn load_env_file(path: Option<&Path>) -> AppResult<EnvFileStatus> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                AppError::config(format!("Failed to load env file {}: {e}", path.display()))
            })?;
            Ok(EnvFileStatus::Loaded(path.to_path_buf()))
        }
        None => Ok(match dotenvy::dotenv() {
            Ok(path) => EnvFileStatus::Loaded(path),
            Err(e) => EnvFileStatus::NotLoaded(e.to_string()),
        }),
    }
}

/// Expand a leading `~` to the home directory
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    if path == "~" {
        return home();
    }
    path.strip_prefix("~/")
        .map_or_else(|| PathBuf::from(path), |rest| home().join(rest))
}

/// Environment variable, with empty values treated as unset
fn env_var_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_var_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    env_var_opt(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}")))
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
