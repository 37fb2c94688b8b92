// ABOUTME: Garmin Connect OAuth1/OAuth2 token types and their on-disk persistence
// ABOUTME: Token files use the garth layout so tokens created by other clients can be reused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use base64::{engine::general_purpose::STANDARD, Engine};
use garmin_core::constants::garmin::TOKEN_REFRESH_MARGIN_SECS;
use garmin_core::errors::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const OAUTH1_FILE: &str = "oauth1_token.json";
const OAUTH2_FILE: &str = "oauth2_token.json";

/// Long-lived OAuth1 token obtained from an SSO ticket
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuth1Token {
    /// OAuth1 token
    pub oauth_token: String,
    /// OAuth1 token secret
    pub oauth_token_secret: String,
    /// MFA token issued for accounts with MFA enabled
    #[serde(default)]
    pub mfa_token: Option<String>,
    /// Expiry of the MFA token, as reported by Garmin
    #[serde(default)]
    pub mfa_expiration_timestamp: Option<String>,
    /// Domain the token was issued for
    #[serde(default)]
    pub domain: Option<String>,
}

impl std::fmt::Debug for OAuth1Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth1Token")
            .field("oauth_token", &"<redacted>")
            .field("oauth_token_secret", &"<redacted>")
            .field("mfa_token", &self.mfa_token.as_ref().map(|_| "<redacted>"))
            .field("domain", &self.domain)
            .finish()
    }
}

/// Short-lived OAuth2 bearer token for Connect API calls
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuth2Token {
    /// Granted scopes
    #[serde(default)]
    pub scope: String,
    /// Token identifier
    #[serde(default)]
    pub jti: String,
    /// Token type, normally `Bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Bearer token
    pub access_token: String,
    /// Refresh token
    #[serde(default)]
    pub refresh_token: String,
    /// Lifetime in seconds at issue time
    pub expires_in: i64,
    /// Unix timestamp when the access token expires
    #[serde(default)]
    pub expires_at: i64,
    /// Refresh token lifetime in seconds
    #[serde(default)]
    pub refresh_token_expires_in: Option<i64>,
    /// Unix timestamp when the refresh token expires
    #[serde(default)]
    pub refresh_token_expires_at: Option<i64>,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

impl OAuth2Token {
    /// Fill in absolute expiry timestamps from the relative lifetimes
    #[must_use]
    pub fn with_computed_expiry(mut self, now: i64) -> Self {
        if self.expires_at == 0 {
            self.expires_at = now + self.expires_in;
        }
        if self.refresh_token_expires_at.is_none() {
            self.refresh_token_expires_at = self.refresh_token_expires_in.map(|secs| now + secs);
        }
        self
    }

    /// Whether the access token is expired or about to expire at `now`
    #[must_use]
    pub const fn is_expired(&self, now: i64) -> bool {
        self.expires_at - TOKEN_REFRESH_MARGIN_SECS <= now
    }

    /// `Authorization` header value
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl std::fmt::Debug for OAuth2Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Token")
            .field("scope", &self.scope)
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Both tokens of an authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// OAuth1 token used to mint new OAuth2 tokens
    pub oauth1: OAuth1Token,
    /// Current OAuth2 token
    pub oauth2: OAuth2Token,
}

impl TokenPair {
    /// Encode as base64 of the JSON array `[oauth1, oauth2]`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_base64(&self) -> ProviderResult<String> {
        let json = serde_json::to_vec(&(&self.oauth1, &self.oauth2))?;
        Ok(STANDARD.encode(json))
    }

    /// Decode the base64 JSON array form
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not base64 or not a `[oauth1, oauth2]` array
    pub fn from_base64(encoded: &str) -> ProviderResult<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| ProviderError::TokenStore(format!("invalid base64 token data: {e}")))?;
        let (oauth1, oauth2): (OAuth1Token, OAuth2Token) = serde_json::from_slice(&bytes)?;
        Ok(Self { oauth1, oauth2 })
    }
}

/// Where saved tokens live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStore {
    /// Directory with `oauth1_token.json` and `oauth2_token.json`
    Directory(PathBuf),
    /// Single file with the base64-encoded token pair
    Base64File(PathBuf),
}

impl TokenStore {
    /// Filesystem location of this store
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::Base64File(path) => path,
        }
    }

    /// Load saved tokens, `Ok(None)` when nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if the files exist but cannot be read or parsed
    pub async fn load(&self) -> ProviderResult<Option<TokenPair>> {
        match self {
            Self::Directory(dir) => {
                let oauth1_path = dir.join(OAUTH1_FILE);
                let oauth2_path = dir.join(OAUTH2_FILE);
                if !fs::try_exists(&oauth1_path).await? || !fs::try_exists(&oauth2_path).await? {
                    debug!("No saved tokens in {}", dir.display());
                    return Ok(None);
                }
                let oauth1 = serde_json::from_slice(&fs::read(&oauth1_path).await?)?;
                let oauth2 = serde_json::from_slice(&fs::read(&oauth2_path).await?)?;
                Ok(Some(TokenPair { oauth1, oauth2 }))
            }
            Self::Base64File(file) => {
                if !fs::try_exists(file).await? {
                    debug!("No saved token file at {}", file.display());
                    return Ok(None);
                }
                let encoded = fs::read_to_string(file).await?;
                TokenPair::from_base64(&encoded).map(Some)
            }
        }
    }

    /// Save tokens, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if the files cannot be written
    pub async fn save(&self, tokens: &TokenPair) -> ProviderResult<()> {
        match self {
            Self::Directory(dir) => {
                fs::create_dir_all(dir).await?;
                fs::write(
                    dir.join(OAUTH1_FILE),
                    serde_json::to_vec_pretty(&tokens.oauth1)?,
                )
                .await?;
                fs::write(
                    dir.join(OAUTH2_FILE),
                    serde_json::to_vec_pretty(&tokens.oauth2)?,
                )
                .await?;
            }
            Self::Base64File(file) => {
                if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await?;
                }
                fs::write(file, tokens.to_base64()?).await?;
            }
        }
        debug!("Saved Garmin Connect tokens to {}", self.path().display());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn oauth2(expires_in: i64) -> OAuth2Token {
        serde_json::from_value(serde_json::json!({
            "scope": "CONNECT_READ",
            "jti": "jti-1",
            "access_token": "access",
            "refresh_token": "refresh",
            "expires_in": expires_in,
            "refresh_token_expires_in": 7200
        }))
        .unwrap()
    }

    #[test]
    fn test_computed_expiry() {
        let token = oauth2(3600).with_computed_expiry(1_000);
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_at, 4_600);
        assert_eq!(token.refresh_token_expires_at, Some(8_200));
        assert_eq!(token.authorization_header(), "Bearer access");
    }

    #[test]
    fn test_expiry_uses_refresh_margin() {
        let token = oauth2(3600).with_computed_expiry(0);
        assert!(!token.is_expired(0));
        assert!(!token.is_expired(3600 - TOKEN_REFRESH_MARGIN_SECS - 1));
        assert!(token.is_expired(3600 - TOKEN_REFRESH_MARGIN_SECS));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let token = oauth2(3600);
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("access\""));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_base64_is_json_array() {
        let pair = TokenPair {
            oauth1: OAuth1Token {
                oauth_token: "t".to_owned(),
                oauth_token_secret: "s".to_owned(),
                mfa_token: None,
                mfa_expiration_timestamp: None,
                domain: Some("garmin.com".to_owned()),
            },
            oauth2: oauth2(3600).with_computed_expiry(0),
        };
        let decoded = STANDARD.decode(pair.to_base64().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["oauth_token"], "t");
        assert_eq!(value[1]["access_token"], "access");

        assert!(TokenPair::from_base64("not base64!").is_err());
    }
}
