// ABOUTME: Structured error types for Garmin Connect session client operations
// ABOUTME: Distinguishes authentication, rate limit, transport and parsing failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors produced by the Garmin Connect session client
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No saved tokens and no credentials to log in with
    #[error("GARMIN_EMAIL and GARMIN_PASSWORD must be set when no saved Garmin Connect tokens are available")]
    MissingCredentials,

    /// The SSO flow asked for a multi-factor verification code
    #[error("Garmin Connect requested multi-factor verification, which this server cannot complete interactively; create tokens with an MFA-capable login and point GARMINTOKENS at them")]
    MfaRequired,

    /// Credentials or tokens were rejected
    #[error("Garmin Connect authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// The API throttled the request
    #[error("Garmin Connect rate limit exceeded (HTTP {status}); wait a while before retrying")]
    RateLimited {
        /// HTTP status returned by the API
        status: u16,
    },

    /// Any other non-success HTTP status
    #[error("Garmin Connect API request failed with status {status}: {body}")]
    ApiError {
        /// HTTP status returned by the API
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Transport-level failure (DNS, TLS, timeout)
    #[error("Network error talking to Garmin Connect: {0}")]
    Network(String),

    /// Response body did not have the expected shape
    #[error("Failed to parse Garmin Connect response: {0}")]
    Parse(String),

    /// Reading or writing saved tokens failed
    #[error("Token store error: {0}")]
    TokenStore(String),
}

impl ProviderError {
    /// Whether the failure is an authentication problem rather than a data problem
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::MfaRequired | Self::AuthenticationFailed(_)
        )
    }

    /// Build an error from an HTTP status and response body
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>, resource: &str) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(format!(
                "HTTP {status} while requesting {resource}; saved tokens may have expired"
            )),
            404 => Self::NotFound {
                resource: resource.to_owned(),
            },
            429 => Self::RateLimited { status },
            _ => Self::ApiError {
                status,
                body: body.into(),
            },
        }
    }
}

/// Result alias for session client operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(error: std::io::Error) -> Self {
        Self::TokenStore(error.to_string())
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::Parse(error.to_string());
        }
        if let Some(status) = error.status() {
            return Self::from_status(status.as_u16(), error.to_string(), "resource");
        }
        Self::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(ProviderError::from_status(401, "", "activity").is_auth_error());
        assert!(matches!(
            ProviderError::from_status(404, "", "activity 42"),
            ProviderError::NotFound { ref resource } if resource == "activity 42"
        ));
        assert!(matches!(
            ProviderError::from_status(429, "", "activities"),
            ProviderError::RateLimited { status: 429 }
        ));
        assert!(matches!(
            ProviderError::from_status(500, "boom", "activities"),
            ProviderError::ApiError { status: 500, .. }
        ));
    }
}
