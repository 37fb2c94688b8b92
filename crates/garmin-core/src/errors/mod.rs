// ABOUTME: Unified error handling system with standard error codes
// ABOUTME: Defines AppError, ErrorCode and re-exports provider and tool errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` is the error type used at process level (configuration, session
//! establishment, protocol plumbing). Session client failures are described by
//! [`ProviderError`] and tool argument or execution failures by [`ToolError`];
//! both convert into `AppError` when they need to cross that boundary.

/// Errors raised by the Garmin Connect session client
pub mod provider;

/// Errors raised at the tool handler boundary
pub mod tool;

pub use provider::{ProviderError, ProviderResult};
pub use tool::ToolError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// Credentials are required but were not provided
    AuthRequired = 1000,
    /// Credentials were rejected
    AuthInvalid = 1001,
    /// The account requires an authentication mode this server cannot drive
    UnsupportedAuthMode = 1002,

    // Resources (4000-4999)
    /// The requested resource does not exist
    ResourceNotFound = 4000,

    // External services (5000-5999)
    /// The remote service returned an error
    ExternalServiceError = 5000,
    /// The remote service throttled the request
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or parsed
    ConfigError = 6000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Data could not be serialized or deserialized
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::UnsupportedAuthMode => "The account requires an unsupported authentication mode",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::MissingCredentials => ErrorCode::AuthRequired,
            ProviderError::AuthenticationFailed(_) => ErrorCode::AuthInvalid,
            ProviderError::MfaRequired => ErrorCode::UnsupportedAuthMode,
            ProviderError::NotFound { .. } => ErrorCode::ResourceNotFound,
            ProviderError::RateLimited { .. } => ErrorCode::ExternalRateLimited,
            ProviderError::ApiError { .. } | ProviderError::Network(_) => {
                ErrorCode::ExternalServiceError
            }
            ProviderError::Parse(_) => ErrorCode::SerializationError,
            ProviderError::TokenStore(_) => ErrorCode::InternalError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::InternalError, format!("I/O error: {error}")).with_source(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::config("HTTP_CLIENT_TIMEOUT_SECS must be an integer");
        assert_eq!(
            error.to_string(),
            "Configuration error encountered: HTTP_CLIENT_TIMEOUT_SECS must be an integer"
        );
    }

    #[test]
    fn test_provider_error_mapping() {
        let mfa: AppError = ProviderError::MfaRequired.into();
        assert_eq!(mfa.code, ErrorCode::UnsupportedAuthMode);

        let missing: AppError = ProviderError::MissingCredentials.into();
        assert_eq!(missing.code, ErrorCode::AuthRequired);

        let throttled: AppError = ProviderError::RateLimited { status: 429 }.into();
        assert_eq!(throttled.code, ErrorCode::ExternalRateLimited);

        let expired: AppError = ProviderError::from_status(401, "", "socialProfile").into();
        assert_eq!(expired.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UnsupportedAuthMode).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_AUTH_MODE\"");
    }
}
