// ABOUTME: JSON-RPC 2.0 request, response and error types used by the MCP layer
// ABOUTME: Includes line parsing with the standard parse and invalid-request errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # JSON-RPC 2.0
//!
//! ```rust
//! use garmin_mcp_server::jsonrpc::{JsonRpcRequest, JsonRpcResponse, RejectedRequest};
//! # use serde_json::json;
//!
//! let request = JsonRpcRequest::parse_line(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#)?;
//! let response = JsonRpcResponse::success(request.response_id(), json!({}));
//! assert!(response.is_success());
//!
//! let rejected = JsonRpcRequest::parse_line(r#"{"jsonrpc":"1.0","id":7,"method":"ping"}"#)
//!     .unwrap_err();
//! assert_eq!(rejected.into_response().id, json!(7));
//! # Ok::<(), RejectedRequest>(())
//! ```

use garmin_core::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_INVALID_REQUEST, ERROR_METHOD_NOT_FOUND,
    ERROR_PARSE,
};
use garmin_core::constants::protocol::JSONRPC_VERSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON-RPC 2.0 request or notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, must be "2.0"
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Method parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier; absent for notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response
///
/// Exactly one of `result` or `error` is present. `id` is always serialized
/// and is `null` when the request id could not be determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,

    /// Result of a successful call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error of a failed call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Identifier of the request this answers
    pub id: Value,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Additional error information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Input line that could not be accepted as a request
///
/// Carries the request id when the line was a JSON object with a string or
/// numeric `id`, so the error response can still be correlated.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRequest {
    /// Id to echo, `null` when unknown
    pub id: Value,
    /// Parse or invalid-request error
    pub error: JsonRpcError,
}

impl RejectedRequest {
    /// Error response for this line
    #[must_use]
    pub fn into_response(self) -> JsonRpcResponse {
        JsonRpcResponse::error(self.id, self.error)
    }
}

impl fmt::Display for RejectedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {})", self.error, self.id)
    }
}

impl std::error::Error for RejectedRequest {}

impl JsonRpcRequest {
    /// Request with an id
    #[must_use]
    pub fn new(id: Value, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id: Some(id),
        }
    }

    /// Notification (no id, no response expected)
    #[must_use]
    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id: None,
        }
    }

    /// Parse one line of input
    ///
    /// # Errors
    ///
    /// Returns a parse error for invalid JSON and an invalid-request error
    /// for JSON that is not a JSON-RPC 2.0 request
    pub fn parse_line(line: &str) -> Result<Self, RejectedRequest> {
        let value: Value = serde_json::from_str(line).map_err(|e| RejectedRequest {
            id: Value::Null,
            error: JsonRpcError::parse_error(e),
        })?;

        let id = match value.get("id") {
            Some(id @ (Value::String(_) | Value::Number(_))) => id.clone(),
            _ => Value::Null,
        };
        let reject = |error| RejectedRequest {
            id: id.clone(),
            error,
        };

        let request: Self =
            serde_json::from_value(value).map_err(|e| reject(JsonRpcError::invalid_request(e)))?;
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(reject(JsonRpcError::invalid_request(format!(
                "unsupported jsonrpc version '{}'",
                request.jsonrpc
            ))));
        }
        Ok(request)
    }

    /// Whether the sender expects no response
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Id to echo back in the response
    #[must_use]
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }
}

impl JsonRpcResponse {
    /// Success response
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Error response
    #[must_use]
    pub fn error(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Check if this is a success response
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Error code, if this is an error response
    #[must_use]
    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(|e| e.code)
    }
}

impl JsonRpcError {
    /// Create a new error
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Input was not valid JSON (-32700)
    #[must_use]
    pub fn parse_error(detail: impl fmt::Display) -> Self {
        Self::new(ERROR_PARSE, format!("Parse error: {detail}"))
    }

    /// JSON was not a valid request object (-32600)
    #[must_use]
    pub fn invalid_request(detail: impl fmt::Display) -> Self {
        Self::new(ERROR_INVALID_REQUEST, format!("Invalid Request: {detail}"))
    }

    /// Method is not implemented (-32601)
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(ERROR_METHOD_NOT_FOUND, format!("Method not found: {method}"))
    }

    /// Parameters are missing or malformed (-32602)
    #[must_use]
    pub fn invalid_params(detail: impl fmt::Display) -> Self {
        Self::new(ERROR_INVALID_PARAMS, format!("Invalid params: {detail}"))
    }

    /// Server-side failure (-32603)
    #[must_use]
    pub fn internal(detail: impl fmt::Display) -> Self {
        Self::new(ERROR_INTERNAL_ERROR, format!("Internal error: {detail}"))
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for JsonRpcError {}
