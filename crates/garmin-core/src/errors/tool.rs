// ABOUTME: Tool-specific error types raised at the MCP tool handler boundary
// ABOUTME: Carries the tool name so failures can be reported back as readable text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Error Types
//!
//! `ToolError` describes everything that can go wrong between receiving a
//! `tools/call` and producing its text. It is never sent as a protocol fault:
//! the dispatcher renders it as the text of an `isError` tool result.

use super::ProviderError;
use std::error::Error;
use std::fmt;

/// Errors specific to tool operations
#[derive(Debug)]
pub enum ToolError {
    /// Tool was not found in the registry
    NotFound {
        /// Name of the requested tool
        tool_name: String,
    },
    /// Tool parameter validation failed
    InvalidParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Reason the parameter is invalid
        reason: String,
    },
    /// Required parameter is missing
    MissingParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the missing parameter
        parameter: String,
    },
    /// The session client call failed
    Provider {
        /// Name of the tool
        tool_name: String,
        /// Underlying client error
        source: ProviderError,
    },
    /// Tool execution failed after the data was fetched
    ExecutionFailed {
        /// Name of the tool that failed
        tool_name: String,
        /// Details about the failure
        details: String,
    },
}

impl ToolError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::NotFound {
            tool_name: tool_name.into(),
        }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        tool_name: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(tool_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Wrap a session client failure
    #[must_use]
    pub fn provider(tool_name: impl Into<String>, source: ProviderError) -> Self {
        Self::Provider {
            tool_name: tool_name.into(),
            source,
        }
    }

    /// Create an "execution failed" error
    #[must_use]
    pub fn execution_failed(tool_name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            tool_name: tool_name.into(),
            details: details.into(),
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { tool_name } => write!(f, "Tool '{tool_name}' not found"),
            Self::InvalidParameter {
                parameter, reason, ..
            } => write!(f, "invalid parameter '{parameter}': {reason}"),
            Self::MissingParameter { parameter, .. } => {
                write!(f, "missing required parameter '{parameter}'")
            }
            Self::Provider { source, .. } => write!(f, "{source}"),
            Self::ExecutionFailed { details, .. } => write!(f, "{details}"),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider { source, .. } => Some(source),
            _ => None,
        }
    }
}
