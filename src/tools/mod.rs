// ABOUTME: MCP tool layer: registry, argument parsing and Garmin data handlers
// ABOUTME: Each handler validates its arguments then makes exactly one session call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Handlers take the shared session as `&dyn GarminApi` and the raw
//! `arguments` object, and return the result text or a [`ToolError`].
//! [`registry::ToolRegistry::execute`] turns errors into `isError` text, so
//! nothing a handler does can fail the JSON-RPC request itself.

/// Activity list and detail tools
mod activities;
/// Body composition tool
mod body;
/// Daily health metric tools
mod health;
/// Argument parsing
pub mod params;
/// Profile and device tools
mod profile;
/// Tool identifiers, schemas and dispatch
pub mod registry;
/// Training status and readiness tools
mod training;

pub use registry::{ToolId, ToolOutput, ToolRegistry};

use crate::errors::{ProviderError, ToolError};
use crate::formatters::{is_empty_payload, to_pretty_json};
use serde::Serialize;
use serde_json::Value;

/// Pretty JSON of a serializable result
fn render_json<T: Serialize + ?Sized>(tool_name: &str, value: &T) -> Result<String, ToolError> {
    to_pretty_json(value).map_err(|e| {
        ToolError::execution_failed(tool_name, format!("failed to render response: {e}"))
    })
}

/// Pretty JSON of a payload, or `no_data` when the payload is empty
fn render_payload(tool_name: &str, payload: &Value, no_data: String) -> Result<String, ToolError> {
    if is_empty_payload(payload) {
        Ok(no_data)
    } else {
        render_json(tool_name, payload)
    }
}

/// Attach the tool name to a session error
fn session_error(tool_name: &'static str) -> impl Fn(ProviderError) -> ToolError {
    move |source| ToolError::provider(tool_name, source)
}
