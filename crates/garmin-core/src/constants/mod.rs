// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for protocol, tools, environment and Garmin endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than collected in a single file.

/// JSON-RPC error codes
pub mod errors;
/// Environment variable names and defaults
pub mod env_config;
/// Garmin Connect endpoints, user agents and limits
pub mod garmin;
/// Protocol constants for MCP and JSON-RPC
pub mod protocol;
/// Tool identifiers and argument names
pub mod tools;

pub use errors::*;
pub use tools::*;

/// JSON field names used in tool arguments
pub mod json_fields {
    /// Result-count limit
    pub const LIMIT: &str = "limit";
    /// Garmin activity identifier
    pub const ACTIVITY_ID: &str = "activity_id";
    /// Calendar date (`YYYY-MM-DD`)
    pub const DATE: &str = "date";
    /// Inclusive end of a date range (`YYYY-MM-DD`)
    pub const END_DATE: &str = "end_date";
}
