// ABOUTME: Error types for the Garmin Connect MCP server
// ABOUTME: Re-exports the unified error system from garmin-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Re-exported from `garmin-core` so binaries and tests can use
//! `garmin_mcp_server::errors::AppError` without naming the core crate.

pub use garmin_core::errors::{
    AppError, AppResult, ErrorCode, ProviderError, ProviderResult, ToolError,
};
