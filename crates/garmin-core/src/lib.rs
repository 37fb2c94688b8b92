// ABOUTME: Core types and constants for the Garmin Connect MCP server
// ABOUTME: Foundation crate with error handling and constants shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Core
//!
//! Foundation crate providing shared types and constants for the Garmin
//! Connect MCP server. It has no I/O of its own so that both the session
//! client (`garmin-connect`) and the protocol adapter can depend on it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, `ProviderError` and `ToolError`
//! - **constants**: protocol, tool, environment and Garmin endpoint constants

/// Unified error handling with error codes and domain-specific errors
pub mod errors;

/// Application constants organized by domain
pub mod constants;
