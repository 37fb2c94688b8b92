// ABOUTME: Main library entry point for the Garmin Connect MCP server
// ABOUTME: Wires configuration, session establishment, MCP protocol handling and tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Connect MCP Server
//!
//! A Model Context Protocol (MCP) server that exposes one Garmin Connect
//! account (activities, daily health metrics, body composition) to an AI
//! assistant over stdio.
//!
//! ## Architecture
//!
//! - **Config**: credentials, token locations and HTTP timeouts from the environment
//! - **Session**: one authenticated [`garmin_connect::GarminClient`] built at startup
//! - **Tools**: a fixed registry of handlers, each making exactly one session call
//! - **MCP**: JSON-RPC 2.0 request processing over newline-delimited stdio
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use garmin_mcp_server::config::environment::ServerConfig;
//! use garmin_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     eprintln!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// Configuration loaded from environment variables
pub mod config;

/// Error types for the server
pub mod errors;

/// Text and JSON rendering of tool results
pub mod formatters;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP protocol handling and stdio transport
pub mod mcp;

/// Garmin Connect session establishment
pub mod session;

/// Tool registry and handlers
pub mod tools;
