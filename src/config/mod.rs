// ABOUTME: Configuration management module for the Garmin Connect MCP server
// ABOUTME: All settings come from environment variables, optionally seeded from a .env file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;

pub use environment::{GarminCredentials, HttpClientConfig, ServerConfig, TokenStoreConfig};
