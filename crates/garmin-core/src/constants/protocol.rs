// ABOUTME: MCP protocol constants for version and server identification
// ABOUTME: Pure compile-time constants without runtime configuration dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC version (standard, not configurable)
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision implemented by the server
pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

/// Server name reported in `initialize`
pub const SERVER_NAME: &str = "garmin-mcp-server";

/// Instructions returned to the client in `initialize`
pub const SERVER_INSTRUCTIONS: &str = "This server reads data from the Garmin Connect account configured on the host. Dates use the YYYY-MM-DD format. Use `list_activities` to find activity IDs for `get_activity_details`.";
