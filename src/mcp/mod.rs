// ABOUTME: MCP protocol module: schema types, request routing and stdio transport
// ABOUTME: Exposes the Garmin tool registry to MCP clients over JSON-RPC 2.0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Request routing for MCP methods
pub mod request_processor;
/// Shared session and registry
pub mod resources;
/// MCP wire schema types
pub mod schema;
/// Newline-delimited stdio transport
pub mod transport;

pub use request_processor::McpRequestProcessor;
pub use resources::ServerResources;
pub use transport::StdioTransport;
