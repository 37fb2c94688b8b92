// ABOUTME: MCP protocol schema types for initialize, tools/list and tools/call payloads
// ABOUTME: Serde shapes use the camelCase field names the MCP wire format requires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Schema Definitions
//!
//! Only the parts of the MCP schema this server emits: tool descriptors,
//! tool results and the `initialize` handshake.

use garmin_core::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_INSTRUCTIONS, SERVER_NAME};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Server identification sent during `initialize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Tool descriptor returned by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name used in `tools/call`
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema of the arguments object
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema for a tool's arguments object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object`
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Argument properties
    pub properties: HashMap<String, PropertySchema>,
    /// Names of required arguments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl JsonSchema {
    /// Object schema with no arguments
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: HashMap::new(),
            required: None,
        }
    }

    /// Add an argument, marking it required if asked
    #[must_use]
    pub fn with_property(mut self, name: &str, property: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_owned(), property);
        if required {
            self.required
                .get_or_insert_with(Vec::new)
                .push(name.to_owned());
        }
        self
    }
}

/// One argument in a [`JsonSchema`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type name
    #[serde(rename = "type")]
    pub property_type: String,
    /// What the argument means
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value used when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Smallest accepted number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
    /// Largest accepted number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
    /// Regex the string must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl PropertySchema {
    /// String argument
    #[must_use]
    pub fn string(description: &str) -> Self {
        Self {
            property_type: "string".to_owned(),
            description: Some(description.to_owned()),
            default: None,
            minimum: None,
            maximum: None,
            pattern: None,
        }
    }

    /// `YYYY-MM-DD` date argument
    #[must_use]
    pub fn date(description: &str) -> Self {
        Self {
            pattern: Some(r"^\d{4}-\d{2}-\d{2}$".to_owned()),
            ..Self::string(description)
        }
    }

    /// Bounded integer argument with a default
    #[must_use]
    pub fn bounded_integer(description: &str, default: u64, minimum: u64, maximum: u64) -> Self {
        Self {
            property_type: "integer".to_owned(),
            description: Some(description.to_owned()),
            default: Some(Value::from(default)),
            minimum: Some(minimum),
            maximum: Some(maximum),
            pattern: None,
        }
    }
}

/// Result of `tools/call`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Content blocks; this server always sends exactly one text block
    pub content: Vec<Content>,
    /// Whether the text describes a failure
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// Single text block result
    #[must_use]
    pub fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error,
        }
    }
}

/// Content block inside a tool result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text
    #[serde(rename = "text")]
    Text {
        /// The text
        text: String,
    },
}

/// Server capabilities advertised during `initialize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tool support
    pub tools: ToolsCapability,
}

/// Tool capability flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// The tool list never changes at runtime
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Result of `initialize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Negotiated protocol revision
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Supported capabilities
    pub capabilities: ServerCapabilities,
    /// Usage hints for the assistant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Handshake result for this server
    #[must_use]
    pub fn new() -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION.to_owned(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_owned()),
        }
    }
}

impl Default for InitializeResponse {
    fn default() -> Self {
        Self::new()
    }
}
