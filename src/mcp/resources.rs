// ABOUTME: Shared server resources handed to the MCP request processor
// ABOUTME: Holds the Garmin session and the tool registry for the process lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::tools::ToolRegistry;
use garmin_connect::GarminApi;
use std::sync::Arc;

/// Everything a request needs, created once at startup
pub struct ServerResources {
    /// Authenticated Garmin Connect session
    pub api: Arc<dyn GarminApi>,
    /// Name to handler table
    pub registry: ToolRegistry,
}

impl ServerResources {
    /// Resources with every Garmin tool registered
    #[must_use]
    pub fn new(api: Arc<dyn GarminApi>) -> Self {
        Self::with_registry(api, ToolRegistry::with_default_tools())
    }

    /// Resources with a caller-built registry
    #[must_use]
    pub const fn with_registry(api: Arc<dyn GarminApi>, registry: ToolRegistry) -> Self {
        Self { api, registry }
    }
}
