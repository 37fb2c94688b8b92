// ABOUTME: MCP request processing: routes JSON-RPC methods to handlers
// ABOUTME: Supports initialize, ping, tools/list and tools/call; notifications get no reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::resources::ServerResources;
use super::schema::{InitializeResponse, ToolResponse};
use crate::jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Routes MCP requests to their handlers
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle one request; `None` means nothing is sent back
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        Self::log_request(&request);

        if request.method.starts_with("notifications/") {
            debug!(method = %request.method, "Notification received");
            return None;
        }
        if request.is_notification() {
            warn!(method = %request.method, "Dropping request without id");
            return None;
        }

        let response = self.process_request(&request).await;
        Self::log_completion(&request.method, &response, start_time);
        Some(response)
    }

    async fn process_request(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.response_id();
        let result = match request.method.as_str() {
            "initialize" => Self::handle_initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(request.params.as_ref()).await,
            method => Err(JsonRpcError::method_not_found(method)),
        };

        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        }
    }

    fn handle_initialize() -> Result<Value, JsonRpcError> {
        debug!("Handling initialize request");
        to_result(&InitializeResponse::new())
    }

    fn handle_tools_list(&self) -> Value {
        json!({ "tools": self.resources.registry.tool_schemas() })
    }

    async fn handle_tools_call(&self, params: Option<&Value>) -> Result<Value, JsonRpcError> {
        let params =
            params.ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params"))?;
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| JsonRpcError::invalid_params("tools/call requires a tool name"))?;
        let args = match params.get("arguments") {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(args) => args.clone(),
        };

        let output = self
            .resources
            .registry
            .execute(self.resources.api.as_ref(), name, &args)
            .await
            .map_err(JsonRpcError::invalid_params)?;

        to_result(&ToolResponse::text(output.text, output.is_error))
    }

    fn log_request(request: &JsonRpcRequest) {
        debug!(
            method = %request.method,
            id = ?request.id,
            "MCP request received"
        );
    }

    fn log_completion(method: &str, response: &JsonRpcResponse, start_time: Instant) {
        let elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &response.error {
            Some(err) => warn!(
                method = %method,
                code = err.code,
                duration_ms = elapsed_ms,
                "MCP request failed: {}", err.message
            ),
            None => debug!(method = %method, duration_ms = elapsed_ms, "MCP request completed"),
        }
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize MCP result: {e}");
        JsonRpcError::internal(e)
    })
}
