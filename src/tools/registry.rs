// ABOUTME: Type-safe tool registry mapping MCP tool names to Garmin handlers
// ABOUTME: Renders handler failures as readable error text at the dispatch boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{activities, body, health, profile, training};
use crate::errors::ToolError;
use crate::logging::log_tool_call;
use crate::mcp::schema::{JsonSchema, PropertySchema, ToolSchema};
use garmin_connect::GarminApi;
use garmin_core::constants::garmin::limits;
use garmin_core::constants::json_fields;
use garmin_core::constants::tools::{
    GET_ACTIVITY_DETAILS, GET_BODY_COMPOSITION, GET_DEVICES, GET_HEART_RATE_DATA, GET_SLEEP_DATA,
    GET_STATS, GET_STEPS_DATA, GET_STRESS_DATA, GET_TRAINING_READINESS, GET_TRAINING_STATUS,
    GET_USER_PROFILE, LIST_ACTIVITIES,
};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::debug;

/// Type-safe tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Recent activities as a text list
    ListActivities,
    /// Full detail of one activity
    GetActivityDetails,
    /// Step count for a date
    GetStepsData,
    /// Heart rate data for a date
    GetHeartRateData,
    /// Sleep data for a date
    GetSleepData,
    /// Body composition for a date or range
    GetBodyComposition,
    /// Daily summary for a date
    GetStats,
    /// Stress data for a date
    GetStressData,
    /// Training status and load for a date
    GetTrainingStatus,
    /// Training readiness for a date
    GetTrainingReadiness,
    /// Account profile
    GetUserProfile,
    /// Registered devices
    GetDevices,
}

impl ToolId {
    /// Every tool, in `tools/list` order
    pub const ALL: [Self; 12] = [
        Self::ListActivities,
        Self::GetActivityDetails,
        Self::GetStepsData,
        Self::GetHeartRateData,
        Self::GetSleepData,
        Self::GetBodyComposition,
        Self::GetStats,
        Self::GetStressData,
        Self::GetTrainingStatus,
        Self::GetTrainingReadiness,
        Self::GetUserProfile,
        Self::GetDevices,
    ];

    /// Convert from string tool name to strongly-typed ID
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            LIST_ACTIVITIES => Some(Self::ListActivities),
            GET_ACTIVITY_DETAILS => Some(Self::GetActivityDetails),
            GET_STEPS_DATA => Some(Self::GetStepsData),
            GET_HEART_RATE_DATA => Some(Self::GetHeartRateData),
            GET_SLEEP_DATA => Some(Self::GetSleepData),
            GET_BODY_COMPOSITION => Some(Self::GetBodyComposition),
            GET_STATS => Some(Self::GetStats),
            GET_STRESS_DATA => Some(Self::GetStressData),
            GET_TRAINING_STATUS => Some(Self::GetTrainingStatus),
            GET_TRAINING_READINESS => Some(Self::GetTrainingReadiness),
            GET_USER_PROFILE => Some(Self::GetUserProfile),
            GET_DEVICES => Some(Self::GetDevices),
            _ => None,
        }
    }

    /// Tool name as exposed over MCP
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListActivities => LIST_ACTIVITIES,
            Self::GetActivityDetails => GET_ACTIVITY_DETAILS,
            Self::GetStepsData => GET_STEPS_DATA,
            Self::GetHeartRateData => GET_HEART_RATE_DATA,
            Self::GetSleepData => GET_SLEEP_DATA,
            Self::GetBodyComposition => GET_BODY_COMPOSITION,
            Self::GetStats => GET_STATS,
            Self::GetStressData => GET_STRESS_DATA,
            Self::GetTrainingStatus => GET_TRAINING_STATUS,
            Self::GetTrainingReadiness => GET_TRAINING_READINESS,
            Self::GetUserProfile => GET_USER_PROFILE,
            Self::GetDevices => GET_DEVICES,
        }
    }

    /// Description shown in `tools/list`
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ListActivities => "List recent Garmin Connect activities with name, type, start time and ID",
            Self::GetActivityDetails => "Get the full detail of one activity by its ID",
            Self::GetStepsData => "Get the total step count, step goal and distance for a date",
            Self::GetHeartRateData => "Get resting, minimum and maximum heart rate and samples for a date",
            Self::GetSleepData => "Get sleep stages, duration and scores for the night of a date",
            Self::GetBodyComposition => "Get weight and body composition for a date or date range",
            Self::GetStats => "Get the daily activity summary (steps, calories, intensity minutes) for a date",
            Self::GetStressData => "Get stress levels recorded on a date",
            Self::GetTrainingStatus => "Get training status, training load and VO2 max for a date",
            Self::GetTrainingReadiness => "Get the training readiness score and its contributing factors for a date",
            Self::GetUserProfile => "Get the Garmin Connect profile of the signed-in account",
            Self::GetDevices => "List devices registered to the account",
        }
    }

    /// What a failure of this tool failed to retrieve
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Self::ListActivities => "activities",
            Self::GetActivityDetails => "activity details",
            Self::GetStepsData => "steps data",
            Self::GetHeartRateData => "heart rate data",
            Self::GetSleepData => "sleep data",
            Self::GetBodyComposition => "body composition",
            Self::GetStats => "stats",
            Self::GetStressData => "stress data",
            Self::GetTrainingStatus => "training status",
            Self::GetTrainingReadiness => "training readiness",
            Self::GetUserProfile => "user profile",
            Self::GetDevices => "devices",
        }
    }

    /// JSON Schema of the tool's arguments
    #[must_use]
    pub fn input_schema(self) -> JsonSchema {
        let date = || PropertySchema::date("Calendar date in YYYY-MM-DD format");
        match self {
            Self::ListActivities => JsonSchema::empty().with_property(
                json_fields::LIMIT,
                PropertySchema::bounded_integer(
                    "Number of activities to return",
                    limits::DEFAULT_ACTIVITY_LIMIT as u64,
                    1,
                    limits::MAX_ACTIVITY_LIMIT as u64,
                ),
                false,
            ),
            Self::GetActivityDetails => JsonSchema::empty().with_property(
                json_fields::ACTIVITY_ID,
                PropertySchema::string("Garmin activity ID, as shown by list_activities"),
                true,
            ),
            Self::GetStepsData
            | Self::GetHeartRateData
            | Self::GetSleepData
            | Self::GetStats
            | Self::GetStressData
            | Self::GetTrainingStatus
            | Self::GetTrainingReadiness => {
                JsonSchema::empty().with_property(json_fields::DATE, date(), true)
            }
            Self::GetBodyComposition => JsonSchema::empty()
                .with_property(json_fields::DATE, date(), true)
                .with_property(
                    json_fields::END_DATE,
                    PropertySchema::date("Optional inclusive end date in YYYY-MM-DD format; defaults to date"),
                    false,
                ),
            Self::GetUserProfile | Self::GetDevices => JsonSchema::empty(),
        }
    }

    /// MCP descriptor for `tools/list`
    #[must_use]
    pub fn schema(self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            input_schema: self.input_schema(),
        }
    }
}

/// Future returned by a tool handler
pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ToolError>> + Send + 'a>>;

/// Handler function type: one session call, rendered as text
pub type AsyncToolHandler = for<'a> fn(&'a dyn GarminApi, &'a Value) -> ToolFuture<'a>;

/// Tool metadata and handler
#[derive(Clone, Copy)]
pub struct ToolInfo {
    /// Strongly-typed tool identifier
    pub id: ToolId,
    /// Handler making the session call
    pub handler: AsyncToolHandler,
}

impl ToolInfo {
    /// Pair an id with its handler
    #[must_use]
    pub const fn new(id: ToolId, handler: AsyncToolHandler) -> Self {
        Self { id, handler }
    }
}

/// Text produced by a tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Result or error text
    pub text: String,
    /// Whether the text describes a failure
    pub is_error: bool,
}

/// Name to handler table, populated once at startup
pub struct ToolRegistry {
    tools: HashMap<ToolId, ToolInfo>,
}

impl ToolRegistry {
    /// Create new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry holding every Garmin tool
    #[must_use]
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();
        for id in ToolId::ALL {
            registry.register(ToolInfo::new(id, default_handler(id)));
        }
        registry
    }

    /// Register a tool with its handler
    pub fn register(&mut self, tool_info: ToolInfo) {
        self.tools.insert(tool_info.id, tool_info);
    }

    /// Get tool info by ID
    #[must_use]
    pub fn get_tool(&self, id: ToolId) -> Option<&ToolInfo> {
        self.tools.get(&id)
    }

    /// Registered tool matching an MCP tool name
    #[must_use]
    pub fn resolve_tool_name(&self, name: &str) -> Option<ToolId> {
        ToolId::from_name(name).filter(|id| self.tools.contains_key(id))
    }

    /// Registered tool ids in `tools/list` order
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolId> {
        ToolId::ALL
            .into_iter()
            .filter(|id| self.tools.contains_key(id))
            .collect()
    }

    /// Descriptors for `tools/list`
    #[must_use]
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.list_tools().into_iter().map(ToolId::schema).collect()
    }

    /// Run a tool by name
    ///
    /// Handler failures come back as `Ok` with `is_error` set and the text
    /// `Error retrieving <what>: <cause>`.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` when no tool has this name
    pub async fn execute(
        &self,
        api: &dyn GarminApi,
        name: &str,
        args: &Value,
    ) -> Result<ToolOutput, ToolError> {
        let info = self
            .resolve_tool_name(name)
            .and_then(|id| self.get_tool(id))
            .ok_or_else(|| ToolError::not_found(name))?;

        debug!(tool = %name, "Executing tool");
        let started = Instant::now();
        let result = (info.handler)(api, args).await;
        log_tool_call(name, result.is_ok(), started.elapsed());

        Ok(match result {
            Ok(text) => ToolOutput {
                text,
                is_error: false,
            },
            Err(error) => ToolOutput {
                text: format!("Error retrieving {}: {error}", info.id.subject()),
                is_error: true,
            },
        })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

const fn default_handler(id: ToolId) -> AsyncToolHandler {
    match id {
        ToolId::ListActivities => activities::list_activities,
        ToolId::GetActivityDetails => activities::get_activity_details,
        ToolId::GetStepsData => health::get_steps_data,
        ToolId::GetHeartRateData => health::get_heart_rate_data,
        ToolId::GetSleepData => health::get_sleep_data,
        ToolId::GetBodyComposition => body::get_body_composition,
        ToolId::GetStats => health::get_stats,
        ToolId::GetStressData => health::get_stress_data,
        ToolId::GetTrainingStatus => training::get_training_status,
        ToolId::GetTrainingReadiness => training::get_training_readiness,
        ToolId::GetUserProfile => profile::get_user_profile,
        ToolId::GetDevices => profile::get_devices,
    }
}
