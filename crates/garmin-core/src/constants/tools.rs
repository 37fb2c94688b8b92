// ABOUTME: Tool name constants exposed through MCP tools/list and tools/call
// ABOUTME: Names match the Garmin Connect client method they wrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// List recent activities
pub const LIST_ACTIVITIES: &str = "list_activities";
/// Get one activity by id
pub const GET_ACTIVITY_DETAILS: &str = "get_activity_details";
/// Get the step count for a date
pub const GET_STEPS_DATA: &str = "get_steps_data";
/// Get heart rate data for a date
pub const GET_HEART_RATE_DATA: &str = "get_heart_rate_data";
/// Get sleep data for a date
pub const GET_SLEEP_DATA: &str = "get_sleep_data";
/// Get body composition for a date or range
pub const GET_BODY_COMPOSITION: &str = "get_body_composition";
/// Get the daily summary for a date
pub const GET_STATS: &str = "get_stats";
/// Get stress data for a date
pub const GET_STRESS_DATA: &str = "get_stress_data";
/// Get training status and load for a date
pub const GET_TRAINING_STATUS: &str = "get_training_status";
/// Get training readiness for a date
pub const GET_TRAINING_READINESS: &str = "get_training_readiness";
/// Get the account profile
pub const GET_USER_PROFILE: &str = "get_user_profile";
/// List registered devices
pub const GET_DEVICES: &str = "get_devices";
