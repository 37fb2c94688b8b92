// ABOUTME: Typed Garmin Connect response models for the fields the server reads
// ABOUTME: Unknown fields are ignored so API additions do not break parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Activity type descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    /// Machine key such as `running` or `lap_swimming`
    #[serde(default)]
    pub type_key: String,
}

/// Entry of the activity search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Garmin activity identifier
    pub activity_id: u64,
    /// User-visible name
    #[serde(default)]
    pub activity_name: Option<String>,
    /// Sport type
    #[serde(default)]
    pub activity_type: ActivityType,
    /// Local start time, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub start_time_local: Option<String>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Average heart rate in bpm
    #[serde(default, rename = "averageHR")]
    pub average_hr: Option<f64>,
    /// Energy in kilocalories
    #[serde(default)]
    pub calories: Option<f64>,
}

/// One day from the daily steps endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySteps {
    /// `YYYY-MM-DD`
    pub calendar_date: String,
    /// Steps taken, absent for days without data
    #[serde(default)]
    pub total_steps: Option<i64>,
    /// Distance walked in meters
    #[serde(default)]
    pub total_distance: Option<f64>,
    /// Daily step goal
    #[serde(default)]
    pub step_goal: Option<i64>,
}

/// Public profile of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    /// Identifier used in wellness endpoint paths
    #[serde(default)]
    pub display_name: String,
    /// Full name, if shared
    #[serde(default)]
    pub full_name: Option<String>,
    /// Account user name
    #[serde(default)]
    pub user_name: Option<String>,
}
