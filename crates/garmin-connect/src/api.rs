// ABOUTME: GarminApi capability trait describing every call the MCP tools make
// ABOUTME: Implemented by GarminClient and by test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session capability
//!
//! Tool handlers depend only on this trait, never on the concrete client,
//! so the whole tool layer can be exercised against an in-memory double.
//!
//! Dates are `YYYY-MM-DD` strings that callers have already validated.
//! Endpoints whose payload the server passes through untouched return raw
//! [`serde_json::Value`]; `Value::Null` means the API returned no content.

use crate::models::{ActivitySummary, DailySteps, SocialProfile};
use async_trait::async_trait;
use garmin_core::errors::ProviderResult;
use serde_json::Value;

/// Operations of an authenticated Garmin Connect session
#[async_trait]
pub trait GarminApi: Send + Sync {
    /// Profile captured when the session was established
    fn profile(&self) -> &SocialProfile;

    /// Recent activities, most recent first, skipping `start` entries
    async fn get_activities(&self, start: usize, limit: usize)
        -> ProviderResult<Vec<ActivitySummary>>;

    /// Full detail of one activity
    async fn get_activity(&self, activity_id: u64) -> ProviderResult<Value>;

    /// Daily step totals for an inclusive date range
    async fn get_daily_steps(&self, start: &str, end: &str) -> ProviderResult<Vec<DailySteps>>;

    /// Heart rate summary and samples for one day
    async fn get_heart_rates(&self, date: &str) -> ProviderResult<Value>;

    /// Sleep record for one night
    async fn get_sleep_data(&self, date: &str) -> ProviderResult<Value>;

    /// Weigh-ins and body composition over an inclusive date range
    async fn get_body_composition(&self, start: &str, end: &str) -> ProviderResult<Value>;

    /// Daily activity summary (steps, calories, intensity minutes)
    async fn get_user_summary(&self, date: &str) -> ProviderResult<Value>;

    /// Stress levels for one day
    async fn get_stress_data(&self, date: &str) -> ProviderResult<Value>;

    /// Training status, acute/chronic load and VO2 max for one day
    async fn get_training_status(&self, date: &str) -> ProviderResult<Value>;

    /// Training readiness score and contributing factors for one day
    async fn get_training_readiness(&self, date: &str) -> ProviderResult<Value>;

    /// Devices registered to the account
    async fn get_devices(&self) -> ProviderResult<Value>;
}
