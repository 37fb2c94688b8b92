// ABOUTME: Shared test doubles for server integration tests
// ABOUTME: MockGarminApi serves canned payloads and records every session call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use async_trait::async_trait;
use garmin_connect::{ActivitySummary, DailySteps, GarminApi, ProviderError, ProviderResult, SocialProfile};
use garmin_mcp_server::mcp::{McpRequestProcessor, ServerResources};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// In-memory session returning canned payloads
#[derive(Default)]
pub struct MockGarminApi {
    pub profile: SocialProfile,
    pub activities: Vec<ActivitySummary>,
    pub activity: Value,
    pub steps: Vec<DailySteps>,
    pub heart_rates: Value,
    pub sleep: Value,
    pub body_composition: Value,
    pub user_summary: Value,
    pub stress: Value,
    pub devices: Value,
    pub training_status: Value,
    pub training_readiness: Value,
    /// When set, every data call fails with this HTTP status and body
    pub failure: Option<(u16, String)>,
    /// Session calls made so far, filled by the trait methods
    pub calls: Mutex<Vec<String>>,
}

impl MockGarminApi {
    pub fn new() -> Self {
        Self {
            profile: SocialProfile {
                display_name: "runner42".to_owned(),
                full_name: Some("Alex Runner".to_owned()),
                user_name: Some("alex@example.com".to_owned()),
            },
            ..Self::default()
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            failure: Some((status, body.to_owned())),
            ..Self::new()
        }
    }

    /// Session calls made so far, as `name(args)`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ProviderResult<()> {
        let outcome = match &self.failure {
            Some((status, body)) => Err(ProviderError::from_status(*status, body.clone(), &call)),
            None => Ok(()),
        };
        self.calls.lock().unwrap().push(call);
        outcome
    }
}

#[async_trait]
impl GarminApi for MockGarminApi {
    fn profile(&self) -> &SocialProfile {
        &self.profile
    }

    async fn get_activities(&self, start: usize, limit: usize) -> ProviderResult<Vec<ActivitySummary>> {
        self.record(format!("get_activities({start},{limit})"))?;
        Ok(self.activities.iter().skip(start).take(limit).cloned().collect())
    }

    async fn get_activity(&self, activity_id: u64) -> ProviderResult<Value> {
        self.record(format!("get_activity({activity_id})"))?;
        Ok(self.activity.clone())
    }

    async fn get_daily_steps(&self, start: &str, end: &str) -> ProviderResult<Vec<DailySteps>> {
        self.record(format!("get_daily_steps({start},{end})"))?;
        Ok(self.steps.clone())
    }

    async fn get_heart_rates(&self, date: &str) -> ProviderResult<Value> {
        self.record(format!("get_heart_rates({date})"))?;
        Ok(self.heart_rates.clone())
    }

    async fn get_sleep_data(&self, date: &str) -> ProviderResult<Value> {
        self.record(format!("get_sleep_data({date})"))?;
        Ok(self.sleep.clone())
    }

    async fn get_body_composition(&self, start: &str, end: &str) -> ProviderResult<Value> {
        self.record(format!("get_body_composition({start},{end})"))?;
        Ok(self.body_composition.clone())
    }

    async fn get_user_summary(&self, date: &str) -> ProviderResult<Value> {
        self.record(format!("get_user_summary({date})"))?;
        Ok(self.user_summary.clone())
    }

    async fn get_stress_data(&self, date: &str) -> ProviderResult<Value> {
        self.record(format!("get_stress_data({date})"))?;
        Ok(self.stress.clone())
    }

    async fn get_training_status(&self, date: &str) -> ProviderResult<Value> {
        self.record(format!("get_training_status({date})"))?;
        Ok(self.training_status.clone())
    }

    async fn get_training_readiness(&self, date: &str) -> ProviderResult<Value> {
        self.record(format!("get_training_readiness({date})"))?;
        Ok(self.training_readiness.clone())
    }

    async fn get_devices(&self) -> ProviderResult<Value> {
        self.record("get_devices()".to_owned())?;
        Ok(self.devices.clone())
    }
}

/// Activity as the search endpoint returns it
pub fn activity(id: u64, name: &str, type_key: &str, start: &str) -> ActivitySummary {
    serde_json::from_value(json!({
        "activityId": id,
        "activityName": name,
        "activityType": { "typeKey": type_key },
        "startTimeLocal": start,
        "distance": 5_012.3,
        "duration": 1_800.0
    }))
    .unwrap()
}

/// Twelve runs, most recent first
pub fn recent_activities() -> Vec<ActivitySummary> {
    (0..12u64)
        .map(|i| {
            activity(
                1_000 - i,
                &format!("Run {}", 12 - i),
                "running",
                &format!("2024-01-{:02} 07:00:00", 20 - i),
            )
        })
        .collect()
}

pub fn steps_for(date: &str, total: i64) -> DailySteps {
    DailySteps {
        calendar_date: date.to_owned(),
        total_steps: Some(total),
        total_distance: Some(7_420.0),
        step_goal: Some(8_000),
    }
}

/// Processor over a mock session
pub fn processor(api: MockGarminApi) -> (McpRequestProcessor, Arc<MockGarminApi>) {
    let api = Arc::new(api);
    let resources = Arc::new(ServerResources::new(api.clone()));
    (McpRequestProcessor::new(resources), api)
}
