// ABOUTME: Training tools: daily training status and training readiness
// ABOUTME: Both take one YYYY-MM-DD date and pass the metrics-service payload through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::parse_date;
use super::registry::ToolFuture;
use super::{render_payload, session_error};
use garmin_connect::GarminApi;
use garmin_core::constants::json_fields;
use garmin_core::constants::tools::{GET_TRAINING_READINESS, GET_TRAINING_STATUS};
use serde_json::Value;

/// `get_training_status`: status, load balance and VO2 max
pub fn get_training_status<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_TRAINING_STATUS, args, json_fields::DATE)?;
        let payload = api
            .get_training_status(&date)
            .await
            .map_err(session_error(GET_TRAINING_STATUS))?;
        render_payload(
            GET_TRAINING_STATUS,
            &payload,
            format!("No training status found for {date}."),
        )
    })
}

/// `get_training_readiness`
pub fn get_training_readiness<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_TRAINING_READINESS, args, json_fields::DATE)?;
        let payload = api
            .get_training_readiness(&date)
            .await
            .map_err(session_error(GET_TRAINING_READINESS))?;
        render_payload(
            GET_TRAINING_READINESS,
            &payload,
            format!("No training readiness data found for {date}."),
        )
    })
}
