// ABOUTME: Activity tools: recent activity list and single activity detail
// ABOUTME: The list is rendered as a numbered text block in service order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::{parse_activity_id, parse_limit};
use super::registry::ToolFuture;
use super::{render_payload, session_error};
use crate::formatters::format_activity_list;
use garmin_connect::GarminApi;
use garmin_core::constants::tools::{GET_ACTIVITY_DETAILS, LIST_ACTIVITIES};
use serde_json::Value;

/// `list_activities`: the most recent `limit` activities
pub fn list_activities<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let limit = parse_limit(LIST_ACTIVITIES, args)?;
        let mut activities = api
            .get_activities(0, limit)
            .await
            .map_err(session_error(LIST_ACTIVITIES))?;
        activities.truncate(limit);
        Ok(format_activity_list(&activities))
    })
}

/// `get_activity_details`: full activity payload as JSON
pub fn get_activity_details<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let activity_id = parse_activity_id(GET_ACTIVITY_DETAILS, args)?;
        let activity = api
            .get_activity(activity_id)
            .await
            .map_err(session_error(GET_ACTIVITY_DETAILS))?;
        render_payload(
            GET_ACTIVITY_DETAILS,
            &activity,
            format!("No details found for activity {activity_id}."),
        )
    })
}
