// ABOUTME: Daily health metric tools: steps, heart rate, sleep, stress and daily summary
// ABOUTME: Each takes one YYYY-MM-DD date and passes the service payload through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::parse_date;
use super::registry::ToolFuture;
use super::{render_json, render_payload, session_error};
use garmin_connect::{DailySteps, GarminApi};
use garmin_core::constants::json_fields;
use garmin_core::constants::tools::{
    GET_HEART_RATE_DATA, GET_SLEEP_DATA, GET_STATS, GET_STEPS_DATA, GET_STRESS_DATA,
};
use serde::Serialize;
use serde_json::Value;

/// Step totals for one day as returned by `get_steps_data`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsRecord {
    /// Calendar date
    pub date: String,
    /// Steps taken, never negative
    pub total_steps: u64,
    /// Step goal for the day
    pub step_goal: Option<i64>,
    /// Distance covered on foot
    pub total_distance_meters: Option<f64>,
}

impl StepsRecord {
    /// Record for `date`, or `None` when the service has no step count for it
    #[must_use]
    pub fn from_daily(date: &str, days: &[DailySteps]) -> Option<Self> {
        let day = days.iter().find(|day| day.calendar_date == date)?;
        let steps = day.total_steps?;
        Some(Self {
            date: date.to_owned(),
            total_steps: u64::try_from(steps).unwrap_or(0),
            step_goal: day.step_goal,
            total_distance_meters: day.total_distance,
        })
    }
}

/// `get_steps_data`: step total for a date
pub fn get_steps_data<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_STEPS_DATA, args, json_fields::DATE)?;
        let days = api
            .get_daily_steps(&date, &date)
            .await
            .map_err(session_error(GET_STEPS_DATA))?;
        match StepsRecord::from_daily(&date, &days) {
            Some(record) => render_json(GET_STEPS_DATA, &record),
            None => Ok(format!("No steps data found for {date}.")),
        }
    })
}

/// `get_heart_rate_data`
pub fn get_heart_rate_data<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_HEART_RATE_DATA, args, json_fields::DATE)?;
        let payload = api
            .get_heart_rates(&date)
            .await
            .map_err(session_error(GET_HEART_RATE_DATA))?;
        render_payload(
            GET_HEART_RATE_DATA,
            &payload,
            format!("No heart rate data found for {date}."),
        )
    })
}

/// `get_sleep_data`
pub fn get_sleep_data<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_SLEEP_DATA, args, json_fields::DATE)?;
        let payload = api
            .get_sleep_data(&date)
            .await
            .map_err(session_error(GET_SLEEP_DATA))?;
        render_payload(
            GET_SLEEP_DATA,
            &payload,
            format!("No sleep data found for {date}."),
        )
    })
}

/// `get_stress_data`
pub fn get_stress_data<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_STRESS_DATA, args, json_fields::DATE)?;
        let payload = api
            .get_stress_data(&date)
            .await
            .map_err(session_error(GET_STRESS_DATA))?;
        render_payload(
            GET_STRESS_DATA,
            &payload,
            format!("No stress data found for {date}."),
        )
    })
}

/// `get_stats`: the daily summary
pub fn get_stats<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let date = parse_date(GET_STATS, args, json_fields::DATE)?;
        let payload = api
            .get_user_summary(&date)
            .await
            .map_err(session_error(GET_STATS))?;
        render_payload(GET_STATS, &payload, format!("No stats found for {date}."))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(date: &str, steps: Option<i64>) -> DailySteps {
        DailySteps {
            calendar_date: date.to_owned(),
            total_steps: steps,
            total_distance: Some(8_012.5),
            step_goal: Some(10_000),
        }
    }

    #[test]
    fn test_steps_record_picks_matching_day() {
        let days = [day("2024-01-14", Some(100)), day("2024-01-15", Some(9_876))];
        let record = StepsRecord::from_daily("2024-01-15", &days).unwrap();
        assert_eq!(record.total_steps, 9_876);
        assert_eq!(record.step_goal, Some(10_000));
    }

    #[test]
    fn test_steps_record_clamps_negative_and_skips_missing() {
        let record = StepsRecord::from_daily("2024-01-15", &[day("2024-01-15", Some(-4))]).unwrap();
        assert_eq!(record.total_steps, 0);

        assert!(StepsRecord::from_daily("2024-01-15", &[day("2024-01-15", None)]).is_none());
        assert!(StepsRecord::from_daily("2024-01-15", &[]).is_none());
    }

    #[test]
    fn test_steps_record_ignores_other_days() {
        let days = [day("2024-01-14", Some(12_345))];
        assert!(StepsRecord::from_daily("2024-01-15", &days).is_none());
    }
}
