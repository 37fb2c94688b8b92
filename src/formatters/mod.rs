// ABOUTME: Rendering of Garmin Connect payloads into tool result text
// ABOUTME: Activity list text block, pretty JSON and no-data messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use garmin_connect::ActivitySummary;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

const UNKNOWN: &str = "Unknown";

/// Text block listing activities in the order given
///
/// Returns `"No activities found."` for an empty list.
#[must_use]
pub fn format_activity_list(activities: &[ActivitySummary]) -> String {
    if activities.is_empty() {
        return "No activities found.".to_owned();
    }

    let mut out = format!("Last {} activities:\n\n", activities.len());
    for (index, activity) in activities.iter().enumerate() {
        let type_key = activity.activity_type.type_key.as_str();
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "--- Activity {} ---\nActivity: {}\nType: {}\nDate: {}\nID: {}\n\n",
            index + 1,
            activity.activity_name.as_deref().unwrap_or(UNKNOWN),
            if type_key.is_empty() { UNKNOWN } else { type_key },
            activity.start_time_local.as_deref().unwrap_or(UNKNOWN),
            activity.activity_id,
        );
    }
    out
}

/// Whether a payload carries no data worth showing
#[must_use]
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the value cannot be serialized
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activity(id: u64, name: Option<&str>, type_key: &str) -> ActivitySummary {
        serde_json::from_value(json!({
            "activityId": id,
            "activityName": name,
            "activityType": { "typeKey": type_key },
            "startTimeLocal": "2024-01-15 07:02:11"
        }))
        .unwrap()
    }

    #[test]
    fn test_activity_list_layout() {
        let text = format_activity_list(&[
            activity(11, Some("Morning Run"), "running"),
            activity(10, None, ""),
        ]);

        assert!(text.starts_with("Last 2 activities:\n\n--- Activity 1 ---\n"));
        assert!(text.contains("Activity: Morning Run\nType: running\nDate: 2024-01-15 07:02:11\nID: 11\n\n"));
        assert!(text.contains("--- Activity 2 ---\nActivity: Unknown\nType: Unknown\n"));
    }

    #[test]
    fn test_empty_activity_list() {
        assert_eq!(format_activity_list(&[]), "No activities found.");
    }

    #[test]
    fn test_empty_payloads() {
        assert!(is_empty_payload(&Value::Null));
        assert!(is_empty_payload(&json!([])));
        assert!(is_empty_payload(&json!({})));
        assert!(!is_empty_payload(&json!({ "restingHeartRate": 50 })));
        assert!(!is_empty_payload(&json!(0)));
    }
}
