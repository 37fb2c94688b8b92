// ABOUTME: Argument parsing for tool calls: limits, calendar dates and activity ids
// ABOUTME: Validation failures become ToolError values before any network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ToolError;
use chrono::NaiveDate;
use garmin_core::constants::garmin::{limits, DATE_FORMAT};
use garmin_core::constants::json_fields;
use serde_json::Value;

/// Result count for `list_activities`
///
/// Absent or `null` means the default. Accepts an integer or a numeric string.
///
/// # Errors
///
/// Returns `InvalidParameter` when the value is not a whole number in
/// `1..=1000`
pub fn parse_limit(tool_name: &str, args: &Value) -> Result<usize, ToolError> {
    let field = json_fields::LIMIT;
    let raw = match args.get(field) {
        None | Some(Value::Null) => return Ok(limits::DEFAULT_ACTIVITY_LIMIT),
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        Some(_) => None,
    };

    let limit = raw
        .and_then(|value| usize::try_from(value).ok())
        .filter(|value| (1..=limits::MAX_ACTIVITY_LIMIT).contains(value));

    limit.ok_or_else(|| {
        ToolError::invalid_parameter(
            tool_name,
            field,
            format!(
                "expected a whole number between 1 and {}",
                limits::MAX_ACTIVITY_LIMIT
            ),
        )
    })
}

/// Required `YYYY-MM-DD` date, returned in canonical form
///
/// # Errors
///
/// Returns `MissingParameter` when absent and `InvalidParameter` when the
/// value is not a real calendar date
pub fn parse_date(tool_name: &str, args: &Value, field: &str) -> Result<String, ToolError> {
    parse_optional_date(tool_name, args, field)?
        .ok_or_else(|| ToolError::missing_parameter(tool_name, field))
}

/// Optional `YYYY-MM-DD` date; absent, `null` or empty means `None`
///
/// # Errors
///
/// Returns `InvalidParameter` when present but not a calendar date
pub fn parse_optional_date(
    tool_name: &str,
    args: &Value,
    field: &str,
) -> Result<Option<String>, ToolError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map(|date| Some(date.format(DATE_FORMAT).to_string()))
            .map_err(|_| {
                ToolError::invalid_parameter(
                    tool_name,
                    field,
                    format!("expected a YYYY-MM-DD date, got '{text}'"),
                )
            }),
        Some(other) => Err(ToolError::invalid_parameter(
            tool_name,
            field,
            format!("expected a YYYY-MM-DD date string, got {other}"),
        )),
    }
}

/// `date` plus optional `end_date` defaulting to `date`
///
/// # Errors
///
/// Propagates date errors and rejects an `end_date` earlier than `date`
pub fn parse_date_range(tool_name: &str, args: &Value) -> Result<(String, String), ToolError> {
    let start = parse_date(tool_name, args, json_fields::DATE)?;
    let end = parse_optional_date(tool_name, args, json_fields::END_DATE)?
        .unwrap_or_else(|| start.clone());

    // Canonical YYYY-MM-DD strings order the same way as the dates
    if end < start {
        return Err(ToolError::invalid_parameter(
            tool_name,
            json_fields::END_DATE,
            format!("'{end}' is before '{start}'"),
        ));
    }
    Ok((start, end))
}

/// Garmin activity id from a numeric string or an integer
///
/// # Errors
///
/// Returns `MissingParameter` when absent or empty and `InvalidParameter`
/// when the value is not a positive integer
pub fn parse_activity_id(tool_name: &str, args: &Value) -> Result<u64, ToolError> {
    let field = json_fields::ACTIVITY_ID;
    let invalid = |shown: &str| {
        ToolError::invalid_parameter(
            tool_name,
            field,
            format!("expected a numeric activity id, got {shown}"),
        )
    };

    match args.get(field) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool_name, field)),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ToolError::missing_parameter(tool_name, field));
            }
            trimmed
                .parse::<u64>()
                .map_err(|_| invalid(&format!("'{text}'")))
        }
        Some(Value::Number(number)) => number
            .as_u64()
            .ok_or_else(|| invalid(&number.to_string())),
        Some(other) => Err(invalid(&other.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    const TOOL: &str = "test_tool";

    #[test]
    fn test_limit_defaults_and_bounds() {
        assert_eq!(parse_limit(TOOL, &json!({})).unwrap(), 5);
        assert_eq!(parse_limit(TOOL, &json!({ "limit": null })).unwrap(), 5);
        assert_eq!(parse_limit(TOOL, &json!({ "limit": 20 })).unwrap(), 20);
        assert_eq!(parse_limit(TOOL, &json!({ "limit": "7" })).unwrap(), 7);
        assert_eq!(parse_limit(TOOL, &json!({ "limit": 1000 })).unwrap(), 1000);

        assert!(parse_limit(TOOL, &json!({ "limit": 0 })).is_err());
        assert!(parse_limit(TOOL, &json!({ "limit": 1001 })).is_err());
        assert!(parse_limit(TOOL, &json!({ "limit": -3 })).is_err());
        assert!(parse_limit(TOOL, &json!({ "limit": 2.5 })).is_err());
        assert!(parse_limit(TOOL, &json!({ "limit": "lots" })).is_err());
    }

    #[test]
    fn test_date_parsing() {
        let args = json!({ "date": "2024-01-15" });
        assert_eq!(parse_date(TOOL, &args, "date").unwrap(), "2024-01-15");

        let err = parse_date(TOOL, &json!({ "date": "2024-13-45" }), "date").unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { .. }));
        assert!(err.to_string().contains("2024-13-45"));

        let err = parse_date(TOOL, &json!({}), "date").unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter { .. }));

        assert!(parse_date(TOOL, &json!({ "date": 20_240_115 }), "date").is_err());
    }

    #[test]
    fn test_date_range() {
        let single = parse_date_range(TOOL, &json!({ "date": "2024-01-15" })).unwrap();
        assert_eq!(single, ("2024-01-15".to_owned(), "2024-01-15".to_owned()));

        let range =
            parse_date_range(TOOL, &json!({ "date": "2024-01-01", "end_date": "2024-01-31" }))
                .unwrap();
        assert_eq!(range.1, "2024-01-31");

        let err =
            parse_date_range(TOOL, &json!({ "date": "2024-01-15", "end_date": "2024-01-14" }))
                .unwrap_err();
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn test_activity_id() {
        assert_eq!(
            parse_activity_id(TOOL, &json!({ "activity_id": "12345678901" })).unwrap(),
            12_345_678_901
        );
        assert_eq!(
            parse_activity_id(TOOL, &json!({ "activity_id": 42 })).unwrap(),
            42
        );
        assert!(matches!(
            parse_activity_id(TOOL, &json!({ "activity_id": "" })),
            Err(ToolError::MissingParameter { .. })
        ));
        assert!(matches!(
            parse_activity_id(TOOL, &json!({ "activity_id": "abc" })),
            Err(ToolError::InvalidParameter { .. })
        ));
    }
}
