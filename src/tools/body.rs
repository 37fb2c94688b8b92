// ABOUTME: Body composition tool over a single date or an inclusive date range
// ABOUTME: Treats a weigh-in list with no entries as no data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::parse_date_range;
use super::registry::ToolFuture;
use super::{render_payload, session_error};
use garmin_connect::GarminApi;
use garmin_core::constants::tools::GET_BODY_COMPOSITION;
use serde_json::Value;

/// Weigh-in list inside the weight service's range response
const WEIGH_INS_FIELD: &str = "dateWeightList";

/// `get_body_composition`: `date` with optional `end_date`
pub fn get_body_composition<'a>(api: &'a dyn GarminApi, args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let (start, end) = parse_date_range(GET_BODY_COMPOSITION, args)?;
        let payload = api
            .get_body_composition(&start, &end)
            .await
            .map_err(session_error(GET_BODY_COMPOSITION))?;

        let no_data = if start == end {
            format!("No body composition data found for {start}.")
        } else {
            format!("No body composition data found from {start} to {end}.")
        };
        if has_no_weigh_ins(&payload) {
            return Ok(no_data);
        }
        render_payload(GET_BODY_COMPOSITION, &payload, no_data)
    })
}

fn has_no_weigh_ins(payload: &Value) -> bool {
    payload
        .get(WEIGH_INS_FIELD)
        .and_then(Value::as_array)
        .is_some_and(Vec::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weigh_in_detection() {
        assert!(has_no_weigh_ins(&json!({ "dateWeightList": [], "totalAverage": {} })));
        assert!(!has_no_weigh_ins(&json!({ "dateWeightList": [{ "weight": 71_500.0 }] })));
        assert!(!has_no_weigh_ins(&json!({ "totalAverage": { "weight": 71_500.0 } })));
    }
}
