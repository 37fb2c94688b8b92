// ABOUTME: Account tools: profile captured at sign-in and registered devices
// ABOUTME: The profile tool answers from the session without a network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::registry::ToolFuture;
use super::{render_json, render_payload, session_error};
use garmin_connect::GarminApi;
use garmin_core::constants::tools::{GET_DEVICES, GET_USER_PROFILE};
use serde_json::{json, Value};

/// `get_user_profile`
pub fn get_user_profile<'a>(api: &'a dyn GarminApi, _args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let profile = api.profile();
        render_json(
            GET_USER_PROFILE,
            &json!({
                "display_name": profile.display_name,
                "full_name": profile.full_name,
                "user_name": profile.user_name,
            }),
        )
    })
}

/// `get_devices`
pub fn get_devices<'a>(api: &'a dyn GarminApi, _args: &'a Value) -> ToolFuture<'a> {
    Box::pin(async move {
        let devices = api
            .get_devices()
            .await
            .map_err(session_error(GET_DEVICES))?;
        render_payload(GET_DEVICES, &devices, "No devices found.".to_owned())
    })
}
