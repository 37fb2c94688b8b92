// ABOUTME: Integration tests for GarminClient data endpoints
// ABOUTME: Covers request paths, activity paging, empty responses and HTTP status mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{consumer, endpoints, mount_social_profile, token_pair, FAR_FUTURE};
use garmin_connect::{GarminApi, GarminClient, ProviderError};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn connected_client(server: &MockServer) -> GarminClient {
    mount_social_profile(server).await;
    GarminClient::resume(endpoints(server), Some(consumer()), token_pair("access", FAR_FUTURE))
        .await
        .unwrap()
}

fn activities(from: u64, count: u64) -> Value {
    Value::Array(
        (from..from + count)
            .map(|id| {
                json!({
                    "activityId": id,
                    "activityName": format!("Run {id}"),
                    "activityType": { "typeKey": "running" },
                    "startTimeLocal": "2024-01-15 07:00:00"
                })
            })
            .collect(),
    )
}

#[tokio::test]
async fn test_activities_single_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activitylist-service/activities/search/activities"))
        .and(query_param("start", "0"))
        .and(query_param("limit", "5"))
        .and(header("authorization", "Bearer access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activities(900, 5)))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let result = client.get_activities(0, 5).await.unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(result[0].activity_id, 900);
    assert_eq!(result[4].activity_id, 904);
}

#[tokio::test]
async fn test_activities_span_multiple_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activitylist-service/activities/search/activities"))
        .and(query_param("start", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activities(0, 100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activitylist-service/activities/search/activities"))
        .and(query_param("start", "100"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activities(100, 50)))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let result = client.get_activities(0, 150).await.unwrap();

    assert_eq!(result.len(), 150);
    assert_eq!(result[149].activity_id, 149);
}

#[tokio::test]
async fn test_short_page_ends_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activitylist-service/activities/search/activities"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activities(0, 12)))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let result = client.get_activities(0, 300).await.unwrap();

    assert_eq!(result.len(), 12);
}

#[tokio::test]
async fn test_wellness_paths_use_display_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wellness-service/wellness/dailyHeartRate/runner42"))
        .and(query_param("date", "2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "restingHeartRate": 52,
            "maxHeartRate": 171
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wellness-service/wellness/dailySleepData/runner42"))
        .and(query_param("date", "2024-01-15"))
        .and(query_param("nonSleepBufferMinutes", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dailySleepDTO": { "sleepTimeSeconds": 27_000 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/usersummary-service/usersummary/daily/runner42"))
        .and(query_param("calendarDate", "2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalSteps": 8_000 })))
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let heart_rate = client.get_heart_rates("2024-01-15").await.unwrap();
    let sleep = client.get_sleep_data("2024-01-15").await.unwrap();
    let summary = client.get_user_summary("2024-01-15").await.unwrap();

    assert_eq!(heart_rate["restingHeartRate"], 52);
    assert_eq!(sleep["dailySleepDTO"]["sleepTimeSeconds"], 27_000);
    assert_eq!(summary["totalSteps"], 8_000);
}

#[tokio::test]
async fn test_steps_and_body_composition_ranges() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usersummary-service/stats/steps/daily/2024-01-15/2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "calendarDate": "2024-01-15",
            "totalSteps": 10_234,
            "totalDistance": 7_810.0,
            "stepGoal": 8_000
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weight-service/weight/dateRange"))
        .and(query_param("startDate", "2024-01-01"))
        .and(query_param("endDate", "2024-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dateWeightList": [],
            "totalAverage": { "weight": 71_500.0 }
        })))
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let steps = client
        .get_daily_steps("2024-01-15", "2024-01-15")
        .await
        .unwrap();
    let body = client
        .get_body_composition("2024-01-01", "2024-01-31")
        .await
        .unwrap();

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].total_steps, Some(10_234));
    assert_eq!(body["totalAverage"]["weight"], 71_500.0);
}

#[tokio::test]
async fn test_training_metrics_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metrics-service/metrics/trainingstatus/aggregated/2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mostRecentVO2Max": { "generic": { "vo2MaxValue": 52.0 } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/metrics-service/metrics/trainingreadiness/2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "calendarDate": "2024-01-15", "score": 74, "level": "HIGH" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let status = client.get_training_status("2024-01-15").await.unwrap();
    let readiness = client.get_training_readiness("2024-01-15").await.unwrap();

    assert_eq!(status["mostRecentVO2Max"]["generic"]["vo2MaxValue"], 52.0);
    assert_eq!(readiness[0]["score"], 74);
}

#[tokio::test]
async fn test_no_content_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wellness-service/wellness/dailyStress/2024-01-15"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    assert_eq!(client.get_stress_data("2024-01-15").await.unwrap(), Value::Null);
}

#[tokio::test]
async fn test_status_codes_map_to_provider_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activity-service/activity/404404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/device-service/deviceregistration/devices"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activity-service/activity/500500"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    assert!(matches!(
        client.get_activity(404_404).await,
        Err(ProviderError::NotFound { ref resource }) if resource == "activity 404404"
    ));
    assert!(matches!(
        client.get_devices().await,
        Err(ProviderError::RateLimited { status: 429 })
    ));
    match client.get_activity(500_500).await {
        Err(ProviderError::ApiError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_repeated_calls_hit_the_api_each_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activity-service/activity/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "activityId": 42 })))
        .expect(2)
        .mount(&server)
        .await;
    let client = connected_client(&server).await;

    let first = client.get_activity(42).await.unwrap();
    let second = client.get_activity(42).await.unwrap();

    assert_eq!(first, second);
}
