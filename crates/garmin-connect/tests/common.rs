// ABOUTME: Shared fixtures for garmin-connect integration tests
// ABOUTME: Token pairs and wiremock mounts standing in for Garmin SSO and Connect API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use garmin_connect::{GarminEndpoints, OAuth1Token, OAuth2Token, OAuthConsumer, TokenPair};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Far enough in the future that tokens never look expired
pub const FAR_FUTURE: i64 = 4_102_444_800;

pub fn consumer() -> OAuthConsumer {
    OAuthConsumer {
        consumer_key: "test-consumer-key".to_owned(),
        consumer_secret: "test-consumer-secret".to_owned(),
    }
}

pub fn endpoints(server: &MockServer) -> GarminEndpoints {
    GarminEndpoints::with_base_url(&server.uri())
}

pub fn oauth2_token(access_token: &str, expires_at: i64) -> OAuth2Token {
    serde_json::from_value(json!({
        "scope": "CONNECT_READ CONNECT_WRITE",
        "jti": "jti-test",
        "token_type": "Bearer",
        "access_token": access_token,
        "refresh_token": "refresh-test",
        "expires_in": 3600,
        "expires_at": expires_at,
        "refresh_token_expires_in": 7200,
        "refresh_token_expires_at": expires_at + 3600
    }))
    .unwrap()
}

pub fn token_pair(access_token: &str, expires_at: i64) -> TokenPair {
    TokenPair {
        oauth1: OAuth1Token {
            oauth_token: "oauth1-token".to_owned(),
            oauth_token_secret: "oauth1-secret".to_owned(),
            mfa_token: None,
            mfa_expiration_timestamp: None,
            domain: Some("garmin.com".to_owned()),
        },
        oauth2: oauth2_token(access_token, expires_at),
    }
}

pub async fn mount_social_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/userprofile-service/socialProfile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "displayName": "runner42",
            "fullName": "Test Runner",
            "userName": "runner@example.com"
        })))
        .mount(server)
        .await;
}

pub async fn mount_oauth2_exchange(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/oauth-service/oauth/exchange/user/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scope": "CONNECT_READ",
            "jti": "jti-new",
            "token_type": "Bearer",
            "access_token": access_token,
            "refresh_token": "refresh-new",
            "expires_in": 3600,
            "refresh_token_expires_in": 7200
        })))
        .mount(server)
        .await;
}

pub fn signin_page(title: &str, body: &str) -> String {
    format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
}
