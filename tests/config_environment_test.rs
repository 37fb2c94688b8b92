// ABOUTME: Tests for loading server configuration from environment variables
// ABOUTME: Serialized because every test mutates the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use garmin_mcp_server::config::environment::{
    expand_home, load_env_file, EnvFileStatus, ServerConfig,
};
use garmin_mcp_server::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

const VARS: [&str; 10] = [
    "GARMIN_EMAIL",
    "GARMIN_PASSWORD",
    "GARMINTOKENS",
    "GARMINTOKENS_BASE64",
    "GARMIN_IS_CN",
    "GARMIN_BASE_URL",
    "GARMIN_CONSUMER_KEY",
    "GARMIN_CONSUMER_SECRET",
    "HTTP_CLIENT_TIMEOUT_SECS",
    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert!(config.credentials.pair().is_none());
    assert_eq!(config.domain, "garmin.com");
    assert_eq!(config.tokens.directory, expand_home("~/.garminconnect"));
    assert_eq!(config.tokens.base64_file, expand_home("~/.garminconnect_base64"));
    assert_eq!(config.http_client.timeout_secs, 30);
    assert_eq!(config.http_client.connect_timeout_secs, 10);
    assert!(config.consumer.is_none());
    assert!(config.base_url.is_none());
    assert_eq!(config.endpoints().api_base_url, "https://connectapi.garmin.com");
}

#[test]
#[serial]
fn test_full_environment() {
    clear_env();
    env::set_var("GARMIN_EMAIL", "runner@example.com");
    env::set_var("GARMIN_PASSWORD", "hunter2");
    env::set_var("GARMINTOKENS", "/var/lib/garmin/tokens");
    env::set_var("GARMINTOKENS_BASE64", "/var/lib/garmin/tokens.b64");
    env::set_var("GARMIN_IS_CN", "true");
    env::set_var("GARMIN_CONSUMER_KEY", "ck");
    env::set_var("GARMIN_CONSUMER_SECRET", "cs");
    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "45");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.credentials.pair(), Some(("runner@example.com", "hunter2")));
    assert_eq!(config.tokens.directory, PathBuf::from("/var/lib/garmin/tokens"));
    assert_eq!(config.domain, "garmin.cn");
    assert_eq!(config.endpoints().sso_url, "https://sso.garmin.cn/sso");
    assert_eq!(config.consumer.as_ref().unwrap().consumer_key, "ck");
    assert_eq!(config.http_client.timeout_secs, 45);

    let summary = config.summary();
    assert!(summary.contains("garmin.cn"));
    assert!(!summary.contains("hunter2"));
    assert!(!format!("{config:?}").contains("hunter2"));

    clear_env();
}

#[test]
#[serial]
fn test_empty_credentials_are_absent() {
    clear_env();
    env::set_var("GARMIN_EMAIL", "");
    env::set_var("GARMIN_PASSWORD", "hunter2");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.credentials.pair().is_none());

    clear_env();
}

#[test]
#[serial]
fn test_unparsable_timeout_is_config_error() {
    clear_env();
    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "thirty");

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("HTTP_CLIENT_TIMEOUT_SECS"));

    clear_env();
}

#[test]
#[serial]
fn test_base_url_override() {
    clear_env();
    env::set_var("GARMIN_BASE_URL", "http://127.0.0.1:8089/");

    let endpoints = ServerConfig::from_env().unwrap().endpoints();
    assert_eq!(endpoints.sso_signin(), "http://127.0.0.1:8089/sso/signin");
    assert_eq!(
        endpoints.api_url("device-service/deviceregistration/devices"),
        "http://127.0.0.1:8089/device-service/deviceregistration/devices"
    );

    clear_env();
}

#[test]
#[serial]
fn test_env_file_loading() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "GARMIN_EMAIL=fromfile@example.com").unwrap();
    writeln!(file, "GARMIN_PASSWORD=filepass").unwrap();

    let status = load_env_file(Some(file.path())).unwrap();
    assert_eq!(status, EnvFileStatus::Loaded(file.path().to_path_buf()));
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.credentials.email.as_deref(), Some("fromfile@example.com"));

    let missing = load_env_file(Some(&PathBuf::from("/nonexistent/garmin.env"))).unwrap_err();
    assert_eq!(missing.code, ErrorCode::ConfigError);

    clear_env();
}
