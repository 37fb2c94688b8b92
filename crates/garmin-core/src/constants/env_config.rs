// ABOUTME: Environment variable names and default values for server configuration
// ABOUTME: Single place listing every variable the server reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Garmin Connect account email
pub const GARMIN_EMAIL: &str = "GARMIN_EMAIL";
/// Garmin Connect account password
pub const GARMIN_PASSWORD: &str = "GARMIN_PASSWORD";
/// Directory holding `oauth1_token.json` / `oauth2_token.json`
pub const GARMIN_TOKENS: &str = "GARMINTOKENS";
/// File holding the base64-encoded token pair
pub const GARMIN_TOKENS_BASE64: &str = "GARMINTOKENS_BASE64";
/// Use the China domain (`garmin.cn`)
pub const GARMIN_IS_CN: &str = "GARMIN_IS_CN";
/// Route SSO and Connect API traffic through one base URL (proxies, test servers)
pub const GARMIN_BASE_URL: &str = "GARMIN_BASE_URL";
/// Optional OAuth consumer key override
pub const GARMIN_CONSUMER_KEY: &str = "GARMIN_CONSUMER_KEY";
/// Optional OAuth consumer secret override
pub const GARMIN_CONSUMER_SECRET: &str = "GARMIN_CONSUMER_SECRET";
/// HTTP request timeout in seconds
pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
/// HTTP connect timeout in seconds
pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";

/// Default token directory
pub const DEFAULT_TOKEN_DIR: &str = "~/.garminconnect";
/// Default base64 token file
pub const DEFAULT_TOKEN_BASE64_FILE: &str = "~/.garminconnect_base64";
/// Default HTTP request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Default HTTP connect timeout
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
