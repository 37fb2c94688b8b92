// ABOUTME: Garmin Connect endpoint paths, domains, user agents and request limits
// ABOUTME: Paths follow the Garmin Connect mobile API used by the garth/garminconnect clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Provider name used in logs
pub const PROVIDER_NAME: &str = "Garmin Connect";

/// Global Garmin domain
pub const DEFAULT_DOMAIN: &str = "garmin.com";
/// China Garmin domain
pub const CN_DOMAIN: &str = "garmin.cn";

/// Public document holding the mobile app OAuth consumer key/secret
pub const OAUTH_CONSUMER_URL: &str = "https://thegarth.s3.amazonaws.com/oauth_consumer.json";

/// User agent expected by the OAuth service
pub const OAUTH_USER_AGENT: &str = "com.garmin.android.apps.connectmobile";
/// User agent for Connect API calls
pub const API_USER_AGENT: &str = "GCM-iOS-5.7.2.1";
/// User agent for SSO pages
pub const SSO_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";

/// Calendar date format accepted by tools and the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// OAuth2 tokens are refreshed this many seconds before they expire
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 300;

/// Longest error body kept in `ProviderError::ApiError`
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Connect API paths (relative to `https://connectapi.<domain>`)
pub mod paths {
    /// OAuth1 token from SSO ticket
    pub const OAUTH_PREAUTHORIZED: &str = "oauth-service/oauth/preauthorized";
    /// OAuth1 to OAuth2 exchange
    pub const OAUTH_EXCHANGE: &str = "oauth-service/oauth/exchange/user/2.0";
    /// Social profile (display name, full name)
    pub const SOCIAL_PROFILE: &str = "userprofile-service/socialProfile";
    /// Activity list (`?start=&limit=`)
    pub const ACTIVITY_SEARCH: &str = "activitylist-service/activities/search/activities";
    /// Single activity (`/{id}`)
    pub const ACTIVITY: &str = "activity-service/activity";
    /// Daily steps (`/{start}/{end}`)
    pub const DAILY_STEPS: &str = "usersummary-service/stats/steps/daily";
    /// Daily heart rate (`/{display_name}?date=`)
    pub const DAILY_HEART_RATE: &str = "wellness-service/wellness/dailyHeartRate";
    /// Daily sleep (`/{display_name}?date=`)
    pub const DAILY_SLEEP: &str = "wellness-service/wellness/dailySleepData";
    /// Daily stress (`/{date}`)
    pub const DAILY_STRESS: &str = "wellness-service/wellness/dailyStress";
    /// Weight/body composition over a date range
    pub const WEIGHT_DATE_RANGE: &str = "weight-service/weight/dateRange";
    /// Daily summary (`/{display_name}?calendarDate=`)
    pub const DAILY_SUMMARY: &str = "usersummary-service/usersummary/daily";
    /// Aggregated training status and load (`/{date}`)
    pub const TRAINING_STATUS: &str = "metrics-service/metrics/trainingstatus/aggregated";
    /// Training readiness scores (`/{date}`)
    pub const TRAINING_READINESS: &str = "metrics-service/metrics/trainingreadiness";
    /// Registered devices
    pub const DEVICES: &str = "device-service/deviceregistration/devices";
}

/// Activity listing limits
pub mod limits {
    /// Default `limit` for `list_activities`
    pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;
    /// Largest page requested from the activity search endpoint
    pub const MAX_ACTIVITIES_PER_REQUEST: usize = 100;
    /// Largest `limit` accepted by `list_activities`
    pub const MAX_ACTIVITY_LIMIT: usize = 1000;
}
