// ABOUTME: Garmin Connect endpoint URLs derived from the account domain
// ABOUTME: Can be pointed at a single base URL for proxies and mock servers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use garmin_core::constants::garmin::{DEFAULT_DOMAIN, OAUTH_CONSUMER_URL};

/// Base URLs for SSO, the Connect API and the OAuth consumer document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarminEndpoints {
    /// Account domain (`garmin.com` or `garmin.cn`)
    pub domain: String,
    /// SSO root, e.g. `https://sso.garmin.com/sso`
    pub sso_url: String,
    /// Connect API root, e.g. `https://connectapi.garmin.com`
    pub api_base_url: String,
    /// URL of the OAuth consumer key/secret document
    pub consumer_url: String,
}

impl GarminEndpoints {
    /// Endpoints for a Garmin domain
    #[must_use]
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: domain.to_owned(),
            sso_url: format!("https://sso.{domain}/sso"),
            api_base_url: format!("https://connectapi.{domain}"),
            consumer_url: OAUTH_CONSUMER_URL.to_owned(),
        }
    }

    /// Route every endpoint through one base URL
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            domain: DEFAULT_DOMAIN.to_owned(),
            sso_url: format!("{base}/sso"),
            api_base_url: base.to_owned(),
            consumer_url: format!("{base}/oauth_consumer.json"),
        }
    }

    /// SSO embed page, also used as the SSO service URL
    #[must_use]
    pub fn sso_embed(&self) -> String {
        format!("{}/embed", self.sso_url)
    }

    /// SSO sign-in page
    #[must_use]
    pub fn sso_signin(&self) -> String {
        format!("{}/signin", self.sso_url)
    }

    /// Absolute Connect API URL for a relative path
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for GarminEndpoints {
    fn default() -> Self {
        Self::for_domain(DEFAULT_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_endpoints() {
        let endpoints = GarminEndpoints::for_domain("garmin.cn");
        assert_eq!(endpoints.sso_embed(), "https://sso.garmin.cn/sso/embed");
        assert_eq!(
            endpoints.api_url("/activity-service/activity/1"),
            "https://connectapi.garmin.cn/activity-service/activity/1"
        );
    }

    #[test]
    fn test_base_url_endpoints() {
        let endpoints = GarminEndpoints::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(endpoints.sso_signin(), "http://127.0.0.1:8080/sso/signin");
        assert_eq!(
            endpoints.consumer_url,
            "http://127.0.0.1:8080/oauth_consumer.json"
        );
    }
}
