// ABOUTME: Garmin SSO sign-in flow that exchanges email and password for a service ticket
// ABOUTME: Scrapes the CSRF token, page title and ticket out of the SSO HTML pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::endpoints::GarminEndpoints;
use garmin_core::errors::{ProviderError, ProviderResult};
use regex::Regex;
use reqwest::header::REFERER;
use reqwest::Client;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Stored as Option so a bad pattern degrades to a parse error instead of a panic
static CSRF_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"name="_csrf"\s+value="(.+?)""#).ok());

static TITLE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<title>(.+?)</title>").ok());

static TICKET_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"embed\?ticket=([^"]+)""#).ok());

fn first_capture(pattern: &LazyLock<Option<Regex>>, html: &str, what: &str) -> ProviderResult<String> {
    pattern
        .as_ref()
        .and_then(|re| re.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| ProviderError::Parse(format!("could not find {what} in SSO response")))
}

/// CSRF token of the sign-in form
///
/// # Errors
///
/// Returns an error if the page has no `_csrf` field
pub fn extract_csrf_token(html: &str) -> ProviderResult<String> {
    first_capture(&CSRF_PATTERN, html, "CSRF token")
}

/// `<title>` of an SSO page
///
/// # Errors
///
/// Returns an error if the page has no title
pub fn extract_title(html: &str) -> ProviderResult<String> {
    first_capture(&TITLE_PATTERN, html, "page title")
}

/// Service ticket from the sign-in success page
///
/// # Errors
///
/// Returns an error if the page carries no ticket
pub fn extract_ticket(html: &str) -> ProviderResult<String> {
    first_capture(&TICKET_PATTERN, html, "service ticket")
}

/// Classify the sign-in response by its page title
///
/// # Errors
///
/// `MfaRequired` for an MFA challenge, `AuthenticationFailed` for any title other than `Success`
pub fn check_signin_title(title: &str) -> ProviderResult<()> {
    if title.contains("MFA") {
        return Err(ProviderError::MfaRequired);
    }
    if title != "Success" {
        return Err(ProviderError::AuthenticationFailed(format!(
            "unexpected SSO page title '{title}'"
        )));
    }
    Ok(())
}

/// Sign in with email and password and return the service ticket
///
/// `http` must have a cookie store; use [`crate::http_client::sso_client`].
///
/// # Errors
///
/// Returns `MfaRequired` when the account asks for a verification code,
/// `AuthenticationFailed` when the credentials are rejected, and network or
/// parse errors otherwise
pub async fn login(
    http: &Client,
    endpoints: &GarminEndpoints,
    email: &str,
    password: &str,
) -> ProviderResult<String> {
    let sso_embed = endpoints.sso_embed();
    let embed_params = [
        ("id", "gauth-widget"),
        ("embedWidget", "true"),
        ("gauthHost", endpoints.sso_url.as_str()),
    ];
    let signin_params = [
        ("id", "gauth-widget"),
        ("embedWidget", "true"),
        ("gauthHost", sso_embed.as_str()),
        ("service", sso_embed.as_str()),
        ("source", sso_embed.as_str()),
        ("redirectAfterAccountLoginUrl", sso_embed.as_str()),
        ("redirectAfterAccountCreationUrl", sso_embed.as_str()),
    ];

    debug!("Starting Garmin SSO sign-in at {}", endpoints.sso_url);

    // Sets the session cookies the sign-in form expects
    http.get(&sso_embed)
        .query(&embed_params)
        .send()
        .await?
        .error_for_status()?;

    let signin_url = endpoints.sso_signin();
    let form_page = http
        .get(&signin_url)
        .query(&signin_params)
        .header(REFERER, &sso_embed)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let csrf = extract_csrf_token(&form_page)?;

    let response = http
        .post(&signin_url)
        .query(&signin_params)
        .header(REFERER, &signin_url)
        .form(&[
            ("username", email),
            ("password", password),
            ("embed", "true"),
            ("_csrf", csrf.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if status.as_u16() == 429 {
        return Err(ProviderError::RateLimited { status: 429 });
    }

    let title = extract_title(&body)?;
    if let Err(e) = check_signin_title(&title) {
        warn!("Garmin SSO sign-in did not succeed: {e}");
        return Err(e);
    }

    extract_ticket(&body)
}
