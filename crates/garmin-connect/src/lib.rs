// ABOUTME: Garmin Connect session client: SSO login, token handling and data endpoints
// ABOUTME: Exposes the GarminApi capability trait consumed by the MCP tool handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Connect session client
//!
//! Garmin Connect has no public API for personal accounts. This crate talks
//! to the same endpoints the mobile app uses:
//!
//! 1. SSO sign-in (`sso.<domain>`) with email and password yields a ticket
//! 2. The ticket is traded for an OAuth1 token (signed with the app consumer)
//! 3. The OAuth1 token is exchanged for a short-lived OAuth2 bearer token
//! 4. Data requests go to `connectapi.<domain>` with the bearer token
//!
//! Tokens can be persisted with [`TokenStore`] so later sessions skip SSO.
//! The OAuth2 token is re-exchanged from the OAuth1 token when it expires.

/// Capability trait implemented by the session client
pub mod api;
/// Authenticated Garmin Connect client
pub mod client;
/// Domain-dependent endpoint URLs
pub mod endpoints;
/// Shared HTTP client with configured timeouts
pub mod http_client;
/// Typed response models
pub mod models;
/// OAuth1 request signing and token exchange
pub mod oauth;
/// SSO sign-in flow
pub mod sso;
/// OAuth token types and persistence
pub mod tokens;

pub use api::GarminApi;
pub use client::GarminClient;
pub use endpoints::GarminEndpoints;
pub use garmin_core::errors::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
pub use models::{ActivitySummary, ActivityType, DailySteps, SocialProfile};
pub use oauth::OAuthConsumer;
pub use tokens::{OAuth1Token, OAuth2Token, TokenPair, TokenStore};
