// ABOUTME: Integration tests for saving and loading Garmin Connect tokens
// ABOUTME: Exercises the token directory and base64 file layouts on a temp filesystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use common::{token_pair, FAR_FUTURE};
use garmin_connect::{TokenPair, TokenStore};

#[tokio::test]
async fn test_missing_store_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let directory = TokenStore::Directory(dir.path().join("absent"));
    let file = TokenStore::Base64File(dir.path().join("absent_base64"));

    assert!(directory.load().await.unwrap().is_none());
    assert!(file.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_directory_layout() {
    let dir = tempfile::tempdir().unwrap();
    let token_dir = dir.path().join(".garminconnect");
    let store = TokenStore::Directory(token_dir.clone());
    let tokens = token_pair("dir-access", FAR_FUTURE);

    store.save(&tokens).await.unwrap();

    assert!(token_dir.join("oauth1_token.json").exists());
    assert!(token_dir.join("oauth2_token.json").exists());
    let oauth2: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(token_dir.join("oauth2_token.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(oauth2["access_token"], "dir-access");

    assert_eq!(store.load().await.unwrap(), Some(tokens));
}

#[tokio::test]
async fn test_base64_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nested").join(".garminconnect_base64");
    let store = TokenStore::Base64File(file.clone());
    let tokens = token_pair("file-access", FAR_FUTURE);

    store.save(&tokens).await.unwrap();

    let raw = std::fs::read_to_string(&file).unwrap();
    assert_eq!(TokenPair::from_base64(&raw).unwrap(), tokens);
    assert_eq!(store.load().await.unwrap(), Some(tokens));
}

#[tokio::test]
async fn test_corrupt_token_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("tokens_base64");
    std::fs::write(&file, "%%% not tokens %%%").unwrap();

    assert!(TokenStore::Base64File(file).load().await.is_err());
}
