// ABOUTME: Stdio MCP server binary exposing one Garmin Connect account to an AI assistant
// ABOUTME: Loads configuration, signs in once, then serves JSON-RPC on stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Garmin Connect MCP Server Binary
//!
//! Startup failures (configuration, sign-in) are logged and end the process
//! with a non-zero status before any request is read.

use anyhow::{Context, Result};
use clap::Parser;
use garmin_mcp_server::{
    config::environment::{load_env_file, ServerConfig},
    logging,
    mcp::{McpRequestProcessor, ServerResources, StdioTransport},
    session::establish_session,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "garmin-mcp-server")]
#[command(about = "MCP server exposing Garmin Connect activities and health data over stdio")]
#[command(version)]
pub struct Args {
    /// Load environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_file = load_env_file(args.env_file.as_deref())?;
    logging::init_from_env()?;
    env_file.log();

    if let Err(e) = run().await {
        error!("Garmin MCP server stopped: {e:#}");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let config = ServerConfig::from_env().context("invalid configuration")?;
    info!("{}", config.summary());

    garmin_connect::initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let session = establish_session(&config)
        .await
        .context("could not establish a Garmin Connect session")?;

    let resources = Arc::new(ServerResources::new(Arc::new(session)));
    let processor = McpRequestProcessor::new(resources);
    let transport = StdioTransport::new(&processor);

    tokio::select! {
        result = transport.run() => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }
    Ok(())
}
