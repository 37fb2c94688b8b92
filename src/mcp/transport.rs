// ABOUTME: Newline-delimited JSON-RPC transport over stdio or any async byte stream
// ABOUTME: Reads one request per line and writes one response per line, in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::request_processor::McpRequestProcessor;
use crate::errors::AppResult;
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Line-oriented MCP transport
pub struct StdioTransport<'a> {
    processor: &'a McpRequestProcessor,
}

impl<'a> StdioTransport<'a> {
    /// Transport feeding `processor`
    #[must_use]
    pub const fn new(processor: &'a McpRequestProcessor) -> Self {
        Self { processor }
    }

    /// Serve the process's stdin and stdout until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if stdin or stdout fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve requests from `reader`, writing responses to `writer`
    ///
    /// Each request is finished before the next line is read.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match JsonRpcRequest::parse_line(line) {
                Ok(request) => self.processor.handle_request(request).await,
                Err(rejected) => {
                    warn!(
                        code = rejected.error.code,
                        "Rejected malformed input: {}", rejected.error.message
                    );
                    Some(rejected.into_response())
                }
            };

            if let Some(response) = response {
                write_response(&mut writer, &response).await?;
            }
        }

        debug!("Input closed, stopping transport");
        Ok(())
    }
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> AppResult<()>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut payload = serde_json::to_vec(response)?;
    payload.push(b'\n');
    writer.write_all(&payload).await?;
    writer.flush().await?;
    Ok(())
}
