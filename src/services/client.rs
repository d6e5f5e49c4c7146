//! HTTP client service
//!
//! Encapsulates HTTP communication with the ModelScope inference API

use crate::config::Settings;
use crate::models::RateLimitSnapshot;
use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Account-wide request limit header
const HEADER_REQUESTS_LIMIT: &str = "modelscope-ratelimit-requests-limit";
/// Account-wide requests remaining header
const HEADER_REQUESTS_REMAINING: &str = "modelscope-ratelimit-requests-remaining";
/// Per-model request limit header
const HEADER_MODEL_REQUESTS_LIMIT: &str = "modelscope-ratelimit-model-requests-limit";
/// Per-model requests remaining header
const HEADER_MODEL_REQUESTS_REMAINING: &str = "modelscope-ratelimit-model-requests-remaining";

/// Remote error bodies are truncated to this many bytes before being exposed
/// in a per-item error message.
const MAX_REMOTE_ERROR_LEN: usize = 512;

/// ModelScope API client
#[derive(Debug, Clone)]
pub struct ModelScopeClient {
    client: Client,
    settings: Settings,
}

impl ModelScopeClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.modelscope.timeout))
            .user_agent(concat!("msbalance/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Query the rate-limit balance for one model
    ///
    /// Sends a minimal non-streaming chat-completion probe and reads the
    /// rate-limit counters from the response headers. The response body is
    /// never interpreted, only drained so the connection can be reused.
    pub async fn query_balance(&self, model: &str, api_key: &str) -> Result<RateLimitSnapshot> {
        debug!("Querying ModelScope balance for model: {}", model);

        let payload = serde_json::json!({
            "model": model,
            "messages": [{ "role": "user", "content": "返回一个好字" }],
            "stream": false,
            "enable_thinking": false,
            "system_prompt": "",
        });

        let response = self
            .client
            .post(self.settings.chat_completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = truncate_remote_error(body.trim());
            if body.is_empty() {
                anyhow::bail!("request failed with status {}", status.as_u16());
            }
            anyhow::bail!("request failed with status {}: {}", status.as_u16(), body);
        }

        let limits = RateLimitSnapshot {
            request_limit: parse_header_int(response.headers(), HEADER_REQUESTS_LIMIT),
            request_remaining: parse_header_int(response.headers(), HEADER_REQUESTS_REMAINING),
            model_request_limit: parse_header_int(response.headers(), HEADER_MODEL_REQUESTS_LIMIT),
            model_request_remaining: parse_header_int(
                response.headers(),
                HEADER_MODEL_REQUESTS_REMAINING,
            ),
        };

        // Drain the remaining body so the connection goes back to the pool
        let _ = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        debug!("Balance query completed for model: {}", model);
        Ok(limits)
    }
}

/// Parse a rate-limit header as an integer
///
/// Missing, blank, or non-numeric values all parse to 0; a malformed header
/// is never an error.
fn parse_header_int(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Cap a remote error body before it is surfaced to clients
fn truncate_remote_error(body: &str) -> String {
    if body.len() <= MAX_REMOTE_ERROR_LEN {
        return body.to_string();
    }
    let mut end = MAX_REMOTE_ERROR_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated)", &body[..end])
}
