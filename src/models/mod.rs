//! Data models module
//!
//! Defines request and response structures for the balance query API

use serde::{Deserialize, Serialize};

/// Batch balance query request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Model identifiers to query, in the order results should be returned
    pub models: Vec<String>,
    /// ModelScope API key used for every outbound query
    pub api_key: String,
}

/// Per-model query outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceItem {
    /// Trimmed model name this item belongs to
    pub model: String,
    /// Account-wide request limit
    pub request_limit: i64,
    /// Account-wide requests remaining
    pub request_remaining: i64,
    /// Per-model request limit
    pub model_request_limit: i64,
    /// Per-model requests remaining
    pub model_request_remaining: i64,
    /// Failure description; `None` means the query succeeded
    pub error: Option<String>,
}

impl BalanceItem {
    /// Item for a successful query
    pub fn succeeded(model: impl Into<String>, limits: RateLimitSnapshot) -> Self {
        Self {
            model: model.into(),
            request_limit: limits.request_limit,
            request_remaining: limits.request_remaining,
            model_request_limit: limits.model_request_limit,
            model_request_remaining: limits.model_request_remaining,
            error: None,
        }
    }

    /// Item for a failed query; limit fields stay at their zero default
    pub fn failed(model: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            request_limit: 0,
            request_remaining: 0,
            model_request_limit: 0,
            model_request_remaining: 0,
            error: Some(error.into()),
        }
    }
}

/// Aggregated batch response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// True iff every item succeeded
    pub success: bool,
    /// One item per requested model, input order preserved
    pub data: Vec<BalanceItem>,
    /// Human-readable summary
    pub message: String,
}

/// Rate-limit counters read from ModelScope response headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    pub request_limit: i64,
    pub request_remaining: i64,
    pub model_request_limit: i64,
    pub model_request_remaining: i64,
}
