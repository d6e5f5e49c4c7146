//! Balance query handler
//!
//! Fans one inbound batch request out into sequential per-model ModelScope
//! queries and aggregates the outcomes

use crate::handlers::AppState;
use crate::models::{BalanceItem, BalanceRequest, BalanceResponse};
use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::create_balance_request_log_summary;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle batch balance queries
///
/// POST /api/balance
///
/// Returns 200 with per-item results even when individual model queries fail;
/// only a malformed body or missing required fields produce a 400.
pub async fn handle_balance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> AppResult<Json<BalanceResponse>> {
    let Json(request) = payload
        .map_err(|e| AppError::Validation(format!("failed to parse request body: {}", e)))?;

    if let Ok(summary) = serde_json::to_string(&create_balance_request_log_summary(&request)) {
        debug!("Received balance request: {}", summary);
    }

    let api_key = request.api_key.trim();
    if request.models.is_empty() || api_key.is_empty() {
        warn!("Balance request rejected: models or api_key is empty");
        return Err(AppError::Validation(
            "models and api_key cannot be empty".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(request.models.len());
    let mut success_count = 0usize;

    // Sequential by design: one outbound call at a time, input order preserved
    for model in &request.models {
        let model = model.trim();
        if model.is_empty() {
            items.push(BalanceItem::failed(model, "model cannot be empty"));
            continue;
        }

        match state.client.query_balance(model, api_key).await {
            Ok(limits) => {
                success_count += 1;
                items.push(BalanceItem::succeeded(model, limits));
            }
            Err(e) => {
                warn!("Balance query failed for model {}: {:#}", model, e);
                items.push(BalanceItem::failed(model, format!("{:#}", e)));
            }
        }
    }

    let failed_count = items.len() - success_count;
    let response = BalanceResponse {
        success: failed_count == 0,
        message: build_summary_message(success_count, failed_count),
        data: items,
    };

    debug!(
        "Balance request completed: {} succeeded, {} failed",
        success_count, failed_count
    );
    Ok(Json(response))
}

/// Build the aggregate summary message
fn build_summary_message(success_count: usize, failed_count: usize) -> String {
    if failed_count == 0 {
        format!("successfully queried balance for {} models", success_count)
    } else {
        format!(
            "successfully queried balance for {} models, {} models failed",
            success_count, failed_count
        )
    }
}
