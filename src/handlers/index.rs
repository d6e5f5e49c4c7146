//! Static index page handler

use crate::handlers::AppState;
use crate::utils::error::{AppError, AppResult};
use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::debug;

/// Serve the static index page
///
/// GET /
pub async fn serve_index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let path = &state.settings.server.index_path;
    debug!("Serving index page from {}", path);

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::NotFound(format!("index page unavailable: {}", e)))?;

    Ok(Html(content))
}
