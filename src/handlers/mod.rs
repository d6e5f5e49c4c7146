//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod balance;
pub mod health;
pub mod index;

use crate::config::Settings;
use crate::services::ModelScopeClient;
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub client: ModelScopeClient,
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    // Create ModelScope client
    let client = ModelScopeClient::new(settings.clone())?;

    // Create application state
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        client,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            crate::middleware::logging::request_logging_middleware,
        ))
        .layer(DefaultBodyLimit::max(settings.request.max_request_size));

    // Create routes
    let mut router = Router::new()
        .route("/", get(index::serve_index))
        .route("/health", get(health::health_check))
        .route("/api/balance", post(balance::handle_balance))
        .with_state(app_state)
        .layer(middleware_stack);

    if settings.security.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    Ok(router)
}
