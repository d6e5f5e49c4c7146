//! Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use msbalance::utils::error::{AppError, ErrorResponse};

#[test]
fn test_validation_error_maps_to_bad_request() {
    let err = AppError::Validation("models and api_key cannot be empty".to_string());
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_not_found_error_maps_to_404() {
    let err = AppError::NotFound("index page unavailable".to_string());
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn test_internal_error_maps_to_500() {
    let err = AppError::Internal("boom".to_string());
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_response_body_is_structured() {
    let err = AppError::Validation("bad input".to_string());
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(!parsed.success);
    assert!(parsed.message.contains("bad input"));
}

#[test]
fn test_error_display_includes_context() {
    let err = AppError::Validation("models cannot be empty".to_string());
    assert_eq!(
        err.to_string(),
        "Request validation failed: models cannot be empty"
    );
}
