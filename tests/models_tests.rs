//! Data model serialization tests

use msbalance::models::{BalanceItem, BalanceRequest, BalanceResponse, RateLimitSnapshot};
use serde_json::json;

#[test]
fn test_balance_request_deserialization() {
    let body = json!({
        "models": ["qwen-max", "qwen-plus"],
        "api_key": "ms-test-key"
    });

    let request: BalanceRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.models, vec!["qwen-max", "qwen-plus"]);
    assert_eq!(request.api_key, "ms-test-key");
}

#[test]
fn test_balance_request_missing_fields_rejected() {
    let missing_key = json!({ "models": ["qwen-max"] });
    assert!(serde_json::from_value::<BalanceRequest>(missing_key).is_err());

    let missing_models = json!({ "api_key": "ms-test-key" });
    assert!(serde_json::from_value::<BalanceRequest>(missing_models).is_err());
}

#[test]
fn test_successful_item_serializes_null_error() {
    let item = BalanceItem::succeeded(
        "qwen-max",
        RateLimitSnapshot {
            request_limit: 100,
            request_remaining: 80,
            model_request_limit: 50,
            model_request_remaining: 40,
        },
    );

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["model"], "qwen-max");
    assert_eq!(value["request_limit"], 100);
    assert_eq!(value["request_remaining"], 80);
    assert_eq!(value["model_request_limit"], 50);
    assert_eq!(value["model_request_remaining"], 40);
    // error key is present and explicitly null for successful items
    assert!(value.as_object().unwrap().contains_key("error"));
    assert!(value["error"].is_null());
}

#[test]
fn test_failed_item_serialization() {
    let item = BalanceItem::failed("", "model cannot be empty");
    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(value["model"], "");
    assert_eq!(value["error"], "model cannot be empty");
    assert_eq!(value["request_limit"], 0);
    assert_eq!(value["request_remaining"], 0);
    assert_eq!(value["model_request_limit"], 0);
    assert_eq!(value["model_request_remaining"], 0);
}

#[test]
fn test_balance_response_round_trip() {
    let response = BalanceResponse {
        success: false,
        data: vec![
            BalanceItem::succeeded("m1", RateLimitSnapshot::default()),
            BalanceItem::failed("m2", "request failed with status 500"),
        ],
        message: "successfully queried balance for 1 models, 1 models failed".to_string(),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["data"].as_array().unwrap().len(), 2);

    let parsed: BalanceResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.data[0].model, "m1");
    assert!(parsed.data[0].error.is_none());
    assert_eq!(
        parsed.data[1].error.as_deref(),
        Some("request failed with status 500")
    );
}
