//! Logging utilities
//!
//! Helpers that keep API keys out of log output

use crate::models::BalanceRequest;

/// Redact an API key for logging, keeping only a short prefix
pub fn redact_api_key(key: &str) -> String {
    let trimmed = key.trim();
    // Count and slice by characters, not bytes; keys are not guaranteed ASCII
    if trimmed.chars().count() <= 4 {
        "***".to_string()
    } else {
        let prefix: String = trimmed.chars().take(4).collect();
        format!("{}***", prefix)
    }
}

/// Create a filtered summary of a balance request for debug logs
///
/// Never includes the full API key.
pub fn create_balance_request_log_summary(request: &BalanceRequest) -> serde_json::Value {
    serde_json::json!({
        "models": request.models,
        "model_count": request.models.len(),
        "api_key": redact_api_key(&request.api_key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_api_key() {
        assert_eq!(redact_api_key("ms-1234567890"), "ms-1***");
        assert_eq!(redact_api_key("abc"), "***");
        assert_eq!(redact_api_key("  ms-1234567890  "), "ms-1***");
    }

    #[test]
    fn test_redact_multibyte_api_key() {
        // Char boundaries, not byte offsets; must not panic on non-ASCII keys
        assert_eq!(redact_api_key("密钥密钥密钥"), "密钥密钥***");
        assert_eq!(redact_api_key("密钥"), "***");
        assert_eq!(redact_api_key("ms-密钥密钥"), "ms-密***");
    }

    #[test]
    fn test_log_summary_hides_key() {
        let request = BalanceRequest {
            models: vec!["qwen-max".to_string()],
            api_key: "ms-secret-key-value".to_string(),
        };
        let summary = create_balance_request_log_summary(&request);
        assert_eq!(summary["model_count"], 1);
        assert!(!summary["api_key"].as_str().unwrap().contains("secret"));
    }
}
