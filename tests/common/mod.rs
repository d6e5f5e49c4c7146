//! Shared test helpers

use msbalance::config::settings::*;

/// Build settings pointing at an arbitrary base URL, for mock-server tests
pub fn test_settings(base_url: &str) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            index_path: "./index.html".to_string(),
        },
        modelscope: ModelScopeConfig {
            base_url: base_url.to_string(),
            timeout: 5,
        },
        request: RequestConfig {
            max_request_size: 1048576,
        },
        security: SecurityConfig {
            allowed_origins: vec!["*".to_string()],
            cors_enabled: true,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
        },
    }
}
