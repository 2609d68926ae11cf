#[cfg(test)]
mod config_tests {
    use crate::config::{
        default_base_url, default_cart_key, default_enable_json_logging, default_log_level,
        default_request_timeout, default_service_name, default_storage_path, ApiConfig,
        ConfigError, StorageConfig,
    };
    use std::env;
    use std::time::Duration;

    #[test]
    fn test_api_config_defaults() {
        env::remove_var("ROCKETSHOES_BASE_URL");
        env::remove_var("ROCKETSHOES_REQUEST_TIMEOUT_SECONDS");

        let config = ApiConfig::from_env().unwrap();

        assert_eq!(config.base_url, "http://localhost:3333");
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_api_config_request_timeout() {
        let config = ApiConfig {
            base_url: "http://localhost:3333".to_string(),
            request_timeout_seconds: 45,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_storage_config_from_env() {
        env::set_var("ROCKETSHOES_PATH", "/tmp/rocketshoes-test/storage.json");
        env::set_var("ROCKETSHOES_CART_KEY", "@Test:cart");

        let config = StorageConfig::from_env().unwrap();

        assert_eq!(config.path, "/tmp/rocketshoes-test/storage.json");
        assert_eq!(config.cart_key, "@Test:cart");

        // Clean up
        env::remove_var("ROCKETSHOES_PATH");
        env::remove_var("ROCKETSHOES_CART_KEY");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::ValidationError {
            message: "Invalid configuration".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error: Invalid configuration");

        let error = ConfigError::LoadError {
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration loading error: boom");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "http://localhost:3333");
        assert_eq!(default_request_timeout(), 10);
        assert_eq!(default_storage_path(), ".rocketshoes/storage.json");
        assert_eq!(default_cart_key(), "@RocketShoes:cart");
        assert_eq!(default_service_name(), "rocketshoes-cart");
        assert_eq!(default_log_level(), "info");
        assert!(!default_enable_json_logging());
    }
}
