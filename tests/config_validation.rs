//! Tests for configuration parsing and semantic validation.

use chat_gateway::config::validation::validate_config;
use chat_gateway::config::GatewayConfig;

fn valid_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.responder.api_key = "test-api-key".to_string();
    config
}

#[test]
fn test_valid_config_accepted() {
    assert!(validate_config(&valid_config()).is_ok());
}

#[test]
fn test_missing_api_key_is_fatal() {
    let config = GatewayConfig::default();
    let errors = validate_config(&config).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "responder.api_key");
}

#[test]
fn test_all_errors_reported_at_once() {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "not-an-address".to_string();
    config.rate_limit.max_requests = 0;
    config.rate_limit.window_secs = 0;
    config.chat.max_input_length = 0;
    config.responder.base_url = "ftp://example.com".to_string();
    config.responder.temperature = 9.9;
    config.observability.metrics_address = "also-bad".to_string();

    let errors = validate_config(&config).unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"listener.bind_address"));
    assert!(fields.contains(&"rate_limit.max_requests"));
    assert!(fields.contains(&"rate_limit.window_secs"));
    assert!(fields.contains(&"chat.max_input_length"));
    assert!(fields.contains(&"responder.api_key"));
    assert!(fields.contains(&"responder.base_url"));
    assert!(fields.contains(&"responder.temperature"));
    assert!(fields.contains(&"observability.metrics_address"));
    assert_eq!(errors.len(), 8);
}

#[test]
fn test_metrics_address_ignored_when_disabled() {
    let mut config = valid_config();
    config.observability.metrics_enabled = false;
    config.observability.metrics_address = "nonsense".to_string();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_minimal_toml_gets_defaults() {
    let config: GatewayConfig = toml::from_str(
        r#"
        [rate_limit]
        max_requests = 3

        [responder]
        api_key = "file-key"
        "#,
    )
    .unwrap();

    assert_eq!(config.rate_limit.max_requests, 3);
    assert_eq!(config.rate_limit.window_secs, 86_400);
    assert_eq!(config.chat.max_input_length, 500);
    assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    assert_eq!(config.responder.api_key, "file-key");
    assert!((config.responder.temperature - 0.7).abs() < f64::EPSILON);
}

#[test]
fn test_empty_toml_is_all_defaults() {
    let config: GatewayConfig = toml::from_str("").unwrap();
    assert_eq!(config.rate_limit.max_requests, 5);
    assert!(config.rate_limit.enabled);
    assert!(config.responder.api_key.is_empty());
}
