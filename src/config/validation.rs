//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value ranges (limits > 0, addresses parseable)
//! - Enforce startup requirements (upstream API key present)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<SettingError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingError {
    /// Dotted path of the offending field, e.g. "rate_limit.max_requests".
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<SettingError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(SettingError {
            field: "listener.bind_address",
            message: format!("`{}` is not a valid socket address", config.listener.bind_address),
        });
    }

    if config.listener.max_body_size == 0 {
        errors.push(SettingError {
            field: "listener.max_body_size",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.rate_limit.max_requests == 0 {
        errors.push(SettingError {
            field: "rate_limit.max_requests",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.rate_limit.window_secs == 0 {
        errors.push(SettingError {
            field: "rate_limit.window_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.chat.max_input_length == 0 {
        errors.push(SettingError {
            field: "chat.max_input_length",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.responder.api_key.is_empty() {
        errors.push(SettingError {
            field: "responder.api_key",
            message: "missing; set it in the config file or the API_KEY environment variable".to_string(),
        });
    }

    if !config.responder.base_url.starts_with("http://") && !config.responder.base_url.starts_with("https://") {
        errors.push(SettingError {
            field: "responder.base_url",
            message: format!("`{}` is not an http(s) URL", config.responder.base_url),
        });
    }

    if !(0.0..=2.0).contains(&config.responder.temperature) {
        errors.push(SettingError {
            field: "responder.temperature",
            message: format!("{} is outside the accepted range 0.0..=2.0", config.responder.temperature),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(SettingError {
            field: "observability.metrics_address",
            message: format!("`{}` is not a valid socket address", config.observability.metrics_address),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
