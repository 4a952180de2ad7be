//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, connection limits).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Response advice settings.
    pub advice: AdviceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 10_000,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// End-to-end request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Response advice configuration.
///
/// Controls the value the default header provider hands to the
/// interceptor. Tests and embedders may substitute their own provider,
/// in which case this section is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdviceConfig {
    /// Message returned by the default header value provider.
    pub message: String,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            message: "advice-applied".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to log each interceptor invocation at debug level.
    pub log_advice: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_advice: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.advice.message.is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        // Empty file must produce the full default config.
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_toml() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [advice]
            message = "from-config"
            "#,
        )
        .unwrap();
        assert_eq!(config.advice.message, "from-config");
        // Untouched sections keep their defaults.
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
