//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the demo backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// Telemetry export settings.
    pub telemetry: TelemetryConfig,

    /// Static frontend settings.
    pub frontend: FrontendConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Telemetry export configuration.
///
/// Both OTLP endpoints are derived from `collector_host` and `otlp_port`;
/// only the host is expected to differ between deployments ("alloy" inside
/// Docker, "localhost" when running directly).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Hostname of the OTLP collector.
    pub collector_host: String,

    /// OTLP/HTTP port on the collector.
    pub otlp_port: u16,

    /// Value of the `service.name` resource attribute.
    pub service_name: String,

    /// Value of the `environment` resource attribute.
    pub environment: String,

    /// Disable to run without a collector (console logging only).
    pub export_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            collector_host: "alloy".to_string(),
            otlp_port: 4319,
            service_name: "axum-backend".to_string(),
            environment: "local-dev".to_string(),
            export_enabled: true,
        }
    }
}

impl TelemetryConfig {
    /// OTLP/HTTP endpoint for span export.
    pub fn traces_endpoint(&self) -> String {
        format!("http://{}:{}/v1/traces", self.collector_host, self.otlp_port)
    }

    /// OTLP/HTTP endpoint for log record export.
    pub fn logs_endpoint(&self) -> String {
        format!("http://{}:{}/v1/logs", self.collector_host, self.otlp_port)
    }
}

/// Static frontend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Path to the single HTML file served at `/`.
    pub index_path: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("frontend/index.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_dev_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "0.0.0.0:8000");
        assert_eq!(config.telemetry.collector_host, "alloy");
        assert_eq!(config.telemetry.otlp_port, 4319);
        assert_eq!(config.telemetry.service_name, "axum-backend");
        assert_eq!(config.telemetry.environment, "local-dev");
        assert!(config.telemetry.export_enabled);
        assert_eq!(config.frontend.index_path, PathBuf::from("frontend/index.html"));
    }

    #[test]
    fn endpoints_derive_from_host_and_port() {
        let telemetry = TelemetryConfig {
            collector_host: "localhost".to_string(),
            otlp_port: 4318,
            ..TelemetryConfig::default()
        };
        assert_eq!(telemetry.traces_endpoint(), "http://localhost:4318/v1/traces");
        assert_eq!(telemetry.logs_endpoint(), "http://localhost:4318/v1/logs");
    }
}
