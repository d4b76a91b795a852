//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (addresses parse, ports non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("telemetry.collector_host must not be empty")]
    EmptyCollectorHost,

    #[error("telemetry.otlp_port must not be zero")]
    ZeroOtlpPort,

    #[error("telemetry.service_name must not be empty")]
    EmptyServiceName,
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }
    if config.telemetry.collector_host.is_empty() {
        errors.push(ValidationError::EmptyCollectorHost);
    }
    if config.telemetry.otlp_port == 0 {
        errors.push(ValidationError::ZeroOtlpPort);
    }
    if config.telemetry.service_name.is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
