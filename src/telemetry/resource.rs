//! Shared resource attributes.
//!
//! One immutable attribute set, built once at startup and attached to both
//! the trace and the log pipeline. The collector relies on the shared
//! `service.name` label to correlate the two streams.

use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;

use crate::config::TelemetryConfig;

/// Build the resource describing this service instance.
pub fn build_resource(config: &TelemetryConfig) -> Resource {
    Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attribute(KeyValue::new("environment", config.environment.clone()))
        .build()
}
