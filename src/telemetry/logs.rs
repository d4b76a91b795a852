//! Log export pipeline.
//!
//! # Responsibilities
//! - Build the OTLP/HTTP log exporter for the collector's logs endpoint
//! - Wrap it in the SDK's batch log processor, same flush discipline and
//!   loss semantics as the trace pipeline
//!
//! Records are produced by the `opentelemetry-appender-tracing` bridge
//! installed in [`crate::telemetry::init_telemetry`]; a record emitted
//! while a request span is active has that span's trace and span ids
//! copied in at emission time.

use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::Resource;

use crate::config::TelemetryConfig;
use crate::telemetry::TelemetryError;

/// Build the logger provider with a batching OTLP exporter.
pub fn init_logger_provider(
    config: &TelemetryConfig,
    resource: Resource,
) -> Result<SdkLoggerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::LogExporter::builder()
        .with_http()
        .with_endpoint(config.logs_endpoint())
        .build()?;

    Ok(SdkLoggerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}
