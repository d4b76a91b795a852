//! Trace export pipeline.
//!
//! # Responsibilities
//! - Build the OTLP/HTTP span exporter for the collector's traces endpoint
//! - Wrap it in the SDK's batch span processor (bounded queue, size- or
//!   interval-triggered flush, failed batches dropped)
//! - Install the provider and the W3C trace-context propagator globally
//!
//! Spans themselves are opened by the `TraceLayer` in the HTTP server and
//! converted by `tracing-opentelemetry` when they close; nothing on the
//! request path ever waits on export I/O.

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;

use crate::config::TelemetryConfig;
use crate::telemetry::TelemetryError;

/// Build the tracer provider with a batching OTLP exporter and register
/// it as the global provider.
pub fn init_tracer_provider(
    config: &TelemetryConfig,
    resource: Resource,
) -> Result<SdkTracerProvider, TelemetryError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(config.traces_endpoint())
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());
    Ok(provider)
}
