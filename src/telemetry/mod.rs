//! Telemetry subsystem.
//!
//! # Data Flow
//! ```text
//! handler code produces:
//!     → tracing spans (one per request, opened by TraceLayer)
//!     → tracing events (structured log statements)
//!
//! traces.rs: span closes
//!     → tracing-opentelemetry converts it
//!     → batch span processor (size- or interval-triggered flush)
//!     → OTLP/HTTP to <collector>/v1/traces
//!
//! logs.rs: event fires
//!     → opentelemetry-appender-tracing converts it, copying the active
//!       span's trace/span ids into the record at emission time
//!     → batch log processor (same flush discipline)
//!     → OTLP/HTTP to <collector>/v1/logs
//!
//! resource.rs: one immutable attribute set (service.name, environment)
//!     shared by both pipelines so the collector can join the streams
//! ```
//!
//! # Design Decisions
//! - Export is best-effort, at-most-once: a failed batch is dropped, and
//!   no telemetry failure can reach the request path
//! - Both pipelines flush off the request's critical path
//! - Correlation ids are stamped at emission time, never backfilled

pub mod logs;
pub mod resource;
pub mod traces;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use thiserror::Error;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::TelemetryConfig;

/// Error type for telemetry initialization.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP exporter: {0}")]
    ExporterBuild(#[from] opentelemetry_otlp::ExporterBuildError),
}

/// Owns both export pipelines for the lifetime of the process.
///
/// Dropping the guard without calling [`TelemetryGuard::shutdown`] still
/// flushes, but shutdown makes the final flush explicit and logs failures.
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
    logger_provider: Option<SdkLoggerProvider>,
}

impl TelemetryGuard {
    /// Flush and shut down both pipelines, best-effort.
    pub fn shutdown(&self) {
        if let Some(provider) = &self.tracer_provider {
            if let Err(err) = provider.shutdown() {
                tracing::debug!(error = %err, "Trace pipeline shutdown failed");
            }
        }
        if let Some(provider) = &self.logger_provider {
            if let Err(err) = provider.shutdown() {
                tracing::debug!(error = %err, "Log pipeline shutdown failed");
            }
        }
    }
}

/// Initialize the global tracing subscriber and, unless export is
/// disabled, both OTLP pipelines.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,demo_backend=debug"));
    let fmt_layer = tracing_subscriber::fmt::layer();

    if !config.export_enabled {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
        return Ok(TelemetryGuard {
            tracer_provider: None,
            logger_provider: None,
        });
    }

    let resource = resource::build_resource(config);
    let logger_provider = logs::init_logger_provider(config, resource.clone())?;
    let tracer_provider = traces::init_tracer_provider(config, resource)?;

    // The bridge must not see the SDK's own internal events, or a failing
    // exporter would feed itself.
    let log_layer = OpenTelemetryTracingBridge::new(&logger_provider)
        .with_filter(filter_fn(|metadata| !metadata.target().starts_with("opentelemetry")));

    let trace_layer =
        tracing_opentelemetry::layer().with_tracer(tracer_provider.tracer("demo-backend"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(trace_layer)
        .with(log_layer)
        .init();

    Ok(TelemetryGuard {
        tracer_provider: Some(tracer_provider),
        logger_provider: Some(logger_provider),
    })
}
