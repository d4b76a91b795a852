//! Demo Web Backend with Correlated Telemetry
//!
//! A minimal backend built with Tokio and Axum that serves a static
//! frontend and two toy endpoints, exporting traces and logs over
//! OTLP/HTTP to a collector.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌─────────────────────────────────────────────┐
//!                     │                DEMO BACKEND                  │
//!                     │                                              │
//!     Client Request  │  ┌─────────┐      ┌───────────┐             │
//!     ────────────────┼─▶│  http   │─────▶│ handlers  │             │
//!                     │  │ server  │      │ (3 routes)│             │
//!                     │  └────┬────┘      └─────┬─────┘             │
//!                     │       │ request span    │ log events        │
//!                     │       ▼                 ▼                    │
//!                     │  ┌────────────────────────────────┐         │
//!                     │  │           telemetry             │         │
//!                     │  │  traces ──▶ batch ──▶ OTLP      │─────────┼──▶ Collector
//!                     │  │  logs   ──▶ batch ──▶ OTLP      │ (async) │    (Alloy)
//!                     │  │  shared resource attributes     │         │
//!                     │  └────────────────────────────────┘         │
//!                     │                                              │
//!                     │  ┌─────────┐   ┌───────────┐                │
//!                     │  │ config  │   │ lifecycle │                │
//!                     │  └─────────┘   └───────────┘                │
//!                     └─────────────────────────────────────────────┘
//! ```
//!
//! Log records emitted inside a request span carry that span's trace and
//! span identifiers, so the collector can join the two streams.

use std::path::Path;

use tokio::net::TcpListener;

use demo_backend::config::{self, AppConfig};
use demo_backend::http::HttpServer;
use demo_backend::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: explicit path argument, ./config.toml, or defaults.
    let mut config = match std::env::args().nth(1) {
        Some(path) => config::loader::load_config(Path::new(&path))?,
        None => {
            let default_path = Path::new("config.toml");
            if default_path.exists() {
                config::loader::load_config(default_path)?
            } else {
                AppConfig::default()
            }
        }
    };
    config::loader::apply_env_overrides(&mut config);

    // Install the tracing subscriber and both export pipelines before the
    // first log statement so nothing is lost.
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    tracing::info!("demo-backend v0.1.0 starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        collector_host = %config.telemetry.collector_host,
        traces_endpoint = %config.telemetry.traces_endpoint(),
        logs_endpoint = %config.telemetry.logs_endpoint(),
        "Configuration loaded"
    );

    // A missing frontend file is not fatal: `GET /` degrades to a 404 plus
    // an error log, same taxonomy as at request time.
    if !config.frontend.index_path.exists() {
        tracing::error!(
            path = %config.frontend.index_path.display(),
            "Frontend file not found at startup"
        );
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    // Flush pending spans and log records before exit.
    telemetry_guard.shutdown();
    tracing::info!("Shutdown complete");
    Ok(())
}
