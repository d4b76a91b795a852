//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the three demo routes
//! - Wire up the request-span middleware (TraceLayer)
//! - Serve with graceful shutdown

use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::lifecycle::Shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub frontend_path: PathBuf,
}

/// HTTP server for the demo backend.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            frontend_path: config.frontend.index_path,
        };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The `TraceLayer` opens one span per request; every log event a
    /// handler emits lands inside that span and is exported with its
    /// trace and span ids.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/root", get(handlers::api_root))
            .route("/error", get(handlers::simulate_error))
            .route("/", get(handlers::serve_frontend))
            .with_state(state)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        http.request.method = %request.method(),
                        url.path = %request.uri().path(),
                    )
                }),
            )
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                trigger.trigger();
            }
        });
        self.run_with_shutdown(listener, shutdown.subscribe()).await
    }

    /// Run the server, stopping when the shutdown channel fires.
    pub async fn run_with_shutdown(
        self,
        listener: TcpListener,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
