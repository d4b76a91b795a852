//! Route handlers for the demo endpoints.
//!
//! All three handlers exist to produce observable log and trace events;
//! none of them can fail from the caller's point of view except the
//! missing-frontend-file case, which degrades to a 404.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::http::server::AppState;

/// Faults a handler can produce internally. These never surface as HTTP
/// errors; they exist to exercise the telemetry pipelines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerFault {
    #[error("attempted to divide by zero")]
    DivisionByZero,
}

/// `GET /api/root`
pub async fn api_root() -> impl IntoResponse {
    tracing::warn!(
        client.ip = "127.0.0.1",
        "API root endpoint (/api/root) was called"
    );
    Json(json!({ "message": "Hello World. Log and Trace sent." }))
}

/// `GET /error`
///
/// Deliberately trips an arithmetic fault, records it with exception
/// context, and reports success to the caller. The fault is demonstration
/// material for the pipelines, not a real failure.
pub async fn simulate_error() -> impl IntoResponse {
    if let Err(fault) = faulty_division(1, 0) {
        tracing::error!(
            exception.message = %fault,
            error.kind = "DivisionByZero",
            "A simulated error occurred"
        );
    }
    Json(json!({ "message": "Error log and trace span sent." }))
}

fn faulty_division(numerator: u64, denominator: u64) -> Result<u64, HandlerFault> {
    numerator
        .checked_div(denominator)
        .ok_or(HandlerFault::DivisionByZero)
}

/// `GET /`
///
/// Serves the frontend's index.html, or a not-found shape plus one error
/// log when the file is absent.
pub async fn serve_frontend(State(state): State<AppState>) -> Response {
    match tokio::fs::read(&state.frontend_path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(
                path = %state.frontend_path.display(),
                error = %err,
                "Frontend file not found"
            );
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Frontend not found" })),
            )
                .into_response()
        }
    }
}
