//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request span via TraceLayer)
//!     → handlers.rs (three demo routes)
//!     → log events inside the request span → telemetry subsystem
//!     → Send response to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
