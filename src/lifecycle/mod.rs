//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init telemetry → Check frontend asset → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C (or test trigger) → Stop accepting → Drain connections
//!     → Flush telemetry pipelines → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
