//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → env overrides (COLLECTOR_HOST / ALLOY_HOST)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an empty (or absent) config is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - The collector host is the only value expected to vary between
//!   deployments, so it alone gets an environment override

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppConfig;
pub use schema::FrontendConfig;
pub use schema::ServerConfig;
pub use schema::TelemetryConfig;
