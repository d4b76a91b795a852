//! Demo Web Backend Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod telemetry;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
