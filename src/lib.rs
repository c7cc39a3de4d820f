//! Edge proxy for the YNAB API.
//!
//! Forwards every inbound request to the configured YNAB budget endpoint,
//! injecting the bearer token from configuration on the way out and CORS
//! headers on the way back. See [`http::server`] for the request flow.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
