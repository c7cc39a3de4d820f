//! Process-level errors.
//!
//! Request-scoped failures (missing credentials, upstream transport errors)
//! never surface here; they are mapped to HTTP responses inside the proxy
//! handler. This type covers the failures that can abort startup.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that can occur while bringing the proxy up.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The upstream HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    /// Listener bind or serve failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
