//! Upstream API client subsystem.
//!
//! # Data Flow
//! ```text
//! proxy handler builds UpstreamRequest (method, url, headers, body stream)
//!     → UpstreamClient::send (one attempt, redirects followed)
//!     → UpstreamResponse (status, headers, body stream)
//!     → relayed to the client with CORS headers merged in
//! ```
//!
//! # Design Decisions
//! - The network capability is a trait so tests can substitute a capture
//!   double and assert on the outbound request without a socket
//! - Bodies are streams in both directions; nothing here buffers
//! - Transport failures surface as [`UpstreamError`]; HTTP error statuses
//!   from upstream are ordinary responses, not errors

pub mod client;

pub use client::ReqwestUpstream;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Method, StatusCode};
use thiserror::Error;
use url::Url;

/// Request forwarded to the upstream API.
pub struct UpstreamRequest {
    /// Inbound method, copied verbatim.
    pub method: Method,
    /// Rewritten target URL.
    pub url: Url,
    /// Prepared headers (Authorization already overwritten).
    pub headers: HeaderMap,
    /// Inbound body, passed through as a stream.
    pub body: Body,
}

/// Response received from the upstream API.
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Upstream body, relayed as a stream.
    pub body: Body,
}

/// Transport-level failure of the upstream exchange.
///
/// Covers connect, DNS, TLS and mid-stream failures; never an HTTP status.
#[derive(Debug, Error)]
#[error("upstream request failed: {message}")]
pub struct UpstreamError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

/// The outbound-call capability, injected into the HTTP server.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Issue the request and resolve once response headers are available.
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}
