//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, catch-all route)
//!     → request.rs (attach x-request-id)
//!     → server.rs proxy handler (config gate → preflight → rewrite → forward)
//!     → cors.rs (merge fixed CORS headers onto the response)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod server;

pub use request::{request_id_layer, X_REQUEST_ID};
pub use server::HttpServer;
