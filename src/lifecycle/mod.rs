//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → load config → init tracing → bind listener → serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs)
//!         → Shutdown::trigger (shutdown.rs)
//!         → axum graceful shutdown drains in-flight requests
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
