//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (YNAB_TOKEN, YNAB_BUDGET_ID, YNAB_PROXY_BIND)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with the request handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the proxy runs from environment alone
//! - Missing credentials are NOT a load error: the handler answers 500 per
//!   request, so a misconfigured deployment still serves CORS preflights

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{CredentialsConfig, ListenerConfig, ProxyConfig, UpstreamConfig};
