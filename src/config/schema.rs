//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config files;
//! every field has a default so a minimal (or absent) config is usable.

use serde::{Deserialize, Serialize};

/// Fixed upstream base every request is rewritten onto.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.ynab.com/v1/budgets/";

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream API settings.
    pub upstream: UpstreamConfig,

    /// Deployment-supplied secrets.
    pub credentials: CredentialsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { bind_address: "0.0.0.0:8080".to_string() }
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL the budget id and inbound path are appended to.
    /// Must end with a trailing slash. Overridable so tests can point the
    /// proxy at a local mock server.
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_UPSTREAM_BASE.to_string() }
    }
}

/// Deployment-supplied secrets.
///
/// Both values are required for forwarding; when either is empty the handler
/// answers 500 per request instead of calling upstream.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CredentialsConfig {
    /// YNAB personal access token, sent upstream as `Authorization: Bearer …`.
    pub api_token: String,

    /// Budget id spliced into the upstream path.
    pub budget_id: String,
}

impl CredentialsConfig {
    /// Names of the required values that are currently empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_token.is_empty() {
            missing.push("YNAB_TOKEN");
        }
        if self.budget_id.is_empty() {
            missing.push("YNAB_BUDGET_ID");
        }
        missing
    }
}
