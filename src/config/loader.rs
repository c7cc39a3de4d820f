//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the YNAB personal access token.
pub const ENV_TOKEN: &str = "YNAB_TOKEN";
/// Environment variable holding the budget id.
pub const ENV_BUDGET_ID: &str = "YNAB_BUDGET_ID";
/// Environment variable overriding the listener bind address.
pub const ENV_BIND: &str = "YNAB_PROXY_BIND";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Load configuration: TOML file (when given), then environment overrides,
/// then semantic validation.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => ProxyConfig::default(),
    };

    apply_env_overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Environment always wins over file values for the secrets and bind address.
fn apply_env_overrides(config: &mut ProxyConfig) {
    if let Ok(token) = std::env::var(ENV_TOKEN) {
        config.credentials.api_token = token;
    }
    if let Ok(budget_id) = std::env::var(ENV_BUDGET_ID) {
        config.credentials.budget_id = budget_id;
    }
    if let Ok(bind) = std::env::var(ENV_BIND) {
        config.listener.bind_address = bind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ProxyConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        // Note: does not assert on credentials, which may leak in from the
        // test environment.
        let config = load_config(None).unwrap();
        assert!(config.upstream.base_url.ends_with('/'));
    }

    #[test]
    fn rejects_unparseable_toml() {
        let dir = std::env::temp_dir().join("ynab-proxy-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "credentials = 42").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
