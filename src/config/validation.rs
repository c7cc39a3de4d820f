//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees. All errors are
//! collected and returned together, not just the first. Missing credentials
//! are deliberately not an error here: the handler reports them per request.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("upstream.base_url {0:?} is not a valid URL")]
    InvalidBaseUrl(String),

    #[error("upstream.base_url {0:?} must end with '/'")]
    BaseUrlMissingSlash(String),

    #[error("upstream.base_url {0:?} must use http or https")]
    BaseUrlBadScheme(String),
}

/// Validate a loaded configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(config.listener.bind_address.clone()));
    }

    let base = &config.upstream.base_url;
    match Url::parse(base) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::BaseUrlBadScheme(base.clone()));
        }
        Ok(_) if !base.ends_with('/') => {
            errors.push(ValidationError::BaseUrlMissingSlash(base.clone()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::InvalidBaseUrl(base.clone())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
