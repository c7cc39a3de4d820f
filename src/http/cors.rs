//! Fixed CORS header set.
//!
//! The proxy answers browsers with one constant set of permissive CORS
//! headers; it never varies them per origin. The set is merged onto every
//! response path except the configuration-error response, which historically
//! omitted it (kept that way on purpose).

use std::sync::LazyLock;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Process-wide constant CORS header set; immutable, so safe to share.
static CORS_HEADERS: LazyLock<HeaderMap> = LazyLock::new(|| {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers
});

/// The constant CORS header set.
pub fn cors_headers() -> &'static HeaderMap {
    &CORS_HEADERS
}

/// Merge the CORS set into `headers`, overwriting same-named entries.
///
/// Overwriting means any CORS headers upstream sent are superseded by ours.
pub fn apply_cors(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS.iter() {
        headers.insert(name.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_exactly_three_headers() {
        let headers = cors_headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type, Authorization");
    }

    #[test]
    fn apply_overwrites_upstream_cors() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("https://upstream.example"),
        );
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("application/json"),
        );

        apply_cors(&mut headers);

        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers.len(), 4);
    }
}
