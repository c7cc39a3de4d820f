//! Request ID middleware.
//!
//! Attaches an `x-request-id` (UUID v4) to every inbound request as early as
//! possible so log lines from one exchange can be correlated. Inbound ids
//! supplied by the client are kept.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layer that sets `x-request-id` on requests that lack one.
pub fn request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_parseable_uuid() {
        let mut make = MakeRequestUuid;
        let request = Request::builder().body(()).unwrap();
        let id = make.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&value).is_ok());
    }
}
