//! reqwest-backed implementation of [`UpstreamClient`].

use async_trait::async_trait;
use axum::body::Body;

use crate::upstream::{UpstreamClient, UpstreamError, UpstreamRequest, UpstreamResponse};

/// Production upstream client.
///
/// TLS via rustls, redirects followed automatically (the caller never sees a
/// 3xx directly), bodies streamed in both directions. No timeout is set here;
/// the transport's defaults apply.
pub struct ReqwestUpstream {
    client: reqwest::Client,
}

impl ReqwestUpstream {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let body = reqwest::Body::wrap_stream(request.body.into_data_stream());

        let mut outbound = self
            .client
            .request(request.method, request.url)
            .body(body)
            .build()?;
        *outbound.headers_mut() = request.headers;

        let response = self.client.execute(outbound).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = Body::from_stream(response.bytes_stream());

        Ok(UpstreamResponse { status, headers, body })
    }
}
