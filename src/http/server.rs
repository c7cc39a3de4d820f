//! HTTP server setup and the proxy handler.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all route
//! - Wire up middleware (tracing, request ID)
//! - Bind the server to a listener, serve with graceful shutdown
//! - Per request: gate on configuration, answer CORS preflight, rewrite the
//!   target URL, forward the request, relay the upstream response
//!
//! The handler is a single linear pass with two short-circuits:
//!
//! ```text
//! Start → [missing config → 500 (terminal)]
//!       → [OPTIONS → 204 preflight (terminal)]
//!       → build upstream request → call
//!       → [transport failure → 502 (terminal)]
//!       → [response → relay with CORS merged (terminal)]
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::cors;
use crate::http::request::request_id_layer;
use crate::http::X_REQUEST_ID;
use crate::upstream::{ReqwestUpstream, UpstreamClient, UpstreamRequest, UpstreamResponse};

/// Fixed body of the gateway-error response.
const GATEWAY_ERROR_BODY: &str = "An error occurred while proxying the request.";

/// Headers that describe the inbound hop rather than the end-to-end exchange.
/// Stripped before forwarding so the transport frames the outbound call
/// itself; `Host` is recomputed from the target URL.
static HOP_BY_HOP_HEADERS: [HeaderName; 7] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    HeaderName::from_static("proxy-connection"),
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub upstream: Arc<dyn UpstreamClient>,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the production (reqwest) upstream client.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let upstream = Arc::new(ReqwestUpstream::new()?);
        Ok(Self::with_upstream(config, upstream))
    }

    /// Create a server with an injected upstream client (used by tests).
    pub fn with_upstream(config: ProxyConfig, upstream: Arc<dyn UpstreamClient>) -> Self {
        let state = AppState { config: Arc::new(config), upstream };
        Self { router: Self::build_router(state) }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(proxy_handler))
            .route("/{*path}", any(proxy_handler))
            .with_state(state)
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler: one linear forward-and-relay pass per request.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // Checked per request; there is no cached "is configured" flag, so a
    // deployment fixed in place starts forwarding without a restart.
    let missing = state.config.credentials.missing();
    if !missing.is_empty() {
        tracing::warn!(
            request_id = %request_id,
            missing = ?missing,
            "Refusing request: configuration incomplete"
        );
        return config_error_response(&missing);
    }

    // Preflight short-circuits before any upstream work.
    if request.method() == Method::OPTIONS {
        tracing::debug!(request_id = %request_id, "Answering CORS preflight");
        return preflight_response();
    }

    // Target rewrite: base + budget id + inbound path + inbound query.
    // The path is passed through untouched; upstream rejects malformed ones.
    let path = request.uri().path();
    let search = match request.uri().query() {
        Some(q) => format!("?{q}"),
        None => String::new(),
    };
    let target = format!(
        "{}{}{}{}",
        state.config.upstream.base_url, state.config.credentials.budget_id, path, search
    );
    let url = match Url::parse(&target) {
        Ok(url) => url,
        Err(err) => {
            tracing::error!(request_id = %request_id, target = %target, error = %err, "Target URL unparseable");
            return gateway_error_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        url = %url,
        "Proxying request"
    );

    let (parts, body) = request.into_parts();

    // All inbound headers pass through; the bearer token always wins over
    // any client-supplied Authorization.
    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    let bearer = format!("Bearer {}", state.config.credentials.api_token);
    let mut bearer = match HeaderValue::try_from(bearer) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(request_id = %request_id, "Configured token is not a valid header value");
            return config_error_response(&["YNAB_TOKEN"]);
        }
    };
    bearer.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, bearer);

    let outbound = UpstreamRequest { method: parts.method, url, headers, body };

    // Single attempt, fail fast. Any HTTP status upstream returns is a
    // success at this layer and relayed verbatim.
    match state.upstream.send(outbound).await {
        Ok(upstream) => relay_response(upstream),
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "Upstream call failed");
            gateway_error_response()
        }
    }
}

/// 500 for missing configuration. Deliberately carries no CORS headers,
/// matching the long-standing behavior of this response path.
fn config_error_response(missing: &[&str]) -> Response {
    let body = format!("Server configuration error: missing {}.", missing.join(", "));
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}

/// 204 with exactly the CORS header set and nothing else.
fn preflight_response() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    *response.headers_mut() = cors::cors_headers().clone();
    response
}

/// 502 with the fixed body; the underlying error stays in the logs.
fn gateway_error_response() -> Response {
    let mut response = Response::new(Body::from(GATEWAY_ERROR_BODY));
    *response.status_mut() = StatusCode::BAD_GATEWAY;
    *response.headers_mut() = cors::cors_headers().clone();
    response
}

/// Relay the upstream response: status verbatim, headers copied, body
/// streamed through, CORS set merged last so it overwrites same-named
/// headers upstream may have sent.
fn relay_response(upstream: UpstreamResponse) -> Response {
    let mut headers = upstream.headers;
    strip_hop_by_hop(&mut headers);
    cors::apply_cors(&mut headers);

    let mut response = Response::new(upstream.body);
    *response.status_mut() = upstream.status;
    *response.headers_mut() = headers;
    response
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    headers.remove(header::HOST);
    for name in &HOP_BY_HOP_HEADERS {
        headers.remove(name);
    }
}
