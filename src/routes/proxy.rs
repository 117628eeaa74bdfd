//! `/api/*` forwarding to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host, so the REST backend needs no CORS
//! setup of its own. Requests are forwarded with method, query, body and a
//! small allow-list of headers; responses come back with status, body and
//! content type.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out upstream becomes `502 Bad Gateway` with a
//! FastAPI-style `{"detail": ...}` body so the client's error parsing keeps
//! working. Paths with dot segments, encoded or not, are refused with `400`.
//!
//! The upstream path is the raw request path, still percent-encoded, so an
//! escaped `/` or `?` stays inside its segment.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use percent_encoding::percent_decode_str;

use crate::state::AppState;

/// Request headers copied to the upstream call.
pub static FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("rejected path {0:?}")]
    InvalidPath(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy");
        let (status, detail) = match self {
            Self::InvalidPath(_) => (StatusCode::BAD_REQUEST, "Invalid path"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "Backend unavailable"),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// Part of a raw request path below `/api/`, still percent-encoded.
///
/// `None` if the path is outside `/api/` or any segment decodes to `.` or
/// `..`.
pub fn proxied_path(uri_path: &str) -> Option<&str> {
    let rest = uri_path.strip_prefix("/api/")?;
    let decoded = percent_decode_str(rest).decode_utf8_lossy();
    let dotted = decoded.split(['/', '\\']).any(|segment| segment == "." || segment == "..");
    (!dotted).then_some(rest)
}

/// Upstream URL for a proxied path, keeping the original query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Subset of `headers` that is forwarded upstream.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: forward to `{upstream}/api/{path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = proxied_path(uri.path()).ok_or_else(|| ProxyError::InvalidPath(uri.path().to_owned()))?;
    let url = upstream_url(&state.config.api_upstream_url, path, uri.query());
    tracing::debug!(%method, %url, "api proxy");

    let upstream = state
        .http
        .request(method, &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
