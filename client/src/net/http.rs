//! JSON transport over `gloo-net` with bearer auth.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since the
//! backend is only reached from the browser.
//!
//! Every authenticated call attaches `Authorization: Bearer <token>` when a
//! token is stored. A 401 on such a call expires the session globally; the
//! anonymous login call opts out of that so a wrong password stays on the form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::API_BASE_URL;

/// Absolute URL for an API path such as `/auth/me`.
pub fn endpoint(path: &str) -> String {
    format!("{}/{}", API_BASE_URL.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Bytes escaped inside one path segment: everything except RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode an identifier for use as a single path segment.
///
/// # Errors
///
/// Empty and dot segments are refused; the browser would collapse them into
/// a different endpoint.
pub fn path_segment(raw: &str) -> Result<String, ApiError> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(ApiError::InvalidIdentifier(raw.to_owned()));
    }
    Ok(utf8_percent_encode(raw, SEGMENT).to_string())
}

/// Whether a failed response should end the stored session.
pub fn should_expire(status: u16, expire_on_unauthorized: bool) -> bool {
    expire_on_unauthorized && status == 401
}

/// Endpoint URL with a URL-encoded query string; `None` values are skipped.
pub fn endpoint_with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            query.append_pair(key, value);
            any = true;
        }
    }
    let base = endpoint(path);
    if any { format!("{base}?{}", query.finish()) } else { base }
}

/// `application/x-www-form-urlencoded` body for the OAuth2 password flow.
pub fn login_form_body(email: &str, password: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", email)
        .append_pair("password", password)
        .finish()
}

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::load_token() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn finish<T: DeserializeOwned>(
    result: Result<gloo_net::http::Response, gloo_net::Error>,
    expire_on_unauthorized: bool,
) -> Result<T, ApiError> {
    let resp = result.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()));
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    leptos::logging::warn!("{} {}: {err}", resp.url(), status);
    if should_expire(status, expire_on_unauthorized) {
        crate::util::session::expire_session();
    }
    Err(err)
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Returns the classified failure; see [`ApiError`].
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = authorized(gloo_net::http::Request::get(url)).send().await;
        finish(result, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns the classified failure; see [`ApiError`].
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(request.send().await, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

/// `PUT` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns the classified failure; see [`ApiError`].
pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::put(url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(request.send().await, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, serde_json::to_value(body));
        Err(ApiError::Unavailable)
    }
}

/// Anonymous form `POST`; a 401 here does not expire the session.
///
/// # Errors
///
/// Returns the classified failure; see [`ApiError`].
pub async fn post_form<T: DeserializeOwned>(url: &str, body: String) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(request.send().await, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
