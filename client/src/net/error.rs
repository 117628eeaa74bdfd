//! Wire-level failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what went wrong on the wire. Endpoint wrappers in
//! `api` turn it into the sentence a user sees, since the right wording
//! depends on which operation failed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single REST request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// 401: missing, invalid or expired bearer token.
    #[error("not authenticated")]
    Unauthorized,

    /// 400 with the backend's `detail`, when present.
    #[error("bad request: {}", .0.as_deref().unwrap_or("no detail"))]
    BadRequest(Option<String>),

    /// 422 with the first validation message, when present.
    #[error("validation failed: {}", .0.as_deref().unwrap_or("no detail"))]
    Validation(Option<String>),

    /// 404.
    #[error("not found")]
    NotFound,

    /// Any other non-success status.
    #[error("request failed: status {0}")]
    Status(u16),

    /// A success response whose body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// An identifier that cannot be placed in a URL path segment.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Called outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response from its status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            400 => Self::BadRequest(error_detail(body)),
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            422 => Self::Validation(error_detail(body)),
            _ => Self::Status(status),
        }
    }

    /// Backend-supplied detail message, if the error carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::BadRequest(detail) | Self::Validation(detail) => detail.as_deref(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Deserialize)]
struct FieldError {
    msg: Option<String>,
}

/// Extract the human-readable `detail` from an error body.
///
/// The backend sends either `{"detail": "text"}` or a list of field errors
/// `{"detail": [{"msg": "text", ...}]}`; for lists the first message wins.
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let text = match parsed.detail {
        ErrorDetail::Message(text) => Some(text),
        ErrorDetail::Fields(fields) => fields.into_iter().next().and_then(|f| f.msg),
    }?;
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_owned()) }
}
