//! Error types for the psn-api library.
//!
//! The PSN service reports failures through HTTP status codes with a
//! free-form response body. Every non-2xx status is mapped to exactly one
//! variant here, and the raw body text is preserved verbatim for diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

/// The unified error type for psn-api operations.
///
/// Variants split into three groups: local precondition violations
/// ([`Error::IllegalArgument`]), client-side I/O failures
/// ([`Error::Transport`]), and typed remote failures (everything else).
/// Remote variants carry the raw response body so callers can inspect
/// whatever the service said.
#[derive(Debug, Error)]
pub enum Error {
    /// The npsso cookie was rejected, or the token exchange failed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A caller-supplied argument failed local validation. Never raised in
    /// response to network traffic.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    /// HTTP 400 from the service.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// HTTP 401 from the service.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 403 from the service.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// HTTP 404 from the service.
    #[error("not found: {0}")]
    NotFound(String),

    /// HTTP 405 from the service.
    #[error("method not allowed: {0}")]
    NotAllowed(String),

    /// Any HTTP 5xx from the service.
    #[error("server error: {0}")]
    ServerError(String),

    /// A non-2xx status with no dedicated variant.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Map a non-success status code and its response body to the
    /// corresponding typed variant.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 => Error::BadRequest(body),
            401 => Error::Unauthorized(body),
            403 => Error::Forbidden(body),
            404 => Error::NotFound(body),
            405 => Error::NotAllowed(body),
            s if s >= 500 => Error::ServerError(body),
            s => Error::Http { status: s, body },
        }
    }

    /// Returns the raw response body for network-origin errors.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::BadRequest(body)
            | Error::Unauthorized(body)
            | Error::Forbidden(body)
            | Error::NotFound(body)
            | Error::NotAllowed(body)
            | Error::ServerError(body)
            | Error::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_taxonomy() {
        let cases = [
            (400, "bad request"),
            (401, "unauthorized"),
            (403, "forbidden"),
            (404, "not found"),
            (405, "method not allowed"),
            (500, "server error"),
            (503, "server error"),
        ];
        for (status, prefix) in cases {
            let err = Error::from_status(
                StatusCode::from_u16(status).unwrap(),
                "detail".to_string(),
            );
            assert!(
                err.to_string().starts_with(prefix),
                "status {status} mapped to {err}"
            );
        }
    }

    #[test]
    fn unexpected_status_falls_back_to_generic_http() {
        let err = Error::from_status(StatusCode::from_u16(418).unwrap(), "teapot".to_string());
        match err {
            Error::Http { status, ref body } => {
                assert_eq!(status, 418);
                assert_eq!(body, "teapot");
            }
            other => panic!("expected generic Http, got {other}"),
        }
    }

    #[test]
    fn body_preserved_verbatim() {
        let body = r#"{"error":{"referenceId":"abc","code":2105356}}"#;
        let err = Error::from_status(StatusCode::NOT_FOUND, body.to_string());
        assert_eq!(err.response_body(), Some(body));
    }
}
