//! API error taxonomy.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by the client facade and session manager.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The session could not be established or re-established; the caller
    /// must log in again.
    #[error("session expired; re-authentication required")]
    SessionExpired,

    /// The backend rejected the request; the message is shown verbatim.
    #[error("{message}")]
    BadRequest {
        /// Message extracted from the response body.
        message: String,
    },

    /// Backend failure; the request may succeed later and is not retried.
    #[error("server error (status {status}); try again later")]
    Server {
        /// HTTP status code in the 5xx range.
        status: u16,
    },

    /// Any other non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A success response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Map a non-success, non-401 response to an error.
///
/// 400 bodies have their `message` field (or raw text) surfaced verbatim;
/// 5xx collapses to a generic retry-later error.
pub(crate) fn error_for_status(status: u16, body: &[u8]) -> ApiError {
    match status {
        400 => ApiError::BadRequest {
            message: extract_message(body),
        },
        500..=599 => ApiError::Server { status },
        _ => ApiError::Status {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

/// Pull the `message` field out of an error body, falling back to raw text.
pub(crate) fn extract_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_surfaces_backend_message() {
        let error = error_for_status(400, br#"{"message":"job name already exists"}"#);

        assert_eq!(error.to_string(), "job name already exists");
    }

    #[test]
    fn bad_request_falls_back_to_raw_body() {
        let error = error_for_status(400, b"not json");

        assert_eq!(error.to_string(), "not json");
    }

    #[test]
    fn server_errors_are_generic() {
        let error = error_for_status(503, b"gateway timeout");

        assert!(matches!(error, ApiError::Server { status: 503 }));
    }

    #[test]
    fn other_statuses_keep_body_text() {
        let error = error_for_status(404, b"no such loan");

        assert!(matches!(
            error,
            ApiError::Status { status: 404, ref body } if body == "no such loan"
        ));
    }
}
