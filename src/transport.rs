//! HTTP transport seam used by the session manager and client facade.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

/// A single outbound API request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,

    /// Fully-qualified URL.
    pub url: String,

    /// Query string pairs appended to the URL.
    pub query: Vec<(String, String)>,

    /// JSON request body, if any.
    pub body: Option<Value>,

    /// Bearer token attached as the `Authorization` header.
    pub bearer: Option<String>,
}

/// A raw response: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, lossily.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Errors raised by the transport itself; no response was produced.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(String),

    /// The request could not be sent, or timed out.
    #[error("request failed: {0}")]
    Send(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Executes [`ApiRequest`]s.
///
/// The production implementation is [`HttpTransport`]; tests substitute
/// [`MockTransport`].
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the underlying client cannot be
    /// constructed.
    pub fn new(timeout: std::time::Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| TransportError::Build(error.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self.http.request(request.method, request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(bearer) = &request.bearer {
            builder = builder.bearer_auth(bearer);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| TransportError::Send(error.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::Body(error.to_string()))?
            .to_vec();

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_2xx_range() {
        let response = ApiResponse {
            status: 204,
            body: Vec::new(),
        };

        assert!(response.is_success());
        assert!(
            !ApiResponse {
                status: 301,
                body: Vec::new()
            }
            .is_success()
        );
    }

    #[test]
    fn body_text_is_lossy() {
        let response = ApiResponse {
            status: 200,
            body: b"ok".to_vec(),
        };

        assert_eq!(response.body_text(), "ok");
    }
}
