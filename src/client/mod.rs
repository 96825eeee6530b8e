//! Typed REST client facade.
//!
//! Thin wrappers over the backend's endpoints: build a path, send it through
//! the session-aware request core, parse the typed response. No business
//! logic lives here; failures are logged with the calling operation's span
//! and re-thrown, never swallowed.

mod audit;
mod customers;
mod expenses;
mod loan_payments;
mod loans;
mod prints;
mod recurring;
mod sublimation;

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::ClientConfig,
    error::{ApiError, error_for_status},
    models::auth::User,
    session::{SessionManager, TokenStore},
    transport::{ApiRequest, ApiResponse, HttpTransport, Transport},
};

/// Authenticated client for the backend's `/api` surface.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<SessionManager>,
    base_url: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client over a real HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.timeout())?);

        Ok(Self::with_transport(config, transport, store))
    }

    /// Build a client over a custom transport; tests inject a mock here.
    #[must_use]
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let session = Arc::new(SessionManager::new(
            Arc::clone(&transport),
            store,
            config.base_url(),
        ));

        Self {
            transport,
            session,
            base_url: config.base_url().to_owned(),
        }
    }

    /// The session manager owning this client's tokens.
    #[must_use]
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Log in and persist the session.
    ///
    /// # Errors
    ///
    /// Rejected credentials surface as [`ApiError::BadRequest`] with the
    /// backend's message.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<User, ApiError> {
        self.session.login(username_or_email, password).await
    }

    /// Log out: best-effort backend notification, unconditional local
    /// teardown.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) {
        self.session.logout().await;
    }

    /// Fetch the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    // Request core. Everything below attaches the bearer token and applies
    // the refresh-and-retry discipline.

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, Vec::new(), None).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;

        self.request(Method::POST, path, Vec::new(), Some(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, Vec::new(), None).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;

        self.request(Method::PUT, path, Vec::new(), Some(body)).await
    }

    pub(crate) async fn put_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, query, None).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, Vec::new(), None).await?;
        if !response.is_success() {
            tracing::warn!(path, status = response.status, "api request failed");
            return Err(error_for_status(response.status, &response.body));
        }

        Ok(())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, query, body).await?;
        if !response.is_success() {
            tracing::warn!(path, status = response.status, "api request failed");
            return Err(error_for_status(response.status, &response.body));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Send with the bearer token attached; on a 401, refresh once and
    /// replay the original request exactly once with the new token.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: format!("{}{path}", self.base_url),
            query,
            body,
            bearer: self.session.access_token(),
        };

        let response = self.transport.execute(request.clone()).await?;
        if response.status != 401 {
            return Ok(response);
        }

        let stale = request.bearer.clone().unwrap_or_default();
        let fresh = self.session.refresh_after_unauthorized(&stale).await?;

        let retry = ApiRequest {
            bearer: Some(fresh),
            ..request
        };

        let response = self.transport.execute(retry).await?;
        if response.status == 401 {
            // One refresh per original request; a repeat 401 is terminal.
            tracing::warn!(path, "request unauthorized after token refresh");
            return Err(ApiError::SessionExpired);
        }

        Ok(response)
    }
}
