//! Session lifecycle: login, bearer tokens, transparent refresh, logout.
//!
//! The manager is the token pair's only writer. It moves through the states
//! Anonymous → Authenticated → Refreshing and back; a failed refresh tears
//! the whole session down so collaborators observe "must re-authenticate"
//! as [`ApiError::SessionExpired`].

mod store;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use reqwest::Method;
use tokio::sync::Mutex;

pub use store::{MemoryTokenStore, MockTokenStore, REFRESH_TOKEN_KEY, TOKEN_KEY, TokenStore, USER_KEY};

use crate::{
    error::{ApiError, error_for_status, extract_message},
    models::auth::{LoginRequest, LoginResponse, LogoutRequest, RefreshRequest, RefreshResponse, User},
    transport::{ApiRequest, Transport},
};

/// Observable lifecycle state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No tokens held.
    Anonymous,
    /// A token pair is held and attached to outbound calls.
    Authenticated,
    /// A 401 was observed and a refresh is in flight.
    Refreshing,
}

const STATE_ANONYMOUS: u8 = 0;
const STATE_AUTHENTICATED: u8 = 1;
const STATE_REFRESHING: u8 = 2;

/// Owns the token pair and the refresh discipline.
pub struct SessionManager {
    transport: Arc<dyn Transport>,
    store: Arc<dyn TokenStore>,
    base_url: String,
    state: AtomicU8,
    refresh_lock: Mutex<()>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("base_url", &self.base_url)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create a manager over the given transport and storage.
    ///
    /// A token surviving in storage restores the Authenticated state, so a
    /// restarted client resumes its previous session.
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn TokenStore>,
        base_url: impl Into<String>,
    ) -> Self {
        let initial = if store.get(TOKEN_KEY).is_some() {
            STATE_AUTHENTICATED
        } else {
            STATE_ANONYMOUS
        };

        Self {
            transport,
            store,
            base_url: base_url.into(),
            state: AtomicU8::new(initial),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.state.load(Ordering::SeqCst) {
            STATE_AUTHENTICATED => SessionState::Authenticated,
            STATE_REFRESHING => SessionState::Refreshing,
            _ => SessionState::Anonymous,
        }
    }

    /// Access token currently held, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The persisted user record from the last successful login.
    #[must_use]
    pub fn stored_user(&self) -> Option<User> {
        self.store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Exchange credentials for a token pair and persist the session.
    ///
    /// # Errors
    ///
    /// [`ApiError::BadRequest`] carries the backend's message on rejected
    /// credentials; transport and decode failures propagate as usual.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<User, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username_or_email: username_or_email.to_owned(),
            password: password.to_owned(),
        })?;

        let request = ApiRequest {
            method: Method::POST,
            url: format!("{}/auth/login", self.base_url),
            query: Vec::new(),
            body: Some(body),
            bearer: None,
        };

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            // A 401 here is rejected credentials, not an expired session.
            if response.status == 401 {
                return Err(ApiError::BadRequest {
                    message: extract_message(&response.body),
                });
            }
            return Err(error_for_status(response.status, &response.body));
        }

        let parsed: LoginResponse = serde_json::from_slice(&response.body)?;

        self.store.set(TOKEN_KEY, &parsed.access_token);
        self.store.set(REFRESH_TOKEN_KEY, &parsed.refresh_token);
        let user_json = serde_json::to_string(&parsed.user)?;
        self.store.set(USER_KEY, &user_json);
        self.state.store(STATE_AUTHENTICATED, Ordering::SeqCst);

        tracing::debug!(user = %parsed.user.username, "login succeeded");

        Ok(parsed.user)
    }

    /// Rotate the access token after a 401 observed on a request that carried
    /// `stale_token`, and return the token to replay with.
    ///
    /// Concurrent callers coalesce behind a single refresh: a task that
    /// acquires the lock after another task already rotated the token reuses
    /// the rotated token instead of issuing a second refresh call.
    ///
    /// # Errors
    ///
    /// [`ApiError::SessionExpired`] when no refresh token is held or the
    /// refresh call fails; all session state is cleared first.
    pub(crate) async fn refresh_after_unauthorized(
        &self,
        stale_token: &str,
    ) -> Result<String, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.store.get(TOKEN_KEY) {
            if current != stale_token {
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.store.get(REFRESH_TOKEN_KEY) else {
            self.invalidate();
            return Err(ApiError::SessionExpired);
        };

        self.state.store(STATE_REFRESHING, Ordering::SeqCst);

        match self.request_refresh(refresh_token).await {
            Ok(parsed) => {
                self.store.set(TOKEN_KEY, &parsed.access_token);
                if let Some(rotated) = &parsed.refresh_token {
                    self.store.set(REFRESH_TOKEN_KEY, rotated);
                }
                self.state.store(STATE_AUTHENTICATED, Ordering::SeqCst);
                tracing::debug!("access token refreshed");

                Ok(parsed.access_token)
            }
            Err(error) => {
                tracing::warn!(%error, "token refresh failed; session invalidated");
                self.invalidate();

                Err(ApiError::SessionExpired)
            }
        }
    }

    async fn request_refresh(&self, refresh_token: String) -> Result<RefreshResponse, ApiError> {
        let body = serde_json::to_value(RefreshRequest { refresh_token })?;

        let request = ApiRequest {
            method: Method::POST,
            url: format!("{}/auth/refresh-token", self.base_url),
            query: Vec::new(),
            body: Some(body),
            bearer: None,
        };

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(error_for_status(response.status, &response.body));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Notify the backend (best effort), then unconditionally clear the
    /// stored token pair and user record.
    ///
    /// This is the only place a failure is swallowed: a rejected or
    /// unreachable logout endpoint never blocks local teardown.
    pub async fn logout(&self) {
        if self.store.get(TOKEN_KEY).is_some() {
            let payload = LogoutRequest {
                refresh_token: self.store.get(REFRESH_TOKEN_KEY),
            };

            if let Ok(body) = serde_json::to_value(&payload) {
                let request = ApiRequest {
                    method: Method::POST,
                    url: format!("{}/auth/logout", self.base_url),
                    query: Vec::new(),
                    body: Some(body),
                    bearer: self.access_token(),
                };

                match self.transport.execute(request).await {
                    Ok(response) if response.is_success() => {}
                    Ok(response) => {
                        tracing::debug!(status = response.status, "logout notification rejected");
                    }
                    Err(error) => tracing::debug!(%error, "logout notification failed"),
                }
            }
        }

        self.invalidate();
    }

    /// Clear the three storage keys together and drop to Anonymous.
    fn invalidate(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.state.store(STATE_ANONYMOUS, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::transport::{ApiResponse, MockTransport};

    use super::*;

    fn json_response(status: u16, body: serde_json::Value) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string().into_bytes(),
        }
    }

    fn seeded_store() -> Arc<MemoryTokenStore> {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(TOKEN_KEY, "stale");
        store.set(REFRESH_TOKEN_KEY, "r1");
        store
    }

    #[tokio::test]
    async fn login_persists_the_token_pair_and_user() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.url.ends_with("/auth/login")
                    && request.body.as_ref().is_some_and(|body| {
                        body["usernameOrEmail"] == "desk" && body["password"] == "hunter2"
                    })
            })
            .times(1)
            .returning(|_| {
                Ok(json_response(
                    200,
                    serde_json::json!({
                        "accessToken": "a1",
                        "refreshToken": "r1",
                        "user": {"id": 1, "username": "desk"}
                    }),
                ))
            });

        let store = Arc::new(MemoryTokenStore::new());
        let manager = SessionManager::new(
            Arc::new(transport),
            store.clone(),
            "https://printshop.example/api",
        );

        let user = manager.login("desk", "hunter2").await?;

        assert_eq!(user.username, "desk");
        assert_eq!(store.get(TOKEN_KEY), Some("a1".to_owned()));
        assert_eq!(store.get(REFRESH_TOKEN_KEY), Some("r1".to_owned()));
        assert!(store.get(USER_KEY).is_some());
        assert_eq!(manager.state(), SessionState::Authenticated);
        assert_eq!(manager.stored_user().map(|user| user.id), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_credentials_surface_the_backend_message() {
        let mut transport = MockTransport::new();
        transport.expect_execute().times(1).returning(|_| {
            Ok(json_response(
                401,
                serde_json::json!({"message": "bad credentials"}),
            ))
        });

        let manager = SessionManager::new(
            Arc::new(transport),
            Arc::new(MemoryTokenStore::new()),
            "https://printshop.example/api",
        );

        let error = manager.login("desk", "nope").await.unwrap_err();

        assert!(matches!(
            error,
            ApiError::BadRequest { ref message } if message == "bad credentials"
        ));
    }

    #[tokio::test]
    async fn coalesced_refresh_skips_the_redundant_call() -> TestResult {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.url.ends_with("/auth/refresh-token"))
            .times(1)
            .returning(|_| Ok(json_response(200, serde_json::json!({"accessToken": "fresh"}))));

        let store = seeded_store();
        let manager = SessionManager::new(
            Arc::new(transport),
            store.clone(),
            "https://printshop.example/api",
        );

        let first = manager.refresh_after_unauthorized("stale").await?;
        // A second waiter that observed the same stale token finds it already
        // rotated and must not trigger another refresh call.
        let second = manager.refresh_after_unauthorized("stale").await?;

        assert_eq!(first, "fresh");
        assert_eq!(second, "fresh");
        assert_eq!(store.get(TOKEN_KEY), Some("fresh".to_owned()));

        Ok(())
    }

    #[tokio::test]
    async fn missing_refresh_token_tears_the_session_down() {
        let transport = MockTransport::new();
        let store = Arc::new(MemoryTokenStore::new());
        store.set(TOKEN_KEY, "stale");

        let manager = SessionManager::new(
            Arc::new(transport),
            store.clone(),
            "https://printshop.example/api",
        );

        let error = manager.refresh_after_unauthorized("stale").await.unwrap_err();

        assert!(matches!(error, ApiError::SessionExpired));
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(manager.state(), SessionState::Anonymous);
    }
}
