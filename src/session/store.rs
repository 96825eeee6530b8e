//! Durable client-side session storage.

use std::collections::HashMap;
use std::sync::Mutex;

use mockall::automock;

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Durable string storage for session state, keyed by the fixed names above.
///
/// Implementations must be cheap to call: the session manager reads the
/// access token on every outbound request. Only the session manager writes.
#[automock]
pub trait TokenStore: Send + Sync {
    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory [`TokenStore`] for tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}
