//! Session and user wire types.

use serde::{Deserialize, Serialize};

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or e-mail address; the backend accepts either.
    pub username_or_email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Successful login payload: the token pair plus the authenticated user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// Long-lived token used to rotate the access token.
    pub refresh_token: String,
    /// The authenticated user record.
    pub user: User,
}

/// Refresh-token exchange payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The stored refresh token.
    pub refresh_token: String,
}

/// Refresh result; the refresh token is only present when rotated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// Replacement access token.
    pub access_token: String,
    /// Rotated refresh token, when the backend issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Logout notification payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    /// Refresh token to revoke, when one is held.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Authenticated backend user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact e-mail.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role name as the backend reports it.
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn login_request_uses_backend_field_names() -> TestResult {
        let body = serde_json::to_value(LoginRequest {
            username_or_email: "desk".to_owned(),
            password: "hunter2".to_owned(),
        })?;

        assert_eq!(body["usernameOrEmail"], "desk");
        assert_eq!(body["password"], "hunter2");

        Ok(())
    }

    #[test]
    fn refresh_response_tolerates_missing_rotation() -> TestResult {
        let parsed: RefreshResponse = serde_json::from_str(r#"{"accessToken":"next"}"#)?;

        assert_eq!(parsed.access_token, "next");
        assert!(parsed.refresh_token.is_none());

        Ok(())
    }

    #[test]
    fn logout_request_omits_an_absent_refresh_token() -> TestResult {
        let body = serde_json::to_value(LogoutRequest {
            refresh_token: None,
        })?;

        assert_eq!(body, serde_json::json!({}));

        Ok(())
    }
}
