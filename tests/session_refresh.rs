//! Refresh-and-retry discipline exercised end to end through the client
//! facade with a mocked transport.

use std::sync::Arc;

use mockall::Sequence;
use testresult::TestResult;

use printdesk::{
    client::ApiClient,
    config::ClientConfig,
    error::ApiError,
    session::{
        MemoryTokenStore, REFRESH_TOKEN_KEY, SessionState, TOKEN_KEY, TokenStore, USER_KEY,
    },
    transport::{ApiResponse, MockTransport, TransportError},
};

const BASE: &str = "https://printshop.example/api";

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
    store.set(USER_KEY, r#"{"id":1,"username":"desk"}"#);
    store
}

fn client(transport: MockTransport, store: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::with_transport(&ClientConfig::new(BASE), Arc::new(transport), store)
}

#[tokio::test]
async fn a_401_refreshes_and_replays_exactly_once() -> TestResult {
    let mut transport = MockTransport::new();
    let mut seq = Sequence::new();

    transport
        .expect_execute()
        .withf(|request| {
            request.url.ends_with("/loans") && request.bearer.as_deref() == Some("stale")
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(401, serde_json::json!({}))));

    transport
        .expect_execute()
        .withf(|request| {
            request.url.ends_with("/auth/refresh-token")
                && request
                    .body
                    .as_ref()
                    .is_some_and(|body| body["refreshToken"] == "r1")
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(json_response(
                200,
                serde_json::json!({"accessToken": "fresh", "refreshToken": "r2"}),
            ))
        });

    transport
        .expect_execute()
        .withf(|request| {
            request.url.ends_with("/loans") && request.bearer.as_deref() == Some("fresh")
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(200, serde_json::json!([]))));

    let store = seeded_store();
    let client = client(transport, store.clone());

    let loans = client.list_loans().await?;

    assert!(loans.is_empty());
    assert_eq!(store.get(TOKEN_KEY), Some("fresh".to_owned()));
    assert_eq!(store.get(REFRESH_TOKEN_KEY), Some("r2".to_owned()));

    Ok(())
}

#[tokio::test]
async fn a_second_401_after_the_replay_is_terminal() {
    let mut transport = MockTransport::new();
    let mut seq = Sequence::new();

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/loans"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(401, serde_json::json!({}))));

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/auth/refresh-token"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(200, serde_json::json!({"accessToken": "fresh"}))));

    // The replayed request is rejected again; no further refresh may happen,
    // which the times(1) above enforces.
    transport
        .expect_execute()
        .withf(|request| {
            request.url.ends_with("/loans") && request.bearer.as_deref() == Some("fresh")
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(401, serde_json::json!({}))));

    let client = client(transport, seeded_store());

    let error = client.list_loans().await.unwrap_err();

    assert!(matches!(error, ApiError::SessionExpired));
}

#[tokio::test]
async fn a_failed_refresh_tears_the_session_down() {
    let mut transport = MockTransport::new();
    let mut seq = Sequence::new();

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/loans"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(401, serde_json::json!({}))));

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/auth/refresh-token"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json_response(401, serde_json::json!({"message": "revoked"}))));

    let store = seeded_store();
    let client = client(transport, store.clone());

    let error = client.list_loans().await.unwrap_err();

    assert!(matches!(error, ApiError::SessionExpired));
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(client.session().state(), SessionState::Anonymous);
}

#[tokio::test]
async fn concurrent_401s_coalesce_into_one_refresh() -> TestResult {
    let mut transport = MockTransport::new();

    // Depending on interleaving the second request either observes the stale
    // token (and 401s) or already carries the fresh one; the refresh endpoint
    // must be hit exactly once either way.
    transport
        .expect_execute()
        .withf(|request| {
            request.url.ends_with("/loans") && request.bearer.as_deref() == Some("stale")
        })
        .times(1..=2)
        .returning(|_| Ok(json_response(401, serde_json::json!({}))));

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/auth/refresh-token"))
        .times(1)
        .returning(|_| Ok(json_response(200, serde_json::json!({"accessToken": "fresh"}))));

    transport
        .expect_execute()
        .withf(|request| {
            request.url.ends_with("/loans") && request.bearer.as_deref() == Some("fresh")
        })
        .times(2)
        .returning(|_| Ok(json_response(200, serde_json::json!([]))));

    let client = client(transport, seeded_store());

    let (first, second) = tokio::join!(client.list_loans(), client.list_loans());

    assert!(first?.is_empty());
    assert!(second?.is_empty());

    Ok(())
}

#[tokio::test]
async fn logout_clears_storage_even_when_the_backend_rejects() {
    let mut transport = MockTransport::new();

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/auth/logout"))
        .times(1)
        .returning(|_| Err(TransportError::Send("connection reset".to_owned())));

    let store = seeded_store();
    let client = client(transport, store.clone());

    client.logout().await;

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(client.session().state(), SessionState::Anonymous);
}

#[tokio::test]
async fn backend_messages_surface_verbatim_on_400() {
    let mut transport = MockTransport::new();

    transport
        .expect_execute()
        .withf(|request| request.url.ends_with("/loans"))
        .times(1)
        .returning(|_| {
            Ok(json_response(
                400,
                serde_json::json!({"message": "principal must be positive"}),
            ))
        });

    let client = client(transport, seeded_store());

    let error = client.list_loans().await.unwrap_err();

    assert_eq!(error.to_string(), "principal must be positive");
}
