//! Socket-level tests for the authenticated client and its refresh flow.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod support;

use std::sync::Arc;

use pretty_assertions::assert_eq;

use std::sync::atomic::{AtomicBool, Ordering};

use stockpile_application::ports::{ApiClient, ApiError, RequestConfig, StorageError, TokenStore};
use stockpile_domain::TokenPair;
use stockpile_infrastructure::{HttpApiClient, MemorySessionStore};

use support::MockServer;

const OK_BODY: &str = r#"{"data":{"ok":true}}"#;
const REFRESHED_BODY: &str = r#"{"data":{"accessToken":"T2","refreshToken":"R2"}}"#;
const REFRESH_PATH: &str = "/api/auth/refresh-token";

fn seeded_store() -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::with_tokens(TokenPair::new("T1", "R1")))
}

fn client(
    server: &MockServer,
    store: &Arc<MemorySessionStore>,
) -> HttpApiClient<MemorySessionStore> {
    HttpApiClient::new(server.base_url(), Arc::clone(store)).unwrap()
}

#[tokio::test]
async fn test_attaches_bearer_token() {
    let server = MockServer::start(|_| (200, OK_BODY.to_string())).await;
    let store = seeded_store();
    let api = client(&server, &store);

    let value: serde_json::Value = api.get("/api/ping", RequestConfig::default()).await.unwrap();

    assert_eq!(value["data"]["ok"], serde_json::json!(true));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer T1"));
}

#[tokio::test]
async fn test_forwards_query_parameters() {
    let server = MockServer::start(|_| (200, OK_BODY.to_string())).await;
    let api = client(&server, &seeded_store());

    let config = RequestConfig::default()
        .query("page", "2")
        .query("search", "laptop");
    let _: serde_json::Value = api.get("/api/ping", config).await.unwrap();

    let path = server.requests()[0].path.clone();
    assert!(path.contains("page=2"));
    assert!(path.contains("search=laptop"));
}

#[tokio::test]
async fn test_refreshes_once_and_retries_on_401() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (200, REFRESHED_BODY.to_string())
        } else if req.authorization.as_deref() == Some("Bearer T2") {
            (200, OK_BODY.to_string())
        } else {
            (401, r#"{"error":"token expired"}"#.to_string())
        }
    })
    .await;
    let store = seeded_store();
    let api = client(&server, &store);

    let value: serde_json::Value = api.get("/api/ping", RequestConfig::default()).await.unwrap();

    assert_eq!(value["data"]["ok"], serde_json::json!(true));
    assert_eq!(store.access_token().await.as_deref(), Some("T2"));
    assert_eq!(store.refresh_token().await.as_deref(), Some("R2"));
    assert_eq!(server.hits("/api/ping"), 2);
    assert_eq!(server.hits(REFRESH_PATH), 1);

    // The refresh call sends the refresh token and no bearer header.
    let refresh = server
        .requests()
        .into_iter()
        .find(|r| r.path == REFRESH_PATH)
        .unwrap();
    assert!(refresh.body.contains(r#""refreshToken":"R1""#));
    assert_eq!(refresh.authorization, None);
}

#[tokio::test]
async fn test_keeps_old_refresh_token_when_none_is_rotated() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (200, r#"{"data":{"accessToken":"T2"}}"#.to_string())
        } else if req.authorization.as_deref() == Some("Bearer T2") {
            (200, OK_BODY.to_string())
        } else {
            (401, String::new())
        }
    })
    .await;
    let store = seeded_store();
    let api = client(&server, &store);

    let _: serde_json::Value = api.get("/api/ping", RequestConfig::default()).await.unwrap();

    assert_eq!(store.access_token().await.as_deref(), Some("T2"));
    assert_eq!(store.refresh_token().await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_failed_refresh_clears_tokens_without_retry() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (500, r#"{"error":"refresh backend down"}"#.to_string())
        } else {
            (401, String::new())
        }
    })
    .await;
    let store = seeded_store();
    let api = client(&server, &store);

    let outcome: Result<serde_json::Value, ApiError> =
        api.get("/api/ping", RequestConfig::default()).await;

    assert!(matches!(outcome, Err(ApiError::AuthExpired)));
    assert_eq!(store.access_token().await, None);
    assert_eq!(store.refresh_token().await, None);
    assert_eq!(server.hits("/api/ping"), 1);
}

#[tokio::test]
async fn test_unauthenticated_401_skips_refresh() {
    let server = MockServer::start(|_| (401, String::new())).await;
    let store = Arc::new(MemorySessionStore::new());
    let api = client(&server, &store);

    let outcome: Result<serde_json::Value, ApiError> =
        api.get("/api/ping", RequestConfig::default()).await;

    assert!(matches!(outcome, Err(ApiError::Status { status: 401, .. })));
    assert_eq!(server.hits("/api/ping"), 1);
    assert_eq!(server.hits(REFRESH_PATH), 0);
}

/// Store with an access token but no refresh token, as a partially
/// corrupted session file would produce.
#[derive(Default)]
struct AccessOnlyStore {
    cleared: AtomicBool,
}

impl TokenStore for AccessOnlyStore {
    async fn store_tokens(&self, _access: &str, _refresh: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn clear_tokens(&self) {
        self.cleared.store(true, Ordering::SeqCst);
    }

    async fn access_token(&self) -> Option<String> {
        if self.cleared.load(Ordering::SeqCst) {
            None
        } else {
            Some("T1".to_string())
        }
    }

    async fn refresh_token(&self) -> Option<String> {
        None
    }
}

#[tokio::test]
async fn test_missing_refresh_token_expires_without_refresh_call() {
    let server = MockServer::start(|_| (401, String::new())).await;
    let store = Arc::new(AccessOnlyStore::default());
    let api = HttpApiClient::new(server.base_url(), Arc::clone(&store)).unwrap();

    let outcome: Result<serde_json::Value, ApiError> =
        api.get("/api/ping", RequestConfig::default()).await;

    assert!(matches!(outcome, Err(ApiError::AuthExpired)));
    assert!(store.cleared.load(Ordering::SeqCst));
    assert_eq!(server.hits("/api/ping"), 1);
    assert_eq!(server.hits(REFRESH_PATH), 0);
}

/// Store whose reads work but whose writes always fail, as a full disk
/// would produce.
struct ReadOnlyStore;

impl TokenStore for ReadOnlyStore {
    async fn store_tokens(&self, _access: &str, _refresh: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk full".to_string()))
    }

    async fn clear_tokens(&self) {}

    async fn access_token(&self) -> Option<String> {
        Some("T1".to_string())
    }

    async fn refresh_token(&self) -> Option<String> {
        Some("R1".to_string())
    }
}

#[tokio::test]
async fn test_retry_carries_fresh_token_even_when_persistence_fails() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (200, REFRESHED_BODY.to_string())
        } else if req.authorization.as_deref() == Some("Bearer T2") {
            (200, OK_BODY.to_string())
        } else {
            (401, String::new())
        }
    })
    .await;
    let api = HttpApiClient::new(server.base_url(), Arc::new(ReadOnlyStore)).unwrap();

    let value: serde_json::Value = api.get("/api/ping", RequestConfig::default()).await.unwrap();

    assert_eq!(value["data"]["ok"], serde_json::json!(true));
    let retried = server
        .requests()
        .into_iter()
        .filter(|r| r.path == "/api/ping")
        .next_back()
        .unwrap();
    assert_eq!(retried.authorization.as_deref(), Some("Bearer T2"));
}

#[tokio::test]
async fn test_concurrent_401s_both_expire_when_refresh_fails() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (500, String::new())
        } else {
            (401, String::new())
        }
    })
    .await;
    let store = seeded_store();
    let api = client(&server, &store);

    let (a, b): (
        Result<serde_json::Value, ApiError>,
        Result<serde_json::Value, ApiError>,
    ) = tokio::join!(
        api.get("/api/a", RequestConfig::default()),
        api.get("/api/b", RequestConfig::default()),
    );

    // The caller that finds the store cleared by the failed refresh must
    // also report an expired session, not a bare 401.
    assert!(matches!(a, Err(ApiError::AuthExpired)));
    assert!(matches!(b, Err(ApiError::AuthExpired)));
    assert_eq!(server.hits(REFRESH_PATH), 1);
    assert_eq!(store.access_token().await, None);
}

#[tokio::test]
async fn test_second_401_after_refresh_surfaces_status() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (200, REFRESHED_BODY.to_string())
        } else {
            (401, r#"{"error":"still unauthorized"}"#.to_string())
        }
    })
    .await;
    let api = client(&server, &seeded_store());

    let outcome: Result<serde_json::Value, ApiError> =
        api.get("/api/ping", RequestConfig::default()).await;

    assert!(matches!(outcome, Err(ApiError::Status { status: 401, .. })));
    assert_eq!(server.hits("/api/ping"), 2);
    assert_eq!(server.hits(REFRESH_PATH), 1);
}

#[tokio::test]
async fn test_non_401_error_passes_through() {
    let server = MockServer::start(|_| (500, "boom".to_string())).await;
    let api = client(&server, &seeded_store());

    let outcome: Result<serde_json::Value, ApiError> =
        api.get("/api/ping", RequestConfig::default()).await;

    match outcome {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(server.hits(REFRESH_PATH), 0);
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let server = MockServer::start(|req| {
        if req.path == REFRESH_PATH {
            (200, REFRESHED_BODY.to_string())
        } else if req.authorization.as_deref() == Some("Bearer T2") {
            (200, OK_BODY.to_string())
        } else {
            (401, String::new())
        }
    })
    .await;
    let store = seeded_store();
    let api = client(&server, &store);

    let (a, b): (
        Result<serde_json::Value, ApiError>,
        Result<serde_json::Value, ApiError>,
    ) = tokio::join!(
        api.get("/api/a", RequestConfig::default()),
        api.get("/api/b", RequestConfig::default()),
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(server.hits(REFRESH_PATH), 1);
    assert_eq!(store.access_token().await.as_deref(), Some("T2"));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start(|_| (201, OK_BODY.to_string())).await;
    let api = client(&server, &seeded_store());

    let body = serde_json::json!({"name": "Laptop"});
    let _: serde_json::Value = api
        .post("/api/things", &body, RequestConfig::default())
        .await
        .unwrap();

    let request = server.requests()[0].clone();
    assert_eq!(request.method, "POST");
    assert!(request.body.contains(r#""name":"Laptop""#));
}

#[tokio::test]
async fn test_undecodable_success_body_is_invalid_response() {
    let server = MockServer::start(|_| (200, "not json".to_string())).await;
    let api = client(&server, &seeded_store());

    let outcome: Result<serde_json::Value, ApiError> =
        api.get("/api/ping", RequestConfig::default()).await;

    assert!(matches!(outcome, Err(ApiError::InvalidResponse(_))));
}
