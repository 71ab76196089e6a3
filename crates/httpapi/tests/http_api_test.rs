//! Integration tests for the REST adapter.
//!
//! The router runs in-process over the real in-memory engines; only the
//! credential store is replaced with a test double.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use adcore::{
    AdManager, CredentialManager, CredentialStore, InMemoryAdRepository, InMemoryUserRepository,
    UserManager,
};
use common::Envelope;
use domain::{Credential, DomainError, DomainResult};
use httpapi::presenters::{AdResponse, CredentialResponse, UserResponse};
use httpapi::routes::create_router;
use httpapi::state::AppState;

// =============================================================================
// Credential store double
// =============================================================================

#[derive(Default)]
struct StubCredentialStore {
    rows: Mutex<HashMap<i64, Credential>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl CredentialStore for StubCredentialStore {
    async fn create(&self, mut credential: Credential) -> DomainResult<i64> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        credential.id = *next;
        self.rows.lock().unwrap().insert(*next, credential);
        Ok(*next)
    }

    async fn find_by_login(
        &self,
        username: &str,
        password_hash: &str,
    ) -> DomainResult<Credential> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|c| c.username == username && c.password_hash == password_hash)
            .cloned()
            .ok_or_else(|| DomainError::not_found("credential"))
    }

    async fn find_by_id(&self, credential_id: i64) -> DomainResult<Credential> {
        self.rows
            .lock()
            .unwrap()
            .get(&credential_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("credential"))
    }

    async fn update_username(
        &self,
        username: String,
        credential_id: i64,
    ) -> DomainResult<Credential> {
        let mut rows = self.rows.lock().unwrap();
        let credential = rows
            .get_mut(&credential_id)
            .ok_or_else(|| DomainError::not_found("credential"))?;
        credential.username = username;
        Ok(credential.clone())
    }

    async fn delete(&self, credential_id: i64) -> DomainResult<Credential> {
        self.rows
            .lock()
            .unwrap()
            .remove(&credential_id)
            .ok_or_else(|| DomainError::not_found("credential"))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn router() -> Router {
    let state = AppState::new(
        Arc::new(AdManager::new(Arc::new(InMemoryAdRepository::new()))),
        Arc::new(UserManager::new(Arc::new(InMemoryUserRepository::new()))),
        Arc::new(CredentialManager::new(Arc::new(
            StubCredentialStore::default(),
        ))),
    );
    create_router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn create_user(app: &Router, nickname: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/user",
        Some(json!({ "nickname": nickname, "email": format!("{nickname}@example.com") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let envelope: Envelope<UserResponse> = serde_json::from_value(body).unwrap();
    envelope.data.unwrap().user_id
}

async fn create_ad(app: &Router, title: &str, text: &str, user_id: i64) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/ads",
        Some(json!({ "title": title, "text": text, "user_id": user_id })),
    )
    .await
}

// =============================================================================
// User endpoints
// =============================================================================

#[tokio::test]
async fn user_create_and_fetch_round_trip() {
    let app = router();

    let id = create_user(&app, "gopher").await;
    assert_eq!(id, 0);

    let (status, body) = send(&app, Method::GET, "/api/v1/user/0", None).await;
    assert_eq!(status, StatusCode::OK);

    let envelope: Envelope<UserResponse> = serde_json::from_value(body).unwrap();
    let user = envelope.data.unwrap();
    assert_eq!(user.nickname, "gopher");
    assert!(!user.activate);
}

#[tokio::test]
async fn empty_nickname_is_rejected() {
    let app = router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/user",
        Some(json!({ "nickname": "", "email": "a@b.c" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn missing_user_is_a_404() {
    let app = router();

    let (status, _) = send(&app, Method::GET, "/api/v1/user/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_update_and_delete_flow() {
    let app = router();
    create_user(&app, "gopher").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/user/update/0",
        Some(json!({ "nickname": "ferris", "email": "ferris@rust.org", "activate": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let envelope: Envelope<UserResponse> = serde_json::from_value(body).unwrap();
    assert!(envelope.data.unwrap().activate);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/user/delete/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user_id"], 0);

    // second delete fails the existence precondition
    let (status, _) = send(&app, Method::DELETE, "/api/v1/user/delete/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Ad endpoints
// =============================================================================

#[tokio::test]
async fn ad_requires_registered_author() {
    let app = router();

    let (status, body) = create_ad(&app, "best cat", "not for sale", 5).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn publish_and_list_flow() {
    let app = router();
    let author = create_user(&app, "gopher").await;

    let (status, body) = create_ad(&app, "best cat", "not for sale", author).await;
    assert_eq!(status, StatusCode::OK);
    let envelope: Envelope<AdResponse> = serde_json::from_value(body).unwrap();
    let ad = envelope.data.unwrap();
    assert_eq!(ad.id, 0);
    assert!(!ad.published);
    assert_eq!(ad.create_date, ad.update_date);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/ads/0/status",
        Some(json!({ "published": true, "user_id": author })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["published"], true);

    let (status, body) = send(&app, Method::GET, "/api/v1/ads", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/ads?filter=author&author_id={author}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ads = body["data"].as_array().unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0]["published"], true);
    assert_eq!(ads[0]["title"], "best cat");
}

#[tokio::test]
async fn invalid_ad_fields_are_rejected() {
    let app = router();
    let author = create_user(&app, "gopher").await;

    let (status, _) = create_ad(&app, "", "not for sale", author).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long_title = "a".repeat(101);
    let (status, _) = create_ad(&app, &long_title, "not for sale", author).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn foreign_mutations_are_forbidden() {
    let app = router();
    let author = create_user(&app, "gopher").await;
    let stranger = create_user(&app, "ferris").await;
    create_ad(&app, "best cat", "not for sale", author).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/ads/0/status",
        Some(json!({ "published": true, "user_id": stranger })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/ads/0",
        Some(json!({ "title": "mine now", "text": "stolen", "user_id": stranger })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/api/v1/ads/delete/0",
        Some(json!({ "user_id": stranger })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn author_can_delete_their_ad() {
    let app = router();
    let author = create_user(&app, "gopher").await;
    create_ad(&app, "best cat", "not for sale", author).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/v1/ads/delete/0",
        Some(json!({ "user_id": author })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 0);

    // the single-ad lookup deliberately answers 400 for a missing ad
    let (status, _) = send(&app, Method::GET, "/api/v1/ads?ad_id=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unparsable_identifiers_are_bad_requests() {
    let app = router();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/ads/abc/status",
        Some(json!({ "published": true, "user_id": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::GET, "/api/v1/ads?ad_id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_feed_answers_bad_request() {
    let app = router();

    // the published listing remaps the engine's empty-result NotFound
    let (status, _) = send(&app, Method::GET, "/api/v1/ads", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_includes_drafts_and_misses_answer_404() {
    let app = router();
    let author = create_user(&app, "gopher").await;
    create_ad(&app, "best cat", "not for sale", author).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/ads/search?title=best", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/api/v1/ads/search?title=dog", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Credential endpoints
// =============================================================================

#[tokio::test]
async fn credential_lifecycle_over_http() {
    let app = router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/sign-up",
        Some(json!({ "name": "Gopher", "username": "gopher", "password": "qwerty123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let envelope: Envelope<CredentialResponse> = serde_json::from_value(body).unwrap();
    let credential = envelope.data.unwrap();
    assert_eq!(credential.id, 1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/sign-in",
        Some(json!({ "username": "gopher", "password": "qwerty123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/sign-in",
        Some(json!({ "username": "gopher", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/update-user",
        Some(json!({ "username": "ferris", "id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "ferris");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/check-user",
        Some(json!({ "id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/delete-user",
        Some(json!({ "id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/check-user",
        Some(json!({ "id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
