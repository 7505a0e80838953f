use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use greenstagram_api::{
    app::env::Envy,
    auth::jwt::util::sign_jwt,
    notifications::{models::notification::Notification, store::memory::MemoryNotificationStore},
    rate_limited, router, AppState,
};

const SECRET: &str = "notifications-api-secret";

fn envy() -> Envy {
    Envy {
        app_env: "test".to_string(),
        frontend_url: None,
        port: None,
        database_url: None,
        database_connection_string: None,
        jwt_secret: SECRET.to_string(),
    }
}

fn notification(id: &str, user_id: &str, kind: &str, created_at: i64) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: user_id.to_string(),
        kind: kind.to_string(),
        title: "Challenge update".to_string(),
        message: "Something happened.".to_string(),
        data: None,
        read: false,
        created_at,
    }
}

fn app(notifications: Vec<Notification>) -> Router {
    let state = AppState {
        store: Arc::new(MemoryNotificationStore::with_notifications(notifications)),
        envy: Arc::new(envy()),
    };

    router(Arc::new(state))
}

fn request(method: Method, uri: &str, user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(user_id) = user_id {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", sign_jwt(user_id, SECRET)));
    }

    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();

    let body = hyper::body::to_bytes(response.into_body())
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse json");

    (status, json)
}

#[tokio::test]
async fn unmatched_route_returns_not_found_envelope() {
    let app = app(vec![]);

    let (status, body) = send(&app, request(Method::GET, "/nonexistent", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn listing_requires_bearer_token() {
    let app = app(vec![]);

    let (status, body) = send(&app, request(Method::GET, "/notifications", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn listing_rejects_token_with_wrong_secret() {
    let app = app(vec![]);
    let token = sign_jwt("alice", "some-other-secret");
    let request = Request::builder()
        .uri("/notifications")
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token.");
}

#[tokio::test]
async fn listing_returns_envelope_with_unread_count_and_has_more() {
    let app = app(vec![
        notification("n1", "alice", "badge", 1),
        notification("n2", "alice", "challenge", 2),
        notification("n3", "bob", "challenge", 3),
    ]);

    let (status, body) = send(
        &app,
        request(Method::GET, "/notifications?type=challenge&limit=1", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let notifications = body["data"]["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["id"], "n2");
    assert_eq!(notifications[0]["userId"], "alice");
    assert_eq!(notifications[0]["type"], "challenge");
    assert_eq!(notifications[0]["read"], false);
    assert_eq!(body["data"]["unreadCount"], 2);
    assert_eq!(body["pagination"]["hasMore"], true);
}

#[tokio::test]
async fn listing_rejects_page_zero() {
    let app = app(vec![]);

    let (status, body) = send(
        &app,
        request(Method::GET, "/notifications?page=0", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn listing_rejects_malformed_limit() {
    let app = app(vec![]);

    let (status, body) = send(
        &app,
        request(Method::GET, "/notifications?limit=many", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn listing_treats_empty_type_as_unfiltered() {
    let app = app(vec![
        notification("n1", "alice", "badge", 1),
        notification("n2", "alice", "challenge", 2),
    ]);

    let (status, body) = send(
        &app,
        request(Method::GET, "/notifications?type=", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["notifications"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn mark_read_rejects_undecodable_id_with_envelope() {
    let app = app(vec![]);

    let (status, body) = send(
        &app,
        request(Method::PUT, "/notifications/%FF/read", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn mark_read_updates_own_notification() {
    let app = app(vec![notification("n1", "alice", "badge", 1)]);

    let (status, body) = send(
        &app,
        request(Method::PUT, "/notifications/n1/read", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["notification"]["id"], "n1");
    assert_eq!(body["data"]["notification"]["read"], true);

    let (_, body) = send(&app, request(Method::GET, "/notifications", Some("alice"))).await;
    assert_eq!(body["data"]["unreadCount"], 0);
}

#[tokio::test]
async fn mark_read_hides_other_users_notifications() {
    let app = app(vec![notification("n1", "bob", "badge", 1)]);

    let (status, body) = send(
        &app,
        request(Method::PUT, "/notifications/n1/read", Some("alice")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());

    let (missing_status, missing_body) = send(
        &app,
        request(Method::PUT, "/notifications/does-not-exist/read", Some("alice")),
    )
    .await;

    assert_eq!(missing_status, status);
    assert_eq!(missing_body, body);

    let (_, body) = send(&app, request(Method::GET, "/notifications", Some("bob"))).await;
    assert_eq!(body["data"]["unreadCount"], 1);
}

#[tokio::test]
async fn mark_all_read_is_idempotent() {
    let app = app(vec![
        notification("n1", "alice", "badge", 1),
        notification("n2", "alice", "challenge", 2),
        notification("n3", "bob", "challenge", 3),
    ]);

    for _ in 0..2 {
        let (status, body) = send(
            &app,
            request(Method::PUT, "/notifications/read-all", Some("alice")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "All notifications marked as read.");

        let (_, body) = send(&app, request(Method::GET, "/notifications", Some("alice"))).await;
        assert_eq!(body["data"]["unreadCount"], 0);
    }

    let (_, body) = send(&app, request(Method::GET, "/notifications", Some("bob"))).await;
    assert_eq!(body["data"]["unreadCount"], 1);
}

#[tokio::test]
async fn health_reports_environment_and_store() {
    let app = app(vec![]);

    let (status, body) = send(&app, request(Method::GET, "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["environment"], "test");
    assert_eq!(body["data"]["store"], "ok");
}

#[tokio::test]
async fn rate_limited_router_queues_and_keeps_envelopes() {
    let app = rate_limited(
        app(vec![notification("n1", "alice", "badge", 1)]),
        2,
        Duration::from_millis(50),
    );

    for _ in 0..3 {
        let (status, body) = send(&app, request(Method::GET, "/notifications", Some("alice"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["unreadCount"], 1);
    }

    let (status, body) = send(&app, request(Method::GET, "/nonexistent", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
