use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, put},
    BoxError, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    app::{env::Envy, errors::DefaultApiError},
    notifications::store::NotificationStore,
};

pub mod app;
pub mod auth;
pub mod db;
pub mod notifications;

pub struct AppState {
    pub store: Arc<dyn NotificationStore>,
    pub envy: Arc<Envy>,
}

fn cors(envy: &Envy) -> CorsLayer {
    let origin = match &envy.frontend_url {
        Some(url) => match HeaderValue::from_str(url) {
            Ok(value) => AllowOrigin::exact(value),
            Err(e) => {
                tracing::warn!("ignoring invalid FRONTEND_URL {}: {}", url, e);
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::PUT])
}

/// Routes, fallback, CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors(&state.envy);

    Router::new()
        .route("/health", get(app::controller::get_health))
        // notifications
        .route(
            "/notifications",
            get(notifications::controller::get_notifications),
        )
        .route(
            "/notifications/read-all",
            put(notifications::controller::mark_all_notifications_read),
        )
        .route(
            "/notifications/:id/read",
            put(notifications::controller::mark_notification_read_by_id),
        )
        .fallback(app::controller::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bounds inbound load to `requests` per `per`, queueing up to 1024 callers.
pub fn rate_limited(router: Router, requests: u64, per: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|e: BoxError| async move {
                tracing::error!("rate limit layer failed: {}", e);
                DefaultApiError::InternalServerError.value()
            }))
            .buffer(1024)
            .rate_limit(requests, per),
    )
}
