use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;

use super::{
    errors::DefaultApiError,
    models::{api_error::ApiError, api_response::ApiResponse},
    service::{self, Health},
};

pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Health>> {
    Json(service::get_health(&state).await)
}

pub async fn not_found() -> ApiError {
    DefaultApiError::RouteNotFound.value()
}
