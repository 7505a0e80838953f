use std::sync::Arc;

use serde::Serialize;

use crate::AppState;

use super::{models::api_response::ApiResponse, util::time};

#[derive(Debug, Serialize)]
pub struct Health {
    pub environment: String,
    pub store: &'static str,
    pub timestamp: u64,
}

pub async fn get_health(state: &Arc<AppState>) -> ApiResponse<Health> {
    let store = match state.store.ping().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!("store ping failed: {}", e);
            "unreachable"
        }
    };

    ApiResponse {
        message: Some("Greenstagram API is running.".to_string()),
        ..ApiResponse::data(Health {
            environment: state.envy.app_env.to_string(),
            store,
            timestamp: time::current_time_in_secs(),
        })
    }
}
