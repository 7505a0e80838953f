use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum NotificationsApiError {
    NotificationNotFound,
}

impl NotificationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NotificationNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Notification not found.".to_string(),
            },
        }
    }
}
