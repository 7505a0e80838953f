use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    InvalidToken,
    ExpiredToken,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid token.".to_string(),
            },
            Self::ExpiredToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Token expired.".to_string(),
            },
        }
    }
}
