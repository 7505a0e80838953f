use axum::{
    extract::rejection::{
        PathRejection, QueryRejection, TypedHeaderRejection, TypedHeaderRejectionReason,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Stable machine-readable code derived from the status, e.g. `NOT_FOUND`.
    pub fn error_code(&self) -> String {
        match self.code.canonical_reason() {
            Some(reason) => reason
                .chars()
                .map(|c| match c {
                    ' ' | '-' => '_',
                    c => c.to_ascii_uppercase(),
                })
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect(),
            None => self.code.as_u16().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.message,
            "code": self.error_code(),
        }));

        (self.code, body).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self {
            code: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<TypedHeaderRejection> for ApiError {
    fn from(rejection: TypedHeaderRejection) -> Self {
        let message = match rejection.reason() {
            TypedHeaderRejectionReason::Missing => {
                format!("Missing {} header.", rejection.name())
            }
            _ => format!("Malformed {} header.", rejection.name()),
        };

        Self {
            code: StatusCode::UNAUTHORIZED,
            message,
        }
    }
}
