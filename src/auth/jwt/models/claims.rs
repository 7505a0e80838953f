use axum::headers::{authorization::Bearer, Authorization};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError,
    auth::{errors::AuthApiError, jwt::util::decode_jwt},
};

/// Verified identity of the caller, passed explicitly into services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    pub fn from_header(
        authorization: Authorization<Bearer>,
        secret: &str,
    ) -> Result<Self, ApiError> {
        match decode_jwt(authorization.token(), secret) {
            Ok(claims) => Ok(claims),
            Err(ErrorKind::ExpiredSignature) => Err(AuthApiError::ExpiredToken.value()),
            Err(_) => Err(AuthApiError::InvalidToken.value()),
        }
    }
}
