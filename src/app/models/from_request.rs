use axum::{
    extract::{Path, Query},
    TypedHeader,
};
use axum_macros::FromRequestParts;

use super::api_error::ApiError;

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct QueryFromRequest<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(TypedHeader), rejection(ApiError))]
pub struct HeaderFromRequest<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathFromRequest<T>(pub T);
