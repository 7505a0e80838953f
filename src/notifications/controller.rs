use std::sync::Arc;

use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::models::{
        api_error::ApiError,
        api_response::ApiResponse,
        from_request::{HeaderFromRequest, PathFromRequest, QueryFromRequest},
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::get_notifications_filter_dto::GetNotificationsFilterDto,
    models::notifications_page::{NotificationData, NotificationsPage},
    service,
};

pub async fn get_notifications(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
    QueryFromRequest(dto): QueryFromRequest<GetNotificationsFilterDto>,
) -> Result<Json<ApiResponse<NotificationsPage>>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            if let Err(e) = dto.validate() {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: e.to_string(),
                });
            }

            match service::get_notifications(&dto, &claims, state.store.as_ref()).await {
                Ok(page) => {
                    let has_more = page.has_more;
                    Ok(Json(ApiResponse::paginated(page, has_more)))
                }
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn mark_notification_read_by_id(
    State(state): State<Arc<AppState>>,
    PathFromRequest(id): PathFromRequest<String>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
) -> Result<Json<ApiResponse<NotificationData>>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            match service::mark_notification_read_by_id(&id, &claims, state.store.as_ref()).await
            {
                Ok(notification) => Ok(Json(ApiResponse::data(NotificationData { notification }))),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn mark_all_notifications_read(
    State(state): State<Arc<AppState>>,
    HeaderFromRequest(authorization): HeaderFromRequest<Authorization<Bearer>>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    match Claims::from_header(authorization, &state.envy.jwt_secret) {
        Ok(claims) => {
            match service::mark_all_notifications_read(&claims, state.store.as_ref()).await {
                Ok(_) => Ok(Json(ApiResponse::message(
                    "All notifications marked as read.",
                ))),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}
