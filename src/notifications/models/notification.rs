use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{app::util::time, notifications::dtos::create_notification_dto::CreateNotificationDto};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<sqlx::types::Json<serde_json::Value>>,
    pub read: bool,
    pub created_at: i64,
}

impl Notification {
    pub fn new(dto: &CreateNotificationDto) -> Self {
        return Self {
            id: Uuid::new_v4().to_string(),
            user_id: dto.user_id.to_string(),
            kind: dto.kind.to_string(),
            title: dto.title.to_string(),
            message: dto.message.to_string(),
            data: dto.data.clone().map(sqlx::types::Json),
            read: false,
            created_at: time::current_time_in_secs() as i64,
        };
    }
}
