use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotificationDto {
    #[validate(length(min = 1, message = "user_id must not be empty."))]
    pub user_id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 64, message = "type must be between 1 and 64 characters."))]
    pub kind: String,
    #[validate(length(
        min = 1,
        max = 256,
        message = "title must be between 1 and 256 characters."
    ))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 2048,
        message = "message must be between 1 and 2048 characters."
    ))]
    pub message: String,
    pub data: Option<serde_json::Value>,
}
