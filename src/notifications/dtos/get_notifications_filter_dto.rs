use serde::Deserialize;
use validator::Validate;

use crate::notifications::models::notification_filter::{NotificationFilter, Pagination};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct GetNotificationsFilterDto {
    #[validate(range(min = 1, message = "page must be 1 or greater."))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    #[validate(length(max = 64, message = "type must be at most 64 characters."))]
    pub kind: Option<String>,
}

impl GetNotificationsFilterDto {
    pub fn to_filter(&self, user_id: &str) -> NotificationFilter {
        // an empty type means no filter
        let kind = self.kind.clone().filter(|k| !k.is_empty());

        NotificationFilter::for_user(user_id).with_kind(kind)
    }

    pub fn to_pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}
