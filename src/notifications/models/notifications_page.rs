use serde::Serialize;

use super::notification::Notification;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    pub notifications: Vec<Notification>,
    pub unread_count: i64,
    #[serde(skip)]
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct NotificationData {
    pub notification: Notification,
}
