pub mod notification;
pub mod notification_filter;
pub mod notifications_page;
