pub mod create_notification_dto;
pub mod get_notifications_filter_dto;
