use async_trait::async_trait;

use super::models::{
    notification::Notification,
    notification_filter::{NotificationFilter, Pagination},
};

pub mod memory;
pub mod postgres;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence backend for notifications.
///
/// Results of `find` are ordered by `created_at` descending, then `id`
/// descending. Every operation is scoped to a single owner.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert(&self, notification: &Notification) -> Result<(), StoreError>;

    async fn find(
        &self,
        filter: &NotificationFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Notification>, StoreError>;

    async fn count(&self, filter: &NotificationFilter) -> Result<i64, StoreError>;

    /// Sets `read` on the notification only if `user_id` owns it.
    async fn mark_read(&self, id: &str, user_id: &str)
        -> Result<Option<Notification>, StoreError>;

    /// Returns the number of notifications that changed.
    async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
