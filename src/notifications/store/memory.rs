use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::notifications::models::{
    notification::Notification,
    notification_filter::{NotificationFilter, Pagination},
};

use super::{NotificationStore, StoreError};

/// Process-local store for tests and local runs without a database.
#[derive(Default)]
pub struct MemoryNotificationStore {
    notifications: RwLock<Vec<Notification>>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

fn newest_first(a: &Notification, b: &Notification) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

fn matches(filter: &NotificationFilter, n: &Notification) -> bool {
    filter.matches(&n.user_id, &n.kind, n.read)
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn insert(&self, notification: &Notification) -> Result<(), StoreError> {
        self.notifications.write().await.push(notification.clone());

        Ok(())
    }

    async fn find(
        &self,
        filter: &NotificationFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Notification>, StoreError> {
        let notifications = self.notifications.read().await;

        let mut matching: Vec<&Notification> =
            notifications.iter().filter(|n| matches(filter, n)).collect();
        matching.sort_by(|a, b| newest_first(a, b));

        Ok(matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &NotificationFilter) -> Result<i64, StoreError> {
        let notifications = self.notifications.read().await;

        Ok(notifications.iter().filter(|n| matches(filter, n)).count() as i64)
    }

    async fn mark_read(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Notification>, StoreError> {
        let mut notifications = self.notifications.write().await;

        let found = notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
            .map(|n| {
                n.read = true;
                n.clone()
            });

        Ok(found)
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError> {
        let mut notifications = self.notifications.write().await;
        let mut updated = 0;

        for n in notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.read)
        {
            n.read = true;
            updated += 1;
        }

        Ok(updated)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
