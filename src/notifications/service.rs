use axum::http::StatusCode;
use validator::Validate;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::{
        create_notification_dto::CreateNotificationDto,
        get_notifications_filter_dto::GetNotificationsFilterDto,
    },
    errors::NotificationsApiError,
    models::{
        notification::Notification, notification_filter::NotificationFilter,
        notifications_page::NotificationsPage,
    },
    store::{NotificationStore, StoreError},
};

fn internal_error(e: StoreError) -> ApiError {
    tracing::error!(%e);
    DefaultApiError::InternalServerError.value()
}

pub async fn create_notification_as_admin(
    dto: &CreateNotificationDto,
    store: &dyn NotificationStore,
) -> Result<Notification, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let notification = Notification::new(dto);

    match store.insert(&notification).await {
        Ok(_) => Ok(notification),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn get_notifications(
    dto: &GetNotificationsFilterDto,
    claims: &Claims,
    store: &dyn NotificationStore,
) -> Result<NotificationsPage, ApiError> {
    let filter = dto.to_filter(&claims.id);
    let pagination = dto.to_pagination();

    // unread count ignores the type filter and pagination
    let unread_filter = NotificationFilter::unread_for_user(&claims.id);

    let result = tokio::try_join!(
        store.find(&filter, &pagination),
        store.count(&unread_filter),
    );

    match result {
        Ok((notifications, unread_count)) => Ok(NotificationsPage {
            has_more: notifications.len() == pagination.limit as usize,
            notifications,
            unread_count,
        }),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn mark_notification_read_by_id(
    id: &str,
    claims: &Claims,
    store: &dyn NotificationStore,
) -> Result<Notification, ApiError> {
    match store.mark_read(id, &claims.id).await {
        Ok(notification) => match notification {
            Some(notification) => Ok(notification),
            None => Err(NotificationsApiError::NotificationNotFound.value()),
        },
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn mark_all_notifications_read(
    claims: &Claims,
    store: &dyn NotificationStore,
) -> Result<(), ApiError> {
    match store.mark_all_read(&claims.id).await {
        Ok(updated) => {
            tracing::debug!("marked {} notification(s) read for {}", updated, claims.id);
            Ok(())
        }
        Err(e) => Err(internal_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::store::memory::MemoryNotificationStore;

    fn claims(id: &str) -> Claims {
        Claims {
            id: id.to_string(),
            iat: 0,
            exp: u64::MAX,
        }
    }

    fn notification(id: &str, user_id: &str, kind: &str, created_at: i64) -> Notification {
        Notification {
            id: id.to_string(),
            user_id: user_id.to_string(),
            kind: kind.to_string(),
            title: "title".to_string(),
            message: "message".to_string(),
            data: None,
            read: false,
            created_at,
        }
    }

    fn seeded_store() -> MemoryNotificationStore {
        MemoryNotificationStore::with_notifications(vec![
            notification("n1", "alice", "badge", 1),
            notification("n2", "alice", "challenge", 2),
            notification("n3", "alice", "challenge", 3),
            notification("n4", "bob", "badge", 4),
        ])
    }

    #[tokio::test]
    async fn listing_only_returns_callers_notifications() {
        let store = seeded_store();

        let page = get_notifications(&GetNotificationsFilterDto::default(), &claims("alice"), &store)
            .await
            .unwrap();

        assert_eq!(page.notifications.len(), 3);
        assert!(page.notifications.iter().all(|n| n.user_id == "alice"));
        assert_eq!(page.notifications[0].id, "n3");
    }

    #[tokio::test]
    async fn unread_count_ignores_type_filter() {
        let store = seeded_store();
        let dto = GetNotificationsFilterDto {
            kind: Some("badge".to_string()),
            ..Default::default()
        };

        let page = get_notifications(&dto, &claims("alice"), &store).await.unwrap();

        assert_eq!(page.notifications.len(), 1);
        assert_eq!(page.unread_count, 3);
    }

    #[tokio::test]
    async fn has_more_is_true_when_page_is_exactly_full() {
        let store = MemoryNotificationStore::with_notifications(
            (0..20)
                .map(|i| notification(&format!("n{:02}", i), "alice", "eco", i))
                .collect(),
        );
        let dto = GetNotificationsFilterDto {
            limit: Some(20),
            ..Default::default()
        };

        let page = get_notifications(&dto, &claims("alice"), &store).await.unwrap();

        assert_eq!(page.notifications.len(), 20);
        assert!(page.has_more);

        let dto = GetNotificationsFilterDto {
            page: Some(2),
            limit: Some(20),
            ..Default::default()
        };
        let page = get_notifications(&dto, &claims("alice"), &store).await.unwrap();

        assert!(page.notifications.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn mark_read_on_foreign_notification_is_not_found() {
        let store = seeded_store();

        let e = mark_notification_read_by_id("n4", &claims("alice"), &store)
            .await
            .unwrap_err();
        assert_eq!(e.code, StatusCode::NOT_FOUND);

        let e = mark_notification_read_by_id("missing", &claims("alice"), &store)
            .await
            .unwrap_err();
        assert_eq!(e.code, StatusCode::NOT_FOUND);

        let count = store
            .count(&NotificationFilter::unread_for_user("bob"))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn mark_read_returns_updated_notification() {
        let store = seeded_store();

        let notification = mark_notification_read_by_id("n2", &claims("alice"), &store)
            .await
            .unwrap();

        assert_eq!(notification.id, "n2");
        assert!(notification.read);
    }

    #[tokio::test]
    async fn mark_all_read_is_idempotent() {
        let store = seeded_store();
        let alice = claims("alice");

        mark_all_notifications_read(&alice, &store).await.unwrap();
        let unread = NotificationFilter::unread_for_user("alice");
        assert_eq!(store.count(&unread).await.unwrap(), 0);

        assert_eq!(store.mark_all_read("alice").await.unwrap(), 0);
        mark_all_notifications_read(&alice, &store).await.unwrap();
        assert_eq!(store.count(&unread).await.unwrap(), 0);

        let bob_unread = NotificationFilter::unread_for_user("bob");
        assert_eq!(store.count(&bob_unread).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_validates_and_inserts_unread() {
        let store = MemoryNotificationStore::new();
        let dto = CreateNotificationDto {
            user_id: "alice".to_string(),
            kind: "badge".to_string(),
            title: "New badge".to_string(),
            message: "You earned Tree Hugger.".to_string(),
            data: None,
        };

        let notification = create_notification_as_admin(&dto, &store).await.unwrap();
        assert!(!notification.read);
        assert_eq!(
            store
                .count(&NotificationFilter::unread_for_user("alice"))
                .await
                .unwrap(),
            1
        );

        let invalid = CreateNotificationDto {
            title: String::new(),
            ..dto
        };
        let e = create_notification_as_admin(&invalid, &store).await.unwrap_err();
        assert_eq!(e.code, StatusCode::BAD_REQUEST);
    }
}
