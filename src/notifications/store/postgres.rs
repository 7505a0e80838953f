use async_trait::async_trait;
use sqlx::PgPool;

use crate::notifications::models::{
    notification::Notification,
    notification_filter::{NotificationFilter, Pagination},
};

use super::{NotificationStore, StoreError};

#[derive(Clone)]
pub struct PgNotificationStore {
    pool: PgPool,
}

impl PgNotificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub fn find_sql(filter: &NotificationFilter) -> String {
    let (where_clause, index) = filter.to_sql_where();

    [
        "SELECT * FROM notifications",
        &where_clause,
        " ORDER BY created_at DESC, id DESC",
        " LIMIT $",
        &index.to_string(),
        " OFFSET $",
        &(index + 1).to_string(),
    ]
    .concat()
}

pub fn count_sql(filter: &NotificationFilter) -> String {
    let (where_clause, _) = filter.to_sql_where();

    ["SELECT COUNT(*) FROM notifications", &where_clause].concat()
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn insert(&self, notification: &Notification) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, user_id, "type", title, message, data, read, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&notification.id)
        .bind(&notification.user_id)
        .bind(&notification.kind)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.data)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(
        &self,
        filter: &NotificationFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Notification>, StoreError> {
        let sql = find_sql(filter);
        tracing::debug!(sql);

        let mut sqlx = sqlx::query_as::<_, Notification>(&sql).bind(&filter.user_id);

        if let Some(kind) = &filter.kind {
            sqlx = sqlx.bind(kind);
        }
        if let Some(read) = filter.read {
            sqlx = sqlx.bind(read);
        }

        let notifications = sqlx
            .bind(pagination.limit as i64)
            .bind(pagination.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(notifications)
    }

    async fn count(&self, filter: &NotificationFilter) -> Result<i64, StoreError> {
        let sql = count_sql(filter);
        let mut sqlx = sqlx::query_scalar::<_, i64>(&sql).bind(&filter.user_id);

        if let Some(kind) = &filter.kind {
            sqlx = sqlx.bind(kind);
        }
        if let Some(read) = filter.read {
            sqlx = sqlx.bind(read);
        }

        Ok(sqlx.fetch_one(&self.pool).await?)
    }

    async fn mark_read(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Notification>, StoreError> {
        let notification = sqlx::query_as::<_, Notification>(
            "
            UPDATE notifications SET read = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING *
            ",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "
            UPDATE notifications SET read = TRUE
            WHERE user_id = $1 AND read = FALSE
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}
