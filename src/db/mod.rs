use sqlx::PgPool;

use crate::{
    app::util::time,
    notifications::{
        self,
        models::notification_filter::NotificationFilter,
        store::{NotificationStore, StoreError},
    },
};

use self::seed::{BADGES, CHALLENGES, DISABLED_PASSWORD_HASH, POSTS, QUOTES, USERS};

pub mod schema;
pub mod seed;

const SECS_PER_DAY: i64 = 60 * 60 * 24;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid seed notification: {0}")]
    InvalidSeed(String),
}

#[derive(Debug, Default)]
pub struct SeedSummary {
    pub users: u64,
    pub posts: u64,
    pub challenges: u64,
    pub badges: u64,
    pub eco_quotes: u64,
    pub notifications: u64,
}

pub async fn initialize_schema(pool: &PgPool) -> Result<(), InitError> {
    for statement in schema::STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("schema ready ({} statements)", schema::STATEMENTS.len());

    Ok(())
}

/// Inserts the example records. Existing rows are left untouched.
pub async fn seed(pool: &PgPool, store: &dyn NotificationStore) -> Result<SeedSummary, InitError> {
    let now = time::current_time_in_secs() as i64;
    let mut summary = SeedSummary::default();

    for user in &USERS {
        let result = sqlx::query(
            "
            INSERT INTO users (
                id, username, username_key, displayname, email, email_key,
                password_hash, eco_points, updated_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user.id)
        .bind(user.username)
        .bind(user.username.to_lowercase())
        .bind(user.username)
        .bind(user.email)
        .bind(user.email.to_lowercase())
        .bind(DISABLED_PASSWORD_HASH)
        .bind(user.eco_points)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        summary.users += result.rows_affected();
    }

    for post in &POSTS {
        let result = sqlx::query(
            "
            INSERT INTO posts (id, user_id, content, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(post.id)
        .bind(post.user_id)
        .bind(post.content)
        .bind(post.image_url)
        .bind(now)
        .execute(pool)
        .await?;

        summary.posts += result.rows_affected();
    }

    for challenge in &CHALLENGES {
        let start_date = now + challenge.starts_in_days * SECS_PER_DAY;
        let end_date = start_date + challenge.duration_days * SECS_PER_DAY;

        let result = sqlx::query(
            "
            INSERT INTO challenges (
                id, title, description, category, points, start_date, end_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(challenge.id)
        .bind(challenge.title)
        .bind(challenge.description)
        .bind(challenge.category)
        .bind(challenge.points)
        .bind(start_date)
        .bind(end_date)
        .execute(pool)
        .await?;

        summary.challenges += result.rows_affected();
    }

    for badge in &BADGES {
        let result = sqlx::query(
            "
            INSERT INTO badges (id, name, description, icon, points_required)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(badge.id)
        .bind(badge.name)
        .bind(badge.description)
        .bind(badge.icon)
        .bind(badge.points_required)
        .execute(pool)
        .await?;

        summary.badges += result.rows_affected();
    }

    for quote in &QUOTES {
        let result = sqlx::query(
            "
            INSERT INTO eco_quotes (id, text, author)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(quote.id)
        .bind(quote.text)
        .bind(quote.author)
        .execute(pool)
        .await?;

        summary.eco_quotes += result.rows_affected();
    }

    summary.notifications = seed_notifications(store).await?;

    Ok(summary)
}

/// Gives every seeded user without notifications a welcome notification.
pub async fn seed_notifications(store: &dyn NotificationStore) -> Result<u64, InitError> {
    let mut inserted = 0;

    for user in &USERS {
        if store.count(&NotificationFilter::for_user(user.id)).await? > 0 {
            continue;
        }

        let dto = seed::welcome_notification(user);

        if let Err(e) = notifications::service::create_notification_as_admin(&dto, store).await {
            return Err(InitError::InvalidSeed(e.message));
        }

        inserted += 1;
    }

    Ok(inserted)
}
