/// Idempotent DDL, run in order.
pub static STATEMENTS: [&str; 14] = [
    // users
    "
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL,
        username_key TEXT NOT NULL,
        displayname TEXT NOT NULL,
        email TEXT NOT NULL,
        email_key TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        eco_points INTEGER NOT NULL DEFAULT 0,
        updated_at BIGINT NOT NULL,
        created_at BIGINT NOT NULL
    )
    ",
    "CREATE UNIQUE INDEX IF NOT EXISTS users_username_key_idx ON users (username_key)",
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key_idx ON users (email_key)",
    // posts
    "
    CREATE TABLE IF NOT EXISTS posts (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        content TEXT NOT NULL,
        image_url TEXT,
        likes_count INTEGER NOT NULL DEFAULT 0,
        created_at BIGINT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS posts_created_at_idx ON posts (created_at DESC)",
    // challenges
    "
    CREATE TABLE IF NOT EXISTS challenges (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        points INTEGER NOT NULL,
        start_date BIGINT NOT NULL,
        end_date BIGINT NOT NULL,
        CHECK (start_date < end_date)
    )
    ",
    "CREATE INDEX IF NOT EXISTS challenges_date_range_idx ON challenges (start_date, end_date)",
    // badges
    "
    CREATE TABLE IF NOT EXISTS badges (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        icon TEXT NOT NULL,
        points_required INTEGER NOT NULL
    )
    ",
    "CREATE UNIQUE INDEX IF NOT EXISTS badges_name_idx ON badges (name)",
    // eco_quotes
    "
    CREATE TABLE IF NOT EXISTS eco_quotes (
        id TEXT PRIMARY KEY,
        text TEXT NOT NULL,
        author TEXT NOT NULL
    )
    ",
    // notifications
    r#"
    CREATE TABLE IF NOT EXISTS notifications (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        "type" TEXT NOT NULL,
        title TEXT NOT NULL,
        message TEXT NOT NULL,
        data JSONB,
        read BOOLEAN NOT NULL DEFAULT FALSE,
        created_at BIGINT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS notifications_user_created_idx ON notifications (user_id, created_at DESC, id DESC)",
    "CREATE INDEX IF NOT EXISTS notifications_user_read_idx ON notifications (user_id, read)",
    "CREATE INDEX IF NOT EXISTS notifications_type_idx ON notifications (\"type\")",
];
