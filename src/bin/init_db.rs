use std::{env, process, time::Duration};

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use greenstagram_api::{
    app::env::{load_dotenv, resolve_database_url},
    db, notifications::store::postgres::PgNotificationStore,
};

/// Creates the Greenstagram tables and indexes, then seeds example records.
#[derive(Debug, Parser)]
#[command(name = "init-db")]
struct Args {
    /// Only create tables and indexes.
    #[arg(long)]
    no_seed: bool,

    /// Overrides DATABASE_URL and DATABASE_CONNECTION_STRING.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("greenstagram_api=info,init_db=info")),
        )
        .init();

    let args = Args::parse();
    load_dotenv();

    let database_url = match resolve_database_url(
        args.database_url,
        resolve_database_url(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_CONNECTION_STRING").ok(),
        ),
    ) {
        Some(url) => url,
        None => {
            tracing::error!("DATABASE_URL or DATABASE_CONNECTION_STRING must be set");
            process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to connect to database: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = db::initialize_schema(&pool).await {
        tracing::error!("failed to initialize schema: {}", e);
        process::exit(1);
    }

    if args.no_seed {
        println!("schema initialized, seeding skipped");
        return;
    }

    let store = PgNotificationStore::new(pool.clone());

    match db::seed(&pool, &store).await {
        Ok(summary) => {
            println!("schema initialized");
            println!("seeded users:         {}", summary.users);
            println!("seeded posts:         {}", summary.posts);
            println!("seeded challenges:    {}", summary.challenges);
            println!("seeded badges:        {}", summary.badges);
            println!("seeded eco quotes:    {}", summary.eco_quotes);
            println!("seeded notifications: {}", summary.notifications);
        }
        Err(e) => {
            tracing::error!("failed to seed database: {}", e);
            process::exit(1);
        }
    }
}
