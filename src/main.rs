use std::{net::SocketAddr, process, sync::Arc, time::Duration};

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use greenstagram_api::{
    app::env::{Envy, DEFAULT_PORT},
    notifications::store::postgres::PgNotificationStore,
    rate_limited, router, AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("greenstagram_api=debug,tower_http=info")),
        )
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid environment: {}", e);
            process::exit(1);
        }
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(DEFAULT_PORT);

    let Some(database_url) = envy.resolved_database_url() else {
        tracing::error!("invalid environment: DATABASE_URL or DATABASE_CONNECTION_STRING must be set");
        process::exit(1);
    };

    let pool = match PgPoolOptions::new()
        .max_connections(50)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to connect to database: {}", e);
            process::exit(1);
        }
    };

    tracing::info!("connected to db");

    let state = AppState {
        store: Arc::new(PgNotificationStore::new(pool)),
        envy: Arc::new(envy),
    };

    // app
    let app = rate_limited(router(Arc::new(state)), 100, Duration::from_secs(1));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}
