use std::env;

use serde::Deserialize;

pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub frontend_url: Option<String>,
    pub port: Option<u16>,

    pub database_url: Option<String>,
    pub database_connection_string: Option<String>,

    pub jwt_secret: String,
}

impl Envy {
    /// Loads `.env.{APP_ENV}` when present, then reads the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        load_dotenv();
        envy::from_env::<Envy>()
    }

    pub fn resolved_database_url(&self) -> Option<String> {
        resolve_database_url(
            self.database_url.clone(),
            self.database_connection_string.clone(),
        )
    }
}

/// `DATABASE_URL` wins over `DATABASE_CONNECTION_STRING`. Blank values are ignored.
pub fn resolve_database_url(
    database_url: Option<String>,
    connection_string: Option<String>,
) -> Option<String> {
    database_url
        .into_iter()
        .chain(connection_string)
        .find(|url| !url.trim().is_empty())
}

/// Returns the name of the dotenv file that was loaded, if any.
pub fn load_dotenv() -> Option<String> {
    let app_env = env::var("APP_ENV").unwrap_or(DEFAULT_APP_ENV.to_string());
    let filename = format!(".env.{}", app_env);

    match dotenvy::from_filename(&filename) {
        Ok(_) => Some(filename),
        Err(e) => {
            tracing::debug!("no {} loaded: {}", filename, e);
            None
        }
    }
}
