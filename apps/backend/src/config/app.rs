//! Process configuration loaded from environment variables.
//!
//! A local `.env` file is read first (when present) so development setups
//! need no exported variables; real environment values take precedence.

use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Connection string for the document store (Postgres or SQLite URL)
    pub db_uri: String,
    /// Shared secret for signing access tokens
    pub access_token_secret: String,
    /// Allowed CORS origins; empty means the localhost fallback
    pub cors_allowed_origins: Vec<String>,
    /// Apply pending schema migrations at startup
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load `.env` (if any), then read and validate the environment.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read and validate configuration from the current environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let db_uri = must_var("DB_URI")?;
        let access_token_secret = must_var("ACCESS_TOKEN_SECRET_KEY")?;

        let cors_allowed_origins = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            db_uri,
            access_token_secret,
            cors_allowed_origins,
            run_migrations,
        })
    }
}

/// Get a required, non-empty environment variable or return a config error
fn must_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(AppError::config(format!(
            "Required environment variable '{name}' is empty"
        ))),
        Err(_) => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}

/// Comma-separated origins; blank, "null" and non-http(s) entries are dropped.
/// A lone `*` is kept and means any origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| *s == "*" || s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
