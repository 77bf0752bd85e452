use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{info, warn};

use crate::error::AppError;

/// Connect to the document store and confirm it answers a ping.
///
/// With `run_migrations`, pending migrations are applied before returning.
pub async fn connect_db(
    db_uri: &str,
    run_migrations: bool,
) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(db_uri.to_string());
    options
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // An in-memory SQLite database lives per connection; keep a single one
    // so the schema and data stay visible to every query.
    if db_uri.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(options).await.map_err(|e| {
        warn!(error = %e, "database connection failed");
        AppError::db_unavailable()
    })?;

    ping(&conn).await?;
    info!(backend = ?conn.get_database_backend(), "Pinged your deployment. Database connection established");

    if run_migrations {
        migrate(&conn, MigrationCommand::Up)
            .await
            .map_err(|e| AppError::db(format!("migration failed: {e}")))?;
    }

    Ok(conn)
}

/// Lightweight round-trip used at startup and by `/health`.
pub async fn ping<C: ConnectionTrait>(conn: &C) -> Result<(), AppError> {
    conn.query_one(Statement::from_string(
        conn.get_database_backend(),
        "SELECT 1 AS ping",
    ))
    .await
    .map(|_| ())
    .map_err(|e| AppError::db(format!("ping failed: {e}")))
}
