use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{DbConfig, DbKind};
use crate::error::AppError;
use crate::logging::pii::{sanitize_db_url, Redacted};

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";
/// Neither idle reaping nor lifetime recycling may close the memory connection.
const SQLITE_MEMORY_KEEPALIVE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

fn connect_options(db_kind: DbKind, config: Option<&DbConfig>) -> Result<ConnectOptions, AppError> {
    let opt = match db_kind {
        DbKind::Postgres => {
            let config = config.ok_or_else(|| {
                AppError::config("Postgres requires a DbConfig (DB_HOST, DB_PORT, ...)")
            })?;
            let mut opt = ConnectOptions::new(config.connection_string());
            opt.max_connections(10)
                .min_connections(1)
                .acquire_timeout(Duration::from_secs(5))
                .sqlx_logging(false);
            opt
        }
        DbKind::SqliteMemory => {
            // Every pooled connection to `sqlite::memory:` is its own database,
            // so the pool is pinned to one connection that is never recycled.
            let mut opt = ConnectOptions::new(SQLITE_MEMORY_URL);
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(SQLITE_MEMORY_KEEPALIVE)
                .max_lifetime(SQLITE_MEMORY_KEEPALIVE)
                .sqlx_logging(false);
            opt
        }
    };
    Ok(opt)
}

/// Open the connection pool and verify it with a ping.
/// This function does NOT touch the schema.
pub async fn connect_db(
    db_kind: DbKind,
    config: Option<&DbConfig>,
) -> Result<DatabaseConnection, AppError> {
    let opt = connect_options(db_kind, config)?;
    let url = sanitize_db_url(opt.get_url());

    let conn = Database::connect(opt).await.map_err(|e| {
        AppError::connection(format!(
            "failed to connect to {url}: {}",
            Redacted(&e.to_string())
        ))
    })?;

    conn.ping().await.map_err(|e| {
        AppError::connection(format!("ping to {url} failed: {}", Redacted(&e.to_string())))
    })?;

    info!(db_kind = ?db_kind, url = %url, "database connected");
    Ok(conn)
}
