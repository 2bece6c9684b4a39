use migration::{count_applied_migrations, get_latest_migration_version, migrate_up};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::AppError;

/// Create the `users` table if it does not exist yet.
///
/// Runs the migrator, which is idempotent, then checks that at least one
/// migration is recorded as applied.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    migrate_up(db)
        .await
        .map_err(|e| AppError::schema_init(e.to_string()))?;

    let applied = count_applied_migrations(db)
        .await
        .map_err(|e| AppError::schema_init(e.to_string()))?;
    if applied == 0 {
        return Err(AppError::schema_init("no migrations recorded after migrate"));
    }

    let latest = get_latest_migration_version(db)
        .await
        .map_err(|e| AppError::schema_init(e.to_string()))?;
    info!(applied, latest = latest.as_deref().unwrap_or("<none>"), "schema ready");
    Ok(())
}
