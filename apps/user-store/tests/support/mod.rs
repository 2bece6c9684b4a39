//! Shared fixtures for user-store integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{EntityTrait, PaginatorTrait};
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;
use user_store::entities::users;
use user_store::{build_state, AppError, AppState, DbConfig, DbKind, UserRepoMemory};

/// Fresh in-memory SQLite database with the schema applied.
pub async fn sqlite_state() -> Result<AppState, AppError> {
    test_support::logging::init();
    build_state().with_db(DbKind::SqliteMemory).build().await
}

/// State backed by the in-memory repository (no database at all).
pub async fn memory_state() -> Result<AppState, AppError> {
    test_support::logging::init();
    build_state()
        .with_repo(Arc::new(UserRepoMemory::new()))
        .build()
        .await
}

/// A throwaway Postgres container and a state wired to it.
///
/// Field order matters: the state (and its pool) drops before the container.
pub struct PostgresFixture {
    pub state: AppState,
    _container: ContainerAsync<Postgres>,
}

/// Start a fresh Postgres container and build a state against it.
///
/// Returns `Ok(None)` when no container runtime is available, so the suite
/// still runs on machines without Docker. Set `USER_STORE_REQUIRE_DOCKER=1`
/// to turn that into a failure.
pub async fn postgres_fixture() -> Result<Option<PostgresFixture>, AppError> {
    test_support::logging::init();

    let container = match Postgres::default().start().await {
        Ok(container) => container,
        Err(e) if std::env::var_os("USER_STORE_REQUIRE_DOCKER").is_none() => {
            eprintln!("skipping Postgres test, container did not start: {e}");
            return Ok(None);
        }
        Err(e) => return Err(AppError::connection(format!("postgres container: {e}"))),
    };

    let host = container
        .get_host()
        .await
        .map_err(|e| AppError::connection(format!("postgres container host: {e}")))?;
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .map_err(|e| AppError::connection(format!("postgres container port: {e}")))?;

    let config = DbConfig {
        host: host.to_string(),
        port: port.to_string(),
        name: "postgres".into(),
        login: "postgres".into(),
        password: "postgres".into(),
    };
    let state = build_state()
        .with_db(DbKind::Postgres)
        .with_config(config)
        .build()
        .await?;

    Ok(Some(PostgresFixture {
        state,
        _container: container,
    }))
}

/// Count rows straight from the table, bypassing the repository.
pub async fn table_row_count(state: &AppState) -> u64 {
    let db = state.db().expect("state should carry a database");
    users::Entity::find()
        .count(db)
        .await
        .expect("count users rows")
}
