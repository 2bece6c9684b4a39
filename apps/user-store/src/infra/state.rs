use std::sync::Arc;

use crate::adapters::users_sea::UserRepoSea;
use crate::config::db::{DbConfig, DbKind};
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::infra::schema::ensure_schema;
use crate::repos::users::UserRepo;
use crate::services::users::UserService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    config: Option<DbConfig>,
    repo: Option<Arc<dyn UserRepo>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    /// Connection settings for `DbKind::Postgres`. When omitted they are
    /// read from the environment at build time.
    pub fn with_config(mut self, config: DbConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an explicit repository instead of a database.
    pub fn with_repo(mut self, repo: Arc<dyn UserRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match (self.db_kind, self.repo) {
            (Some(_), Some(_)) => Err(AppError::config(
                "with_db and with_repo are mutually exclusive",
            )),
            (Some(db_kind), None) => {
                let config = match (db_kind, self.config) {
                    (DbKind::Postgres, None) => Some(DbConfig::from_env()?),
                    (_, config) => config,
                };

                // single entrypoint: connect + schema
                let conn = connect_db(db_kind, config.as_ref()).await?;
                ensure_schema(&conn).await?;

                let repo = UserRepoSea::new(conn.clone());
                Ok(AppState::new(conn, UserService::new(Arc::new(repo))))
            }
            (None, Some(repo)) => Ok(AppState::without_db(UserService::new(repo))),
            (None, None) => Err(AppError::config(
                "no storage configured; call with_db or with_repo",
            )),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
