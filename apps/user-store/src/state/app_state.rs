use sea_orm::DatabaseConnection;

use crate::services::users::UserService;

/// Process-wide resources, constructed once at startup and passed down.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent when wired to an in-memory repo)
    db: Option<DatabaseConnection>,
    /// Use-case layer over the configured storage backend
    pub users: UserService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, users: UserService) -> Self {
        Self {
            db: Some(db),
            users,
        }
    }

    /// Create an AppState without a database connection
    pub fn without_db(users: UserService) -> Self {
        Self { db: None, users }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Close the pool, if any. The state must not be used afterwards.
    pub async fn shutdown(self) -> Result<(), sea_orm::DbErr> {
        match self.db {
            Some(db) => db.close().await,
            None => Ok(()),
        }
    }
}
