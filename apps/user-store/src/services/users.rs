use std::sync::Arc;

use tracing::debug;

use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;
use crate::repos::users::{User, UserRepo};

/// Use-case façade over a `UserRepo`.
///
/// Adds no behaviour of its own: every call returns exactly what the
/// repository returned, so storage backends can be swapped without callers
/// noticing.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, user: &User) -> Result<User, DomainError> {
        debug!(user_id = user.id, email = %Redacted(&user.email), "create_user");
        self.repo.create(user).await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, DomainError> {
        debug!(user_id = id, "get_user_by_id");
        self.repo.get_by_id(id).await
    }

    pub async fn update_user(&self, user: &User) -> Result<User, DomainError> {
        debug!(user_id = user.id, email = %Redacted(&user.email), "update_user");
        self.repo.update(user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        debug!(user_id = id, "delete_user");
        self.repo.delete(id).await
    }

    pub async fn count_users(&self) -> Result<u64, DomainError> {
        self.repo.count().await
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}
