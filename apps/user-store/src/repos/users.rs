//! User repository contract for the use-case layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::users;
use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Storage capability behind `UserService`.
///
/// Uniqueness of `id` and `email` is enforced by the backing store; callers
/// learn about violations through `DomainError::Conflict`.
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Insert a new user with a caller-supplied id.
    async fn create(&self, user: &User) -> Result<User, DomainError>;

    /// Fetch a user by id, `NotFound` if absent.
    async fn get_by_id(&self, id: i64) -> Result<User, DomainError>;

    /// Overwrite name and email of an existing user. The id is never changed.
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Remove a user by id, `NotFound` if absent.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Number of stored users.
    async fn count(&self) -> Result<u64, DomainError>;
}

// Conversions between SeaORM models and domain models

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}
