//! In-memory user repository for tests and database-less wiring.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::users::{User, UserRepo};

/// In-memory store that enforces the same id and email uniqueness as the
/// `users` table. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct UserRepoMemory {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl UserRepoMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &BTreeMap<i64, User>, email: &str, except_id: Option<i64>) -> bool {
    users
        .values()
        .any(|u| u.email == email && Some(u.id) != except_id)
}

#[async_trait]
impl UserRepo for UserRepoMemory {
    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueId,
                "User id already exists",
            ));
        }
        if email_taken(&users, &user.email, None) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "Email already registered",
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, DomainError> {
        let users = self.users.read().await;
        users
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::user_not_found(user.id));
        }
        if email_taken(&users, &user.email, Some(user.id)) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "Email already registered",
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.users.read().await.len() as u64)
    }
}
