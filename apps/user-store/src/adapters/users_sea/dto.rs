//! DTOs for users_sea adapter.

use crate::repos::users::User;

/// DTO for inserting a user row.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserCreate {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// DTO for overwriting the mutable columns of a user row.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserUpdate {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<&User> for UserCreate {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.name.clone(), user.email.clone())
    }
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.name.clone(), user.email.clone())
    }
}
