//! SeaORM adapter for the user repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::entities::users;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::users::{User, UserRepo};

pub mod dto;

pub use dto::{UserCreate, UserUpdate};

// Adapter functions return DbErr; UserRepoSea maps to DomainError via map_db_err.

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        email: Set(dto.email),
    };

    user_active.insert(conn).await
}

pub async fn find_user_by_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

/// Returns the number of rows updated (0 or 1).
pub async fn update_user<C: ConnectionTrait>(
    conn: &C,
    dto: UserUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::update_many()
        .col_expr(users::Column::Name, Expr::value(dto.name))
        .col_expr(users::Column::Email, Expr::value(dto.email))
        .filter(users::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Returns the number of rows deleted (0 or 1).
pub async fn delete_user<C: ConnectionTrait>(conn: &C, user_id: i64) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::delete_by_id(user_id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn count_users<C: ConnectionTrait>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    users::Entity::find().count(conn).await
}

/// SeaORM implementation of UserRepo.
#[derive(Debug, Clone)]
pub struct UserRepoSea {
    db: DatabaseConnection,
}

impl UserRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepo for UserRepoSea {
    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let row = create_user(&self.db, UserCreate::from(user))
            .await
            .map_err(map_db_err)?;
        Ok(User::from(row))
    }

    async fn get_by_id(&self, id: i64) -> Result<User, DomainError> {
        find_user_by_id(&self.db, id)
            .await
            .map_err(map_db_err)?
            .map(User::from)
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let rows = update_user(&self.db, UserUpdate::from(user))
            .await
            .map_err(map_db_err)?;
        if rows == 0 {
            return Err(DomainError::user_not_found(user.id));
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let rows = delete_user(&self.db, id).await.map_err(map_db_err)?;
        if rows == 0 {
            return Err(DomainError::user_not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        count_users(&self.db).await.map_err(map_db_err)
    }
}
