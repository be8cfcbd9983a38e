//! User repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::{NewUser, UserStore};
use crate::entities::user;
use crate::error::{Result, StoreError};

/// Repository for user-related database operations.
///
/// Every method is a single round trip; uniqueness of name and email
/// among active rows is left entirely to the store's constraints.
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: NewUser) -> Result<user::Model> {
        let now = Utc::now();
        let row = user::ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        Ok(row.insert(&self.conn).await?)
    }

    async fn read(&self, name: &str) -> Result<user::Model> {
        user::Entity::find()
            .filter(user::Column::Name.eq(name))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.conn)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("user not found: {name}")))
    }

    async fn update(&self, user: user::Model) -> Result<user::Model> {
        let row = user::ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
            created_at: Set(user.created_at),
            updated_at: Set(Utc::now()),
            deleted_at: Set(user.deleted_at),
        };
        // A zero-row UPDATE surfaces as NotFound; nothing is inserted.
        Ok(row.update(&self.conn).await?)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(user::Column::Name.eq(name))
            .filter(user::Column::DeletedAt.is_null())
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("user not found: {name}")));
        }
        Ok(())
    }
}
