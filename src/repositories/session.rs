//! Session repository for database operations.

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::{NewSession, SessionStore};
use crate::entities::session;
use crate::error::{Result, StoreError};

/// Repository for session-related database operations.
///
/// Sessions are keyed by token and hard-deleted; `expires_at` is
/// carried but never consulted by any lookup.
pub struct SessionRepository {
    conn: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn create(&self, session: NewSession) -> Result<session::Model> {
        let row = session::ActiveModel {
            user_id: Set(session.user_id),
            token: Set(session.token),
            expires_at: Set(session.expires_at),
            ..Default::default()
        };
        Ok(row.insert(&self.conn).await?)
    }

    async fn read(&self, token: &str) -> Result<session::Model> {
        session::Entity::find()
            .filter(session::Column::Token.eq(token))
            .one(&self.conn)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("session not found: {token}")))
    }

    async fn update(&self, session: session::Model) -> Result<session::Model> {
        let row = session::ActiveModel {
            id: Unchanged(session.id),
            user_id: Set(session.user_id),
            token: Set(session.token),
            expires_at: Set(session.expires_at),
        };
        Ok(row.update(&self.conn).await?)
    }

    async fn delete(&self, token: &str) -> Result<()> {
        let result = session::Entity::delete_many()
            .filter(session::Column::Token.eq(token))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("session not found: {token}")));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<session::Model> {
        session::Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("session not found: id {id}")))
    }

    async fn find_all(&self) -> Result<Vec<session::Model>> {
        Ok(session::Entity::find().all(&self.conn).await?)
    }
}
