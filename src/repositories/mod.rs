//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database
//! queries, following the Data Mapper pattern recommended by SeaORM.
//! Entities stay pure data models; each repository is constructed
//! with a shared connection handle and exposes its operations behind
//! a capability trait so tests can substitute another backing store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::session::Model as SessionModel;
use crate::entities::user::Model as UserModel;
use crate::error::Result;

pub mod session;
pub mod user;

pub use session::SessionRepository;
pub use user::UserRepository;

/// Insert payload for a user. The store assigns the id and the
/// repository stamps the timestamps.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Insert payload for a session. `user_id` is taken at face value;
/// no existence check happens at this layer.
#[derive(Clone, Debug)]
pub struct NewSession {
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// CRUD over user records, keyed by display name.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored row with its assigned
    /// id. Surfaces `ConstraintViolation` when name or email collides
    /// with an active row.
    async fn create(&self, user: NewUser) -> Result<UserModel>;

    /// First active (non-tombstoned) user with exactly this name.
    async fn read(&self, name: &str) -> Result<UserModel>;

    /// Full-record overwrite keyed by id. Never inserts; fails with
    /// `NotFound` when the id does not exist.
    async fn update(&self, user: UserModel) -> Result<UserModel>;

    /// Soft delete: tombstone the active user with this name. The
    /// row stays in the table.
    async fn delete(&self, name: &str) -> Result<()>;
}

/// CRUD over session records, keyed by token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new session and return the stored row. Surfaces
    /// `ConstraintViolation` when the token is already taken.
    async fn create(&self, session: NewSession) -> Result<SessionModel>;

    /// Session with exactly this token. Expiry is not consulted.
    async fn read(&self, token: &str) -> Result<SessionModel>;

    /// Full-record overwrite keyed by id. Never inserts.
    async fn update(&self, session: SessionModel) -> Result<SessionModel>;

    /// Hard delete: the row matching this token is physically
    /// removed.
    async fn delete(&self, token: &str) -> Result<()>;

    /// Session with this store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<SessionModel>;

    /// Every session row, in store-default order. No pagination.
    async fn find_all(&self) -> Result<Vec<SessionModel>>;
}
