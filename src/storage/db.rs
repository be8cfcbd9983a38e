use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::config::DatabaseConfig;
use crate::entities::{session, user};
use crate::error::Result;

/// Owns the handle to the SQLite backend.
///
/// Built once at startup from config (or in-memory for tests) and
/// shared with repositories via [`Store::connection`]. The handle is
/// a pool reference and is cheap to clone.
pub struct Store {
    conn: DatabaseConnection,
}

impl Store {
    /// Connect to the database named by the config and declare the
    /// schema if it is not there yet.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(&config.url);
        options
            .min_connections(1)
            .max_connections(config.max_connections);

        let conn = Database::connect(options).await?;
        log::info!("connected to {}", config.url);

        let store = Store { conn };
        store.init_schema().await?;
        Ok(store)
    }

    /// Connect to a private in-memory database. Pinned to a single
    /// connection so the database survives for the store's lifetime.
    pub async fn in_memory() -> Result<Self> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.min_connections(1).max_connections(1);

        let conn = Database::connect(options).await?;
        let store = Store { conn };
        store.init_schema().await?;
        Ok(store)
    }

    /// The shared connection handle repositories are constructed with.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Declare the schema. Uniqueness lives entirely here: partial
    /// indexes scope user name/email uniqueness to active rows, so a
    /// tombstoned name can be taken again. sessions.user_id carries
    /// no foreign-key constraint.
    async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    password TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    deleted_at TEXT
                )
                ",
            )
            .await?;

        self.conn
            .execute_unprepared(
                r"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_users_name_active
                ON users (name) WHERE deleted_at IS NULL
                ",
            )
            .await?;

        self.conn
            .execute_unprepared(
                r"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email_active
                ON users (email) WHERE deleted_at IS NULL
                ",
            )
            .await?;

        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS sessions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id INTEGER NOT NULL,
                    token TEXT NOT NULL UNIQUE,
                    expires_at TEXT NOT NULL
                )
                ",
            )
            .await?;

        log::debug!("schema declared");
        Ok(())
    }

    /// Physical row count of the users table, tombstones included.
    pub async fn user_count(&self) -> Result<u64> {
        Ok(user::Entity::find().count(&self.conn).await?)
    }

    /// Physical row count of the sessions table.
    pub async fn session_count(&self) -> Result<u64> {
        Ok(session::Entity::find().count(&self.conn).await?)
    }
}
