//! authstore - A SQLite-backed user and session store
//!
//! This library provides a small, typed data-access layer over a
//! relational store: two entities (users, sessions), each fronted by
//! a repository exposing create/read/update/delete as single SeaORM
//! round trips. The store connection is built once at startup and
//! injected into each repository.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for database tables
//! * [`error`] - Error taxonomy shared by all store operations
//! * [`repositories`] - Repository layer for database operations
//! * [`storage`] - Store connection and schema declaration

/// Configuration module for managing application settings
pub mod config;

/// SeaORM entity models for database tables
pub mod entities;

/// Error taxonomy for store operations
pub mod error;

/// Logging setup via the log facade and fern
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Storage layer owning the database connection
pub mod storage;

// Re-export the working set for convenient access
pub use entities::{session, user};
pub use error::{Result, StoreError};
pub use repositories::{
    NewSession, NewUser, SessionRepository, SessionStore, UserRepository, UserStore,
};
pub use storage::Store;
