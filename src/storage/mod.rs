//! Storage layer owning the database connection.
//!
//! One [`Store`] is built at process start and its connection handle
//! is passed into each repository. Repositories never open their own
//! connections.

pub mod db;

pub use db::Store;
