//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and idempotent schema creation
//! - SQLite pragma configuration
//! - Repository layer for user and book rows

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, StoreOptions};
pub use repo::{RepoError, Repository};
