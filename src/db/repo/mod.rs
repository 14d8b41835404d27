//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by table:
//! - `users.rs` - User create/list/get/update/delete
//! - `books.rs` - Book create/list
//!
//! Every method runs inside its own scoped session: a pooled connection for reads,
//! a transaction for writes. A transaction dropped before `commit` rolls back, so early
//! returns never leave partial writes behind.

mod books;
mod users;

use sqlx::sqlite::SqlitePool;
use thiserror::Error;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository errors.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The requested row does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A store-enforced constraint rejected the write.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The store could not be reached, read, or written.
    #[error("Storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return RepoError::Constraint(db_err.message().to_string());
            }
        }
        RepoError::Unavailable(err)
    }
}

/// Repository for database operations.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    /// Returns `RepoError::Unavailable` if the store cannot answer.
    pub async fn ping(&self) -> RepoResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
