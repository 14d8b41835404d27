//! Database bootstrap: connection pool, pragmas, and idempotent schema creation.

use crate::config::Config;
use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::Path;
use tracing::{info, warn};

/// Store behaviour that is fixed for the lifetime of the pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Turn on `PRAGMA foreign_keys` so `book.owner_id` must name an existing user.
    pub enforce_foreign_keys: bool,
    /// Log executed statements at `info` rather than sqlx's default `debug`.
    pub sql_echo: bool,
}

impl From<&Config> for StoreOptions {
    fn from(config: &Config) -> Self {
        StoreOptions {
            enforce_foreign_keys: config.enforce_foreign_keys,
            sql_echo: config.sql_echo,
        }
    }
}

/// Open (creating if missing) the SQLite database and ensure both tables exist.
pub async fn init_db(db_path: &str, options: StoreOptions) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "Failed to create database directory");
            }
        }
    }

    let statement_level = if options.sql_echo {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };

    let connect_options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(options.enforce_foreign_keys)
        .log_statements(statement_level);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect_with(connect_options)
        .await?;

    run_migrations(&pool).await?;

    info!(
        enforce_foreign_keys = options.enforce_foreign_keys,
        "Database initialized successfully at {}", db_path
    );
    Ok(pool)
}

/// Create the `user` and `book` tables if they are absent. Existing columns are never altered.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring schema exists...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    info!("Schema ready");
    Ok(())
}

/// Configure SQLite pragmas for concurrent access from the pool.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.try_get(0)?;
    tracing::debug!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_db_path(temp_dir: &TempDir) -> String {
        temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_init_db_creates_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_db_path(&temp_dir);

        let pool = init_db(&db_path, StoreOptions::default())
            .await
            .expect("init_db failed");
        assert!(Path::new(&db_path).exists());

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_init_db_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("nested/dir/shelf.db")
            .to_string_lossy()
            .to_string();

        init_db(&db_path, StoreOptions::default())
            .await
            .expect("init_db failed");
        assert!(Path::new(&db_path).exists());
    }

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_db_path(&temp_dir), StoreOptions::default())
            .await
            .expect("init_db failed");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("query failed");
        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(names, vec!["book", "user"]);
    }

    #[tokio::test]
    async fn test_migrations_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_db_path(&temp_dir);
        let pool = init_db(&db_path, StoreOptions::default())
            .await
            .expect("init_db failed");

        sqlx::query(r#"INSERT INTO "user" (name, email, is_active) VALUES ('Ann', 'a@x.com', 1)"#)
            .execute(&pool)
            .await
            .expect("insert failed");

        run_migrations(&pool)
            .await
            .expect("second migration run failed");
        drop(pool);

        // Reopening the same file must keep existing rows.
        let pool = init_db(&db_path, StoreOptions::default())
            .await
            .expect("reopen failed");
        let result: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "user""#)
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_foreign_keys_follow_options() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_db_path(&temp_dir), StoreOptions::default())
            .await
            .expect("init_db failed");
        let result: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 0);

        let temp_dir = TempDir::new().unwrap();
        let options = StoreOptions {
            enforce_foreign_keys: true,
            ..StoreOptions::default()
        };
        let pool = init_db(&temp_db_path(&temp_dir), options)
            .await
            .expect("init_db failed");
        let result: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_pragmas_configured() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&temp_db_path(&temp_dir), StoreOptions::default())
            .await
            .expect("init_db failed");

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        // `journal_mode=WAL` is best-effort; SQLite can fall back depending on environment.
        assert!(
            matches!(result.0.as_str(), "wal" | "delete"),
            "unexpected journal_mode: {}",
            result.0
        );
    }
}
