//! User operations on the `user` table.

use super::{RepoError, RepoResult, Repository};
use crate::domain::{NewUser, User, UserId, UserUpdate};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;

const ENTITY: &str = "User";

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: UserId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        is_active: row.try_get("is_active")?,
    })
}

fn not_found(id: UserId) -> RepoError {
    RepoError::NotFound {
        entity: ENTITY,
        id: id.as_i64(),
    }
}

impl Repository {
    /// Insert a user and return it with its store-assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn create_user(&self, new: NewUser) -> RepoResult<User> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO "user" (name, email, is_active)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.is_active)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = UserId::new(result.last_insert_rowid());
        info!(user_id = %id, "Created user");
        Ok(User::from_new(id, new))
    }

    /// List all users in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, email, is_active
            FROM "user"
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let users = rows
            .iter()
            .map(user_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    /// Returns `RepoError::NotFound` if no row has this id.
    pub async fn get_user(&self, id: UserId) -> RepoResult<User> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query(
            r#"
            SELECT id, name, email, is_active
            FROM "user"
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *conn)
        .await?;

        match row {
            Some(row) => Ok(user_from_row(&row)?),
            None => Err(not_found(id)),
        }
    }

    /// Overwrite name, email, and is_active of an existing user. The id never changes.
    ///
    /// # Errors
    /// Returns `RepoError::NotFound` if no row has this id; nothing is written in that case.
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> RepoResult<User> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            UPDATE "user"
            SET name = ?, email = ?, is_active = ?
            WHERE id = ?
            RETURNING id, name, email, is_active
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(update.is_active)
        .bind(id.as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(not_found(id));
        };
        let user = user_from_row(&row)?;

        tx.commit().await?;
        info!(user_id = %id, "Updated user");
        Ok(user)
    }

    /// Delete a user by id.
    ///
    /// # Errors
    /// Returns `RepoError::NotFound` if no row has this id.
    pub async fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tx.commit().await?;
        info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
