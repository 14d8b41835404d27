//! Book operations on the `book` table.

use super::{RepoResult, Repository};
use crate::domain::{Book, BookId, NewBook, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;

fn book_from_row(row: &SqliteRow) -> Result<Book, sqlx::Error> {
    let owner_id: Option<i64> = row.try_get("owner_id")?;
    Ok(Book {
        id: BookId::new(row.try_get("id")?),
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        year: row.try_get("year")?,
        owner_id: owner_id.map(UserId::new),
    })
}

impl Repository {
    /// Insert a book and return it with its store-assigned id.
    ///
    /// `owner_id` is stored as given. Only when the pool was opened with foreign-key
    /// enforcement does a dangling owner fail, as `RepoError::Constraint`.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn create_book(&self, new: NewBook) -> RepoResult<Book> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO book (title, author, year, owner_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(&new.author)
        .bind(new.year)
        .bind(new.owner_id.map(|id| id.as_i64()))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = BookId::new(result.last_insert_rowid());
        info!(book_id = %id, owner_id = ?new.owner_id.map(|o| o.as_i64()), "Created book");
        Ok(Book::from_new(id, new))
    }

    /// List all books in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, title, author, year, owner_id
            FROM book
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let books = rows
            .iter()
            .map(book_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }
}
