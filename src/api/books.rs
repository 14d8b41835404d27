use axum::extract::State;
use axum::Json;

use super::extract::ApiJson;
use super::AppState;
use crate::domain::{Book, NewBook};
use crate::error::AppError;

pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewBook>,
) -> Result<Json<Book>, AppError> {
    let book = state.repo.create_book(payload).await?;
    Ok(Json(book))
}

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.repo.list_books().await?;
    Ok(Json(books))
}
