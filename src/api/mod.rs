pub mod books;
pub mod extract;
pub mod health;
pub mod users;

use crate::db::Repository;
use crate::error::AppError;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_collection = get(users::list_users)
        .post(users::create_user)
        .fallback(method_not_allowed);
    let book_collection = get(books::list_books)
        .post(books::create_book)
        .fallback(method_not_allowed);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/users/", user_collection.clone())
        .route("/users", user_collection)
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(method_not_allowed),
        )
        .route("/books/", book_collection.clone())
        .route("/books", book_collection)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Unmatched paths, including an item route with a trailing slash.
async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
