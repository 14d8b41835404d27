use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::extract::{ApiJson, ApiPath};
use super::AppState;
use crate::domain::{NewUser, User, UserId, UserUpdate};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<Json<User>, AppError> {
    let user = state.repo.create_user(payload).await?;
    Ok(Json(user))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.repo.list_users().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<User>, AppError> {
    let user = state.repo.get_user(UserId::new(user_id)).await?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> Result<Json<User>, AppError> {
    let user = state
        .repo
        .update_user(UserId::new(user_id), payload)
        .await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.repo.delete_user(UserId::new(user_id)).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
