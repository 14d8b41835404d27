use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::error::AppError;
use tracing::warn;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the store answers a trivial query.
pub async fn ready(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state
        .repo
        .ping()
        .await
        .map_err(|e| {
            warn!(error = %e, "Readiness check failed");
            AppError::ServiceUnavailable("Storage unavailable".to_string())
        })?;
    Ok(Json(serde_json::json!({"status": "ready"})))
}
