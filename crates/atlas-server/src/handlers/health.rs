//! Health check handler

use crate::AppState;
use atlas_core::HealthResponse;
use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.directory.health().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::ok())),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::failed("storage unreachable")),
            )
        }
    }
}
