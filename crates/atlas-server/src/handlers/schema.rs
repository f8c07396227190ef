//! Schema initialization handler

use super::ApiError;
use crate::AppState;
use atlas_core::SchemaResponse;
use axum::{extract::State, Json};

pub async fn init(State(state): State<AppState>) -> Result<Json<SchemaResponse>, ApiError> {
    state.directory.initialize_schema().await?;
    Ok(Json(SchemaResponse { created: true }))
}
