//! Person handlers

use super::ApiError;
use crate::AppState;
use atlas_core::{AtlasError, CreatePersonResponse, NewPerson, SearchResponse};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<CreatePersonResponse>, ApiError> {
    let Json(person) = payload.map_err(|e| AtlasError::Validation(e.body_text()))?;

    let id = state.directory.create_person(&person).await?;
    Ok(Json(CreatePersonResponse { ok: true, id }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| AtlasError::Validation(e.body_text()))?;

    let results = state.directory.search(params.q.as_deref()).await?;
    Ok(Json(SearchResponse { results }))
}
