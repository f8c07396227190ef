//! Error responses

use atlas_core::{AtlasError, ErrorBody};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Handler error carrying the domain error it came from.
#[derive(Debug)]
pub struct ApiError(pub AtlasError);

impl From<AtlasError> for ApiError {
    fn from(e: AtlasError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AtlasError::Validation(_) => StatusCode::BAD_REQUEST,
            AtlasError::Unauthorized => StatusCode::UNAUTHORIZED,
            AtlasError::Database(_) | AtlasError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Storage details stay in the log
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self.0);
            "Storage error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(ErrorBody {
            error: message,
            code: self.0.code().to_string(),
        });
        (status, body).into_response()
    }
}
