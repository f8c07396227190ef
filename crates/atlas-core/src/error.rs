//! Error types for Atlas

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AtlasError>;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl AtlasError {
    /// Stable machine-readable code used in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AtlasError::Validation(_) => "invalid_request",
            AtlasError::Unauthorized => "unauthorized",
            AtlasError::Database(_) => "storage_error",
            AtlasError::Config(_) => "config_error",
        }
    }
}
