//! HTTP handlers

pub mod docs;
pub mod error;
pub mod health;
pub mod persons;
pub mod schema;

pub use error::ApiError;
pub use health::health;
