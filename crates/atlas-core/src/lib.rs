//! Atlas Core Library
//!
//! Error taxonomy, storage ports, search semantics and the API-key gate.

// Re-export pure types from atlas-types
pub use atlas_types::*;

pub mod access;
pub mod error;
pub mod ports;
pub mod schema;
pub mod search;

pub use access::{ApiKeyGate, GateDecision, API_KEY_HEADER, OPEN_PATHS};
pub use error::{AtlasError, Result};
pub use ports::{CaseInsensitiveContainsPredicate, Engine, PersonStore};
pub use search::{SearchQuery, SEARCH_RESULT_LIMIT};
