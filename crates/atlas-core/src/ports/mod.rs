//! Port traits (interfaces) for dependency injection

pub mod predicate;
pub mod storage;

pub use predicate::CaseInsensitiveContainsPredicate;
pub use storage::{Engine, PersonStore};
