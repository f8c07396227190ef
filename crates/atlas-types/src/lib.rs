//! Atlas Types - Pure type definitions
//!
//! Data types shared by the storage layer and the HTTP surface. No async
//! runtime or database dependencies live here.

pub mod api;
pub mod person;

pub use api::*;
pub use person::*;
