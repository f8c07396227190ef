//! Storage traits for persistence

use crate::search::SearchQuery;
use crate::Result;
use async_trait::async_trait;
use atlas_types::{NewPerson, Person};

/// Backing engine behind a [`PersonStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Postgres,
    Sqlite,
    Memory,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Postgres => write!(f, "postgres"),
            Engine::Sqlite => write!(f, "sqlite"),
            Engine::Memory => write!(f, "memory"),
        }
    }
}

/// Person store
///
/// Every method is a single statement against the engine, except
/// `initialize_schema` which runs its DDL inside one transaction.
#[async_trait]
pub trait PersonStore: Send + Sync {
    fn engine(&self) -> Engine;

    /// Round-trip a trivial statement to prove the engine is reachable.
    async fn ping(&self) -> Result<()>;

    /// Create the `persons` table and its indexes if they are missing.
    async fn initialize_schema(&self) -> Result<()>;

    /// Insert a new row and return the id the engine assigned to it.
    async fn create_person(&self, person: &NewPerson) -> Result<i64>;

    /// Rows where any searchable column contains the query, newest first.
    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Person>>;
}
