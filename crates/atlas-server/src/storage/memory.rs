//! In-memory store using DashMap
//!
//! Matches in process with [`SearchQuery::matches`], which makes it the
//! reference the SQL engines are checked against.

use async_trait::async_trait;
use atlas_core::{Engine, NewPerson, Person, PersonStore, Result, SearchQuery};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

pub struct MemoryStore {
    rows: DashMap<i64, Person>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    fn engine(&self) -> Engine {
        Engine::Memory
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    // Nothing to create
    async fn initialize_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn create_person(&self, person: &NewPerson) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(id, Person::from_new(id, person.clone()));
        Ok(id)
    }

    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Person>> {
        let mut hits: Vec<Person> = self
            .rows
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        hits.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        hits.truncate(limit as usize);
        Ok(hits)
    }
}
