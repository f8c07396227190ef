//! Person directory service

use atlas_core::{Engine, NewPerson, Person, PersonStore, Result, SearchQuery, SEARCH_RESULT_LIMIT};
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point for every person operation, independent of the engine.
pub struct PersonDirectory {
    store: Arc<dyn PersonStore>,
}

impl PersonDirectory {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    pub fn engine(&self) -> Engine {
        self.store.engine()
    }

    pub async fn health(&self) -> Result<()> {
        self.store.ping().await
    }

    pub async fn initialize_schema(&self) -> Result<()> {
        info!("Initializing schema on {}", self.engine());
        self.store.initialize_schema().await?;
        info!("Schema ready");
        Ok(())
    }

    pub async fn create_person(&self, person: &NewPerson) -> Result<i64> {
        let id = self.store.create_person(person).await?;
        info!("Created person {}", id);
        Ok(id)
    }

    /// Validates `raw` before the store is touched. A storage failure is
    /// returned as an error, never as an empty result.
    pub async fn search(&self, raw: Option<&str>) -> Result<Vec<Person>> {
        let query = SearchQuery::parse(raw)?;
        let results = self.store.search(&query, SEARCH_RESULT_LIMIT).await?;
        debug!(
            "Search on {} returned {} result(s)",
            self.engine(),
            results.len()
        );
        Ok(results)
    }
}
