//! SQLite store (embedded, single file)

use super::{db_err, PersonRow};
use async_trait::async_trait;
use atlas_core::schema::schema_statements;
use atlas_core::search::search_statement;
use atlas_core::{
    AtlasError, CaseInsensitiveContainsPredicate, Engine, NewPerson, Person, PersonStore, Result,
    SearchQuery,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;

const ID_COLUMN: &str = "INTEGER PRIMARY KEY AUTOINCREMENT";

const INSERT_PERSON: &str = r#"
    INSERT INTO persons (name, surname, alias, phone, "group")
    VALUES (?1, ?2, ?3, ?4, ?5)
"#;

/// SQLite has no ILIKE, so both sides are lowered explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteContains;

impl CaseInsensitiveContainsPredicate for SqliteContains {
    fn placeholder(&self) -> &'static str {
        "?1"
    }

    fn contains_ci(&self, column: &str, placeholder: &str) -> String {
        format!("LOWER(COALESCE({column}, '')) LIKE LOWER({placeholder}) ESCAPE '\\'")
    }
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(url: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", url);

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AtlasError::Config(format!("invalid SQLite URL {url}: {e}")))?
            .create_if_missing(true);

        // Every connection to `:memory:` is a separate database, so an
        // in-memory URL is pinned to a single long-lived connection.
        if url.contains(":memory:") {
            return Self::with_single_connection(options).await;
        }

        let options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(db_err)?;

        tracing::info!("SQLite connection established");
        Ok(Self { pool })
    }

    /// Private in-memory database.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(db_err)?;
        Self::with_single_connection(options).await
    }

    async fn with_single_connection(options: SqliteConnectOptions) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(db_err)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl PersonStore for SqliteStore {
    fn engine(&self) -> Engine {
        Engine::Sqlite
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn initialize_schema(&self) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        for stmt in schema_statements(ID_COLUMN) {
            sqlx::query(&stmt)
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
        }
        tx.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn create_person(&self, person: &NewPerson) -> Result<i64> {
        let result = sqlx::query(INSERT_PERSON)
            .bind(person.name.as_deref())
            .bind(person.surname.as_deref())
            .bind(person.alias.as_deref())
            .bind(person.phone.as_deref())
            .bind(person.group.as_deref())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.last_insert_rowid())
    }

    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Person>> {
        let sql = search_statement(&SqliteContains, limit);
        let rows: Vec<PersonRow> = sqlx::query_as(&sql)
            .bind(query.like_pattern())
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
