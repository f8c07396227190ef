//! PostgreSQL store

use super::{db_err, PersonRow};
use async_trait::async_trait;
use atlas_core::schema::schema_statements;
use atlas_core::search::search_statement;
use atlas_core::{
    AtlasError, CaseInsensitiveContainsPredicate, Engine, NewPerson, Person, PersonStore, Result,
    SearchQuery,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const ID_COLUMN: &str = "BIGSERIAL PRIMARY KEY";

const INSERT_PERSON: &str = r#"
    INSERT INTO persons (name, surname, alias, phone, "group")
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id
"#;

/// Native ILIKE. COALESCE keeps NULL handling identical to SQLite, and the
/// "C" collation limits case folding to ASCII as SQLite's LOWER does.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContains;

impl CaseInsensitiveContainsPredicate for PostgresContains {
    fn placeholder(&self) -> &'static str {
        "$1"
    }

    fn contains_ci(&self, column: &str, placeholder: &str) -> String {
        format!("COALESCE({column}, '') COLLATE \"C\" ILIKE {placeholder} ESCAPE '\\'")
    }
}

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Build the pool without connecting. Connections are opened on first
    /// use, so an unreachable server shows up in `/health` instead of
    /// preventing startup.
    pub fn connect_lazy(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(url)
            .map_err(|e| AtlasError::Config(format!("invalid PostgreSQL URL: {e}")))?;

        tracing::info!("PostgreSQL pool configured (max_connections={})", max_connections);
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub(crate) async fn drop_schema(&self) -> Result<()> {
        sqlx::query("DROP TABLE IF EXISTS persons")
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl PersonStore for PostgresStore {
    fn engine(&self) -> Engine {
        Engine::Postgres
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
        let id: i64 = sqlx::query_scalar(INSERT_PERSON)
            .bind(person.name.as_deref())
            .bind(person.surname.as_deref())
            .bind(person.alias.as_deref())
            .bind(person.phone.as_deref())
            .bind(person.group.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(id)
    }

    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Person>> {
        let sql = search_statement(&PostgresContains, limit);
        let rows: Vec<PersonRow> = sqlx::query_as(&sql)
            .bind(query.like_pattern())
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
