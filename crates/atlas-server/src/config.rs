//! Server configuration, read once from the environment at startup

use crate::storage::{DatabaseUrl, DEFAULT_DATABASE_URL};
use atlas_core::{AtlasError, Result};
use tracing::warn;

/// Placeholder secret used when `API_KEY` is unset. Insecure.
pub const DEFAULT_API_KEY: &str = "change-me";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database: DatabaseUrl,
    pub max_connections: u32,
    api_key: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = match lookup("API_KEY") {
            Some(key) if key.is_empty() => {
                return Err(AtlasError::Config("API_KEY must not be empty".to_string()));
            }
            Some(key) => key,
            None => {
                warn!("API_KEY not set, using default (insecure for production)");
                DEFAULT_API_KEY.to_string()
            }
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database = DatabaseUrl::parse(&database_url)?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AtlasError::Config(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            bind_address,
            database,
            max_connections,
            api_key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_address", &self.bind_address)
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(
            config.database,
            DatabaseUrl::Sqlite(DEFAULT_DATABASE_URL.to_string())
        );
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.uses_default_api_key());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("API_KEY", "s3cret"),
            ("DATABASE_URL", "postgres://atlas@db/atlas"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(config.api_key(), "s3cret");
        assert!(!config.uses_default_api_key());
        assert_eq!(config.database.engine(), atlas_core::Engine::Postgres);
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn test_rejects_empty_api_key() {
        assert!(matches!(
            load(&[("API_KEY", "")]),
            Err(AtlasError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_bad_pool_size() {
        for raw in ["0", "-1", "many"] {
            assert!(matches!(
                load(&[("DATABASE_MAX_CONNECTIONS", raw)]),
                Err(AtlasError::Config(_))
            ));
        }
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        assert!(matches!(
            load(&[("DATABASE_URL", "mysql://db/atlas")]),
            Err(AtlasError::Config(_))
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = load(&[("API_KEY", "s3cret")]).unwrap();
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
