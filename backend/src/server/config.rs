//! Server settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;

/// Configuration values controlling how the recipe server starts.
///
/// Every field can be set through `RECIPES_*` environment variables, e.g.
/// `RECIPES_DATABASE_URL`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct ServerSettings {
    /// Listener address.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without one the server keeps recipes in
    /// memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Per-query timeout in seconds.
    pub query_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Return the configured listener address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Return the pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }

    /// Return the per-query timeout, falling back to the default.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(
            self.query_timeout_secs
                .unwrap_or(DEFAULT_QUERY_TIMEOUT_SECS)
                .max(1),
        )
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: None,
            database_url: None,
            db_max_connections: None,
            query_timeout_secs: None,
            run_migrations: true,
        }
    }
}
