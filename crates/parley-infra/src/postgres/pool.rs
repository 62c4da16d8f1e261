//! Database pool for the PostgreSQL store.
//!
//! The pool is created once at startup and handed (cloned) to every
//! repository constructor. It is the only state shared between requests.

use std::time::Duration;

use parley_types::config::DatabaseConfig;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

/// Shared connection pool handle. Cheap to clone.
#[derive(Clone)]
pub struct DatabasePool {
    pub pool: PgPool,
}

impl DatabasePool {
    /// Connect to the store described by `config`.
    ///
    /// Fails fast if the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(connect_options(config))
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, embedding).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Close all connections, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Build connection options from the `DB_*` settings.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(config.password.expose_secret())
        .database(&config.name)
        .application_name("parley")
}
