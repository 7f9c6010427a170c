//! Database Module
//!
//! SQLite connection pool, the raw data client and the employee repository.

pub mod client;
pub mod repository;

pub use client::DataClient;
pub use repository::{EmployeeRepository, RepoError, RepoResult};

use crate::core::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service, owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the pool for `database_url`
    ///
    /// In-memory databases live only as long as their last connection, so
    /// they get a single connection that is never reaped.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let in_memory = is_in_memory(database_url);

        let mut options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;

        tracing::info!(
            in_memory,
            max_connections = pool.options().get_max_connections(),
            "Database connection established"
        );

        Ok(Self { pool })
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.pool.clone())
    }

    pub fn data_client(&self) -> DataClient {
        DataClient::new(self.pool.clone())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
