//! Server State
//!
//! Handles passed to every request handler. Everything here is a cheap
//! clone over the same connection pool.

use crate::core::{Config, Result};
use crate::db::{DataClient, DbService, EmployeeRepository};
use crate::seed;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub employees: EmployeeRepository,
    pub data_client: DataClient,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            employees: db.employees(),
            data_client: db.data_client(),
            config,
            db,
        }
    }

    /// Open the database, provision the schema and seed it
    ///
    /// Runs to completion before the listener is bound; any error aborts
    /// startup.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(&config.database_url, config.max_connections).await?;
        let state = Self::new(config.clone(), db);

        seed::provision_schema(&state.db.pool).await?;

        if config.seed_data {
            seed::seed_employees(&state.employees).await?;
        } else {
            tracing::info!("Seeding disabled (SEED_DATA=false)");
        }

        Ok(state)
    }
}
