//! Employee Service
//!
//! CRUD HTTP service for the `Employee` resource, stored in SQLite.
//!
//! ```text
//! employee-server/src/
//! ├── core/     # config, state, server lifecycle, startup errors
//! ├── db/       # pool, raw data client, employee repository
//! ├── api/      # routes, handlers, middleware
//! ├── seed.rs   # schema provisioning + seed rows
//! └── utils/    # logger, error re-exports
//! ```
//!
//! Startup order: config → logger → pool → schema → seed → bind → serve.

pub mod api;
pub mod core;
pub mod db;
pub mod seed;
pub mod utils;

// Re-exports
pub use api::{build_app, build_router};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger;
