//! Utilities: logging setup and error re-exports

pub mod logger;

pub use shared::error::{AppError, AppResult};
