//! Shared types for the employee service
//!
//! Wire models and the unified error type used by the HTTP service and any
//! client crate.

pub mod error;
pub mod models;
