//! Unified error system for the employee service
//!
//! Handlers return [`AppResult`]; an [`AppError`] renders as an
//! [`ErrorResponse`] JSON body with the status its [`ErrorCode`] maps to.
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::database("disk I/O error");
//! assert_eq!(err.http_status(), 500);
//!
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code, ErrorCode::DatabaseError);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
