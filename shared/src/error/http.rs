//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // A duplicate id on raw insert is a store constraint failure,
            // reported as a server error rather than a conflict.
            Self::EmployeeIdExists | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
