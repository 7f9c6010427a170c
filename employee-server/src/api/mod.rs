//! HTTP API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/employees | GET | List all employees |
//! | /api/employees | POST | Create an employee (body id ignored) |
//! | /api/employees/search | GET | `?nameContains=` or `?contains=` substring search |
//! | /api/employees/{id} | GET | Fetch one employee (empty body if absent) |
//! | /api/employees/{id} | PUT | Update, or insert under the given id |
//! | /health | GET | Liveness + database check |

pub mod employees;
pub mod health;
mod middleware;

use axum::{Router, middleware as axum_middleware};
use http::{HeaderName, HeaderValue, StatusCode};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, no middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
}

/// Routes with middleware and state applied
///
/// Used by the HTTP server and by tests driving the router in-process.
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CorsLayer::permissive())
        // Request logging - sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Outermost: the id is set before propagate copies it to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
