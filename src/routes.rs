//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/tweets*` - Tweet API, see [`crate::api::routes::tweet_routes`]
//! - `GET /health` - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline, answered with 408
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Routes and tracing, without the outer service layers.
///
/// Used directly by the HTTP tests.
pub fn router(state: AppState) -> Router {
    api::routes::tweet_routes()
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application.
///
/// Requests running longer than `request_timeout` are aborted with
/// `408 Request Timeout`.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = router(state).layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        request_timeout,
    ));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
