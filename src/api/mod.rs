//! REST API layer.
//!
//! Translates HTTP requests into [`TwitterService`](crate::application::services::TwitterService)
//! calls and domain errors into `{"kind", "message"}` responses.
//!
//! # Modules
//!
//! - [`dto`] - Request and response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
