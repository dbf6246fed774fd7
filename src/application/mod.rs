//! Application layer services implementing business logic.
//!
//! This layer enforces validation and pagination policy and orchestrates
//! repository calls. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::twitter_service::TwitterService`] - Tweet creation, listing and aggregation

pub mod services;
