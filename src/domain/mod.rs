//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
