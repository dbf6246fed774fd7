//! Data Transfer Objects for API requests and responses.
//!
//! Query DTOs keep raw strings so that each malformed field gets its own
//! error message naming the field.

pub mod health;
pub mod query;
pub mod tweet;
