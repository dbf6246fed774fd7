//! Shared state handed to every handler.

use std::sync::Arc;

use crate::application::services::TwitterService;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub twitter_service: Arc<TwitterService>,
    /// Page size used by `GET /tweets` when `limit` is omitted.
    pub default_page_size: i64,
}

impl AppState {
    pub fn new(twitter_service: Arc<TwitterService>, default_page_size: i64) -> Self {
        Self {
            twitter_service,
            default_page_size,
        }
    }
}
