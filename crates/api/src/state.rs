use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: adsite_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Base URL for stored media paths.
    pub fn media_url(&self) -> &str {
        &self.config.media_url
    }
}
