use std::sync::Arc;

use scherzo_db::cache::Cache;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: scherzo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog cache (external service or in-process fallback).
    pub cache: Cache,
}
