use std::sync::Arc;

use crate::config::ServerConfig;
use crate::seed::SeedClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only shared mutable resource; the database provides its
/// own concurrency control.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: salesboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// HTTP client for the seed dataset.
    pub seed_client: Arc<SeedClient>,
}
