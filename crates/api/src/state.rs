use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and the config is
/// behind one.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ceiba_db::DbPool,
    /// Server configuration (JWT secret, CORS origins, timeouts).
    pub config: Arc<ServerConfig>,
}
