use std::sync::Arc;

use directory_core::schema::FieldSchema;
use directory_db::UserStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The user store; the only path to mutate records.
    pub store: Arc<dyn UserStore>,
    /// Field schema applied to incoming payloads.
    pub schema: Arc<FieldSchema>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
