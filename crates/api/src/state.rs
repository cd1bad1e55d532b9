use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Todo service wrapping the configured repository.
    pub todos: TodoService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
