//! Route definitions for the `/Todo` resource.

use axum::routing::{get, post, MethodRouter};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Create and update share one path, reachable with or without a trailing
/// slash.
fn save() -> MethodRouter<AppState> {
    post(todo::create).put(todo::update)
}

/// Routes for the `/Todo` resource.
///
/// ```text
/// POST   /Todo, /Todo/   -> create
/// PUT    /Todo, /Todo/   -> update
/// POST   /Todo/list      -> list
/// GET    /Todo/{id}      -> get_by_id
/// DELETE /Todo/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Todo", save())
        .route("/Todo/", save())
        .route("/Todo/list", post(todo::list))
        .route("/Todo/{id}", get(todo::get_by_id).delete(todo::delete))
}
