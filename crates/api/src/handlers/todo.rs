//! Handlers for the `/Todo` resource.
//!
//! Each handler delegates to [`TodoService`](crate::services::TodoService)
//! and maps the outcome's `success` flag to a status code. Store faults and
//! unreadable JSON bodies propagate as [`AppError`](crate::error::AppError).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::types::DbId;
use todo_db::models::todo_item::{SaveTodoRequest, TodoItemView};

use crate::error::AppResult;
use crate::response::{envelope, EnvelopeResponse};
use crate::state::AppState;

/// POST /Todo/list
pub async fn list(State(state): State<AppState>) -> AppResult<EnvelopeResponse<Vec<TodoItemView>>> {
    let outcome = state.todos.list().await?;
    Ok(envelope(outcome, StatusCode::BAD_REQUEST))
}

/// GET /Todo/{id}
///
/// Missing and soft-deleted items both answer 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<EnvelopeResponse<TodoItemView>> {
    let outcome = state.todos.get_by_id(id).await?;
    Ok(envelope(outcome, StatusCode::NOT_FOUND))
}

/// POST /Todo
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SaveTodoRequest>, JsonRejection>,
) -> AppResult<EnvelopeResponse<DbId>> {
    let Json(input) = payload?;
    let outcome = state.todos.create(&input).await?;
    Ok(envelope(outcome, StatusCode::BAD_REQUEST))
}

/// PUT /Todo
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<SaveTodoRequest>, JsonRejection>,
) -> AppResult<EnvelopeResponse<bool>> {
    let Json(input) = payload?;
    let outcome = state.todos.update(&input).await?;
    Ok(envelope(outcome, StatusCode::BAD_REQUEST))
}

/// DELETE /Todo/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<EnvelopeResponse<bool>> {
    let outcome = state.todos.delete(id).await?;
    Ok(envelope(outcome, StatusCode::BAD_REQUEST))
}
