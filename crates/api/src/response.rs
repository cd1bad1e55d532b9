//! Conversion of service outcomes into HTTP responses.
//!
//! Todo endpoints always answer with the [`ApiResponse`] envelope. The
//! envelope's `success` flag picks the status: 200 on success, otherwise the
//! per-endpoint failure status.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use todo_core::envelope::{ApiResponse, Outcome};

/// Response tuple produced by every todo handler.
pub type EnvelopeResponse<T> = (StatusCode, Json<ApiResponse<T>>);

/// Wrap an outcome in the envelope, using `failure_status` when it failed.
pub fn envelope<T: Serialize>(outcome: Outcome<T>, failure_status: StatusCode) -> EnvelopeResponse<T> {
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        failure_status
    };
    (status, Json(ApiResponse::from(outcome)))
}
