//! Service outcomes and the wire envelope they serialize into.
//!
//! Expected business failures (missing item, invalid payload, ...) are
//! values, not errors: services return an [`Outcome`] and the HTTP layer
//! converts it into an [`ApiResponse`]. Only unexpected infrastructure
//! faults travel through `Result::Err`.

use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

pub const MSG_NOT_FOUND: &str = "Item not found.";
pub const MSG_NOT_FOUND_OR_DELETED: &str = "Item not found or already deleted.";
pub const MSG_VALIDATION_FAILED: &str = "Validation failed.";
pub const MSG_MISSING_ID: &str = "Todo Id Missing.";
pub const MSG_CREATED: &str = "Item created successfully.";
pub const MSG_UPDATED: &str = "Item updated successfully.";
pub const MSG_DELETED: &str = "Item deleted successfully.";

/// Why a service operation did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    /// The record exists but is soft-deleted. Reported with the same message
    /// as [`FailureKind::NotFound`].
    AlreadyDeleted,
    ValidationFailed,
    MissingIdentifier,
}

/// Failure half of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    pub errors: Vec<FieldError>,
}

/// Result of a service operation that completed without an infrastructure
/// fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success { data: T, message: String },
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: message.into(),
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(Failure {
            kind,
            message: message.into(),
            errors: Vec::new(),
        })
    }

    /// A [`FailureKind::ValidationFailed`] outcome carrying field errors.
    pub fn invalid(errors: Vec<FieldError>) -> Self {
        Self::Failure(Failure {
            kind: FailureKind::ValidationFailed,
            message: MSG_VALIDATION_FAILED.to_string(),
            errors,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } => message,
            Self::Failure(failure) => &failure.message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure.kind),
        }
    }
}

/// Uniform response envelope returned by every todo endpoint.
///
/// ```json
/// { "success": true, "message": "", "data": ..., "errors": null }
/// ```
///
/// `errors` is only populated for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<Vec<FieldError>>,
}

impl<T> From<Outcome<T>> for ApiResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success { data, message } => Self {
                success: true,
                message,
                data: Some(data),
                errors: None,
            },
            Outcome::Failure(Failure {
                message, errors, ..
            }) => Self {
                success: false,
                message,
                data: None,
                errors: (!errors.is_empty()).then_some(errors),
            },
        }
    }
}
