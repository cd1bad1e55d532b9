//! Soft-delete lifecycle derived from a nullable `deleted_at` column.

use crate::types::Timestamp;

/// Lifecycle state of a soft-deletable record.
///
/// Rows are never physically removed; a non-null `deleted_at` marks the row
/// as deleted and keeps the time it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStatus {
    Active,
    Deleted { deleted_at: Timestamp },
}

impl LifecycleStatus {
    pub fn from_deleted_at(deleted_at: Option<Timestamp>) -> Self {
        match deleted_at {
            Some(deleted_at) => Self::Deleted { deleted_at },
            None => Self::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// When the record was soft-deleted, if it was.
    pub fn deleted_at(&self) -> Option<Timestamp> {
        match self {
            Self::Active => None,
            Self::Deleted { deleted_at } => Some(*deleted_at),
        }
    }
}
