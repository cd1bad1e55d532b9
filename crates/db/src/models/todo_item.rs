//! Todo item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::lifecycle::LifecycleStatus;
use todo_core::types::{DbId, Timestamp};
use todo_core::validation::rules::{CONTENT_FIELD, TITLE_FIELD};
use todo_core::validation::FieldSource;

/// A row from the `todo_items` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TodoItem {
    /// `0` until the repository assigns an id on insert.
    pub todo_id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

impl TodoItem {
    /// A new, not yet persisted item.
    pub fn new(title: impl Into<String>, content: impl Into<String>, now: Timestamp) -> Self {
        Self {
            todo_id: 0,
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: None,
            deleted_at: None,
        }
    }

    pub fn status(&self) -> LifecycleStatus {
        LifecycleStatus::from_deleted_at(self.deleted_at)
    }

    pub fn is_active(&self) -> bool {
        self.status().is_active()
    }

    /// Merge incoming field values into the item.
    ///
    /// A field is replaced only when the incoming value is non-blank; blank
    /// values leave the stored field untouched. `updated_at` is always set.
    pub fn apply_changes(&mut self, title: &str, content: &str, now: Timestamp) {
        if !title.trim().is_empty() {
            self.title = title.to_string();
        }
        if !content.trim().is_empty() {
            self.content = content.to_string();
        }
        self.updated_at = Some(now);
    }

    /// Soft-delete the item. The row stays in storage.
    pub fn mark_deleted(&mut self, now: Timestamp) {
        self.deleted_at = Some(now);
        self.updated_at = Some(now);
    }

    pub fn to_view(&self) -> TodoItemView {
        TodoItemView {
            todo_id: self.todo_id,
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Client-facing view of a todo item. Timestamps are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItemView {
    pub todo_id: DbId,
    pub title: String,
    pub content: String,
}

/// Payload for both create and update.
///
/// `todo_id` absent or null means create; present means update. Missing
/// string fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTodoRequest {
    #[serde(default)]
    pub todo_id: Option<DbId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl SaveTodoRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            todo_id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Builder-style setter for the update target.
    pub fn with_id(mut self, todo_id: DbId) -> Self {
        self.todo_id = Some(todo_id);
        self
    }
}

impl FieldSource for SaveTodoRequest {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            TITLE_FIELD => Some(&self.title),
            CONTENT_FIELD => Some(&self.content),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn item() -> TodoItem {
        TodoItem::new("Old Title", "Old Content", Utc::now() - Duration::days(1))
    }

    #[test]
    fn apply_changes_replaces_non_blank_fields() {
        let mut item = item();
        let now = Utc::now();
        item.apply_changes("New Title", "New Content", now);
        assert_eq!(item.title, "New Title");
        assert_eq!(item.content, "New Content");
        assert_eq!(item.updated_at, Some(now));
    }

    #[test]
    fn apply_changes_keeps_fields_for_blank_input() {
        let mut item = item();
        item.apply_changes("  ", "New Content", Utc::now());
        assert_eq!(item.title, "Old Title");
        assert_eq!(item.content, "New Content");
        assert!(item.updated_at.is_some());
    }

    #[test]
    fn mark_deleted_sets_both_timestamps() {
        let mut item = item();
        let now = Utc::now();
        item.mark_deleted(now);
        assert!(!item.is_active());
        assert_eq!(item.deleted_at, Some(now));
        assert_eq!(item.updated_at, Some(now));
    }

    #[test]
    fn save_request_defaults_missing_fields() {
        let req: SaveTodoRequest = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(req.todo_id, None);
        assert_eq!(req.title, "T");
        assert_eq!(req.content, "");

        let req: SaveTodoRequest =
            serde_json::from_str(r#"{"todo_id": 4, "title": "T", "content": "C"}"#).unwrap();
        assert_eq!(req.todo_id, Some(4));
    }

    #[test]
    fn view_uses_snake_case_id() {
        let mut item = item();
        item.todo_id = 3;
        let json = serde_json::to_value(item.to_view()).unwrap();
        assert_eq!(json["todo_id"], 3);
        assert_eq!(json["title"], "Old Title");
        assert!(json.get("created_at").is_none());
    }
}
