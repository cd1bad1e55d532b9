//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// Field name of a todo's title in request payloads.
pub const TITLE_FIELD: &str = "title";
/// Field name of a todo's content in request payloads.
pub const CONTENT_FIELD: &str = "content";

/// The check a [`FieldRule`] applies to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Value must be present and contain at least one non-whitespace character.
    Required,
}

/// A single rule bound to one named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

/// An ordered collection of field rules.
///
/// Rules are evaluated in insertion order, so failures are reported in the
/// same order the rules were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// An empty rule set; every payload passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, builder style.
    pub fn rule(mut self, field: &'static str, kind: RuleKind, message: &'static str) -> Self {
        self.rules.push(FieldRule {
            field,
            kind,
            message,
        });
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Rules applied to a todo save payload.
///
/// Create and update currently share these rules; the service takes them as
/// two separate sets so they can diverge without touching the service.
pub fn save_todo_rules() -> RuleSet {
    RuleSet::new()
        .rule(TITLE_FIELD, RuleKind::Required, "Title is required.")
        .rule(CONTENT_FIELD, RuleKind::Required, "Content is required.")
}

/// A validation failure tied to one named input field.
///
/// Serialized as `{"propertyName": ..., "errorMessage": ...}`, which is the
/// shape existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub property_name: String,
    pub error_message: String,
}

impl FieldError {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

/// Aggregated result of evaluating a rule set against one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_todo_rules_cover_title_then_content() {
        let rules = save_todo_rules();
        let fields: Vec<_> = rules.rules().iter().map(|r| r.field).collect();
        assert_eq!(fields, vec![TITLE_FIELD, CONTENT_FIELD]);
        assert!(rules.rules().iter().all(|r| r.kind == RuleKind::Required));
    }

    #[test]
    fn field_error_serializes_camel_case() {
        let err = FieldError::new("title", "Title is required.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["propertyName"], "title");
        assert_eq!(json["errorMessage"], "Title is required.");
    }

    #[test]
    fn new_rule_set_is_empty() {
        assert!(RuleSet::new().is_empty());
        assert!(!save_todo_rules().is_empty());
    }
}
