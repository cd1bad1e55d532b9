//! Rule evaluator. Pure logic, no database access.

use super::rules::{FieldError, FieldRule, RuleKind, RuleSet, ValidationResult};

/// A payload whose string fields can be looked up by name.
///
/// Returning `None` means the field is absent; the evaluator treats absent
/// and empty the same way.
pub trait FieldSource {
    fn field_value(&self, field: &str) -> Option<&str>;
}

/// Evaluate every rule in `rules` against `source`.
pub fn evaluate_rules<S: FieldSource + ?Sized>(rules: &RuleSet, source: &S) -> ValidationResult {
    let errors = rules
        .rules()
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, source.field_value(rule.field)))
        .collect();

    ValidationResult { errors }
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&str>) -> Option<FieldError> {
    let passed = match rule.kind {
        RuleKind::Required => value.is_some_and(|v| !v.trim().is_empty()),
    };

    if passed {
        None
    } else {
        Some(FieldError::new(rule.field, rule.message))
    }
}
