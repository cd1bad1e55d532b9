//! Input validation engine.
//!
//! Provides declarative field rules, a pure-logic evaluator, and the rule
//! sets used for todo payloads, all without database dependencies.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, FieldSource};
pub use rules::{save_todo_rules, FieldError, FieldRule, RuleKind, RuleSet, ValidationResult};
