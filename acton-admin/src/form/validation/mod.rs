//! Evaluation of synthesized validation rules against submitted input
//!
//! Rules use the `name:param,param` notation produced by form elements
//! (`required`, `min:5`, `between:1,10`, `unique:users,email,7`). Values
//! are read from the request by path. A field that was not submitted only
//! fails `required`; every other rule is skipped for it.

mod errors;

pub use errors::{FieldError, ValidationErrors};

use serde_json::Value;
use std::collections::BTreeMap;
use validator::{ValidateEmail, ValidateUrl};

use super::element::rule_name;
use crate::path;
use crate::request::RequestContext;

/// Lookup used by the `unique` rule
///
/// Implemented by the caller on top of its storage.
pub trait UniquenessCheck {
    /// Whether no row of `table` other than `except` has `value` in `column`
    fn is_unique(&self, table: &str, column: &str, value: &Value, except: Option<&str>) -> bool;
}

/// Rules, custom messages and labels of a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Rules keyed by path
    pub rules: BTreeMap<String, Vec<String>>,
    /// Messages keyed by `<name>.<rule>`
    pub messages: BTreeMap<String, String>,
    /// Labels keyed by path
    pub labels: BTreeMap<String, String>,
}

/// Runs a [`RuleSet`] against a request
#[derive(Default)]
pub struct Validator<'a> {
    uniqueness: Option<&'a dyn UniquenessCheck>,
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("uniqueness", &self.uniqueness.is_some())
            .finish()
    }
}

impl<'a> Validator<'a> {
    /// Create a validator without a uniqueness lookup
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `check` for `unique` rules
    #[must_use]
    pub fn with_uniqueness(mut self, check: &'a dyn UniquenessCheck) -> Self {
        self.uniqueness = Some(check);
        self
    }

    /// Evaluate every rule of `set` against `request`
    ///
    /// Errors are keyed by field path.
    pub fn validate(&self, set: &RuleSet, request: &dyn RequestContext) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for (field, rules) in &set.rules {
            let value = request.old_or_input(field);
            let numeric = rules
                .iter()
                .any(|rule| matches!(rule_name(rule), "numeric" | "integer"));

            for rule in rules {
                let (name, params) = split_rule(rule);
                if name != "required" && value.as_ref().is_none_or(is_empty) {
                    continue;
                }

                let passed = match name {
                    "required" => value.as_ref().is_some_and(|v| !is_empty(v)),
                    "min" | "max" | "between" => value
                        .as_ref()
                        .is_some_and(|v| check_size(name, &params, v, numeric)),
                    "email" => value.as_ref().and_then(Value::as_str).is_some_and(|s| s.validate_email()),
                    "url" => value.as_ref().and_then(Value::as_str).is_some_and(|s| s.validate_url()),
                    "numeric" => value.as_ref().and_then(as_number).is_some(),
                    "integer" => value.as_ref().is_some_and(is_integer),
                    "boolean" => value.as_ref().is_some_and(is_boolean),
                    "in" => value
                        .as_ref()
                        .is_some_and(|v| params.contains(&scalar_string(v).as_str())),
                    "confirmed" => {
                        let confirmation = request.old_or_input(&format!("{field}_confirmation"));
                        confirmation.is_some() && confirmation == value
                    }
                    "unique" => self.check_unique(field, &params, value.as_ref()),
                    _ => {
                        tracing::warn!(%field, %rule, "unknown validation rule ignored");
                        true
                    }
                };

                if !passed {
                    let message = message_for(set, field, name, &params);
                    tracing::debug!(%field, rule = %name, "validation failed");
                    errors.add_with_rule(field.clone(), message, name);
                }
            }
        }

        errors
    }

    fn check_unique(&self, field: &str, params: &[&str], value: Option<&Value>) -> bool {
        let (Some(value), Some(table), Some(column)) = (value, params.first(), params.get(1)) else {
            return true;
        };
        let Some(check) = self.uniqueness else {
            tracing::warn!(%field, "unique rule declared without a uniqueness lookup");
            return true;
        };
        check.is_unique(table, column, value, params.get(2).copied())
    }
}

fn split_rule(rule: &str) -> (&str, Vec<&str>) {
    match rule.split_once(':') {
        Some((name, params)) => (name, params.split(',').collect()),
        None => (rule, Vec::new()),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    }
}

fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(n) => matches!(n.as_i64(), Some(0 | 1)),
        Value::String(s) => matches!(s.as_str(), "0" | "1" | "true" | "false"),
        _ => false,
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn size_of(value: &Value, numeric: bool) -> Option<f64> {
    match value {
        _ if numeric => as_number(value),
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn check_size(rule: &str, params: &[&str], value: &Value, numeric: bool) -> bool {
    let bound = |index: usize| params.get(index).and_then(|p| p.trim().parse::<f64>().ok());
    let Some(size) = size_of(value, numeric) else {
        return false;
    };

    match rule {
        "min" => bound(0).is_some_and(|min| size >= min),
        "max" => bound(0).is_some_and(|max| size <= max),
        _ => bound(0)
            .zip(bound(1))
            .is_some_and(|(min, max)| size >= min && size <= max),
    }
}

fn message_for(set: &RuleSet, field: &str, rule: &str, params: &[&str]) -> String {
    if let Some(message) = set.messages.get(&format!("{}.{rule}", path::field_name(field))) {
        return message.clone();
    }

    let label = set
        .labels
        .get(field)
        .filter(|label| !label.is_empty())
        .map_or(field, String::as_str);
    let param = |index: usize| params.get(index).copied().unwrap_or_default();

    match rule {
        "required" => format!("The {label} field is required."),
        "min" => format!("The {label} must be at least {}.", param(0)),
        "max" => format!("The {label} may not be greater than {}.", param(0)),
        "between" => format!("The {label} must be between {} and {}.", param(0), param(1)),
        "email" => format!("The {label} must be a valid email address."),
        "url" => format!("The {label} format is invalid."),
        "numeric" => format!("The {label} must be a number."),
        "integer" => format!("The {label} must be an integer."),
        "boolean" => format!("The {label} field must be true or false."),
        "in" => format!("The selected {label} is invalid."),
        "confirmed" => format!("The {label} confirmation does not match."),
        "unique" => format!("The {label} has already been taken."),
        _ => format!("The {label} is invalid."),
    }
}
