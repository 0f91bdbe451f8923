//! Validation failures keyed by field path

use std::collections::HashMap;

/// A single validation failure of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Human readable message
    pub message: String,
    /// Name of the failed rule
    pub rule: Option<String>,
}

impl FieldError {
    /// Create an error for a failed rule
    #[must_use]
    pub fn with_rule(message: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validation failures of a whole form
///
/// # Examples
///
/// ```rust
/// use acton_admin::form::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add_with_rule("email", "The Email field is required.", "required");
/// errors.add_with_rule("profile.bio", "Too long.", "max");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.for_field("profile.bio")[0].rule.as_deref(), Some("max"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error for a failed rule of a field
    pub fn add_with_rule(&mut self, field: impl Into<String>, message: impl Into<String>, rule: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(FieldError::with_rule(message, rule));
    }

    /// Whether any field failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether `field` failed
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Errors of `field`
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Total number of errors
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Merge another collection into this one
    pub fn merge(&mut self, other: &Self) {
        for (field, errors) in &other.errors {
            self.errors
                .entry(field.clone())
                .or_default()
                .extend(errors.iter().cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_merge() {
        let mut errors = ValidationErrors::new();
        errors.add_with_rule("email", "is required", "required");

        let mut other = ValidationErrors::new();
        other.add_with_rule("email", "is invalid", "email");
        other.add_with_rule("name", "is required", "required");
        errors.merge(&other);

        assert_eq!(errors.count(), 3);
        assert_eq!(errors.for_field("email").len(), 2);
        assert!(errors.has_field_error("name"));
        assert!(errors.for_field("missing").is_empty());
    }
}
