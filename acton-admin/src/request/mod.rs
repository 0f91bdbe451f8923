//! Request context for form elements
//!
//! Form elements read submitted values through [`RequestContext`] rather
//! than an ambient request. [`InputBag`] is the standard implementation:
//! nested JSON built from bracketed form fields, plus the "old" input
//! flashed back after a failed validation cycle.
//!
//! # Example
//!
//! ```rust
//! use acton_admin::request::{InputBag, RequestContext};
//! use serde_json::json;
//!
//! let request = InputBag::from_pairs([
//!     ("email".to_string(), "ann@example.com".to_string()),
//!     ("profile[bio]".to_string(), "Hello".to_string()),
//! ]);
//!
//! assert_eq!(request.input("profile.bio"), Some(json!("Hello")));
//! assert_eq!(request.input("profile[bio]"), Some(json!("Hello")));
//! assert_eq!(request.old("email"), None);
//! ```

use axum::extract::{FromRequest, Request};
use axum::extract::rejection::FormRejection;
use axum::Form;
use serde_json::{Map, Value};

use crate::path;

/// Access to submitted values by dotted or bracketed path
pub trait RequestContext {
    /// Value flashed back from a previous, failed submission
    fn old(&self, path: &str) -> Option<Value>;

    /// Value submitted with the current request
    fn input(&self, path: &str) -> Option<Value>;

    /// Old value if present, otherwise current input
    fn old_or_input(&self, path: &str) -> Option<Value> {
        self.old(path).or_else(|| self.input(path))
    }
}

/// Submitted form values
#[derive(Debug, Clone, PartialEq)]
pub struct InputBag {
    input: Value,
    old: Value,
}

impl Default for InputBag {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBag {
    /// Create an empty input bag
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: Value::Object(Map::new()),
            old: Value::Object(Map::new()),
        }
    }

    /// Build current input from decoded form pairs (`profile[bio]=...`)
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            input: nest_pairs(pairs),
            old: Value::Object(Map::new()),
        }
    }

    /// Replace current input with an already nested JSON object
    #[must_use]
    pub fn with_input(mut self, input: Value) -> Self {
        self.input = input;
        self
    }

    /// Replace old input with an already nested JSON object
    #[must_use]
    pub fn with_old(mut self, old: Value) -> Self {
        self.old = old;
        self
    }

    /// Flash the current input as old input, as after a failed validation
    #[must_use]
    pub fn flash(self) -> Self {
        Self {
            input: Value::Object(Map::new()),
            old: self.input,
        }
    }

    /// Set a current input value at a dotted path
    pub fn set_input(&mut self, path: &str, value: Value) -> &mut Self {
        insert_nested(&mut self.input, &path::lookup_segments(path), value);
        self
    }

    /// Set an old input value at a dotted path
    pub fn set_old(&mut self, path: &str, value: Value) -> &mut Self {
        insert_nested(&mut self.old, &path::lookup_segments(path), value);
        self
    }

    /// Whether current input has a non-null value at `path`
    #[must_use]
    pub fn has(&self, path: &str) -> bool {
        lookup(&self.input, path).is_some()
    }

    /// Whole current input tree
    #[must_use]
    pub const fn all(&self) -> &Value {
        &self.input
    }
}

impl RequestContext for InputBag {
    fn old(&self, path: &str) -> Option<Value> {
        lookup(&self.old, path).cloned()
    }

    fn input(&self, path: &str) -> Option<Value> {
        lookup(&self.input, path).cloned()
    }
}

impl<S> FromRequest<S> for InputBag
where
    S: Send + Sync,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
        tracing::trace!(fields = pairs.len(), "decoded admin form submission");
        Ok(Self::from_pairs(pairs))
    }
}

/// Look up a non-null value by dotted or bracketed path
#[must_use]
pub fn lookup<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path::lookup_segments(path)
        .iter()
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
        .filter(|value| !value.is_null())
}

fn nest_pairs<I>(pairs: I) -> Value
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut root = Value::Object(Map::new());
    for (name, value) in pairs {
        insert_nested(&mut root, &path::name_segments(&name), Value::String(value));
    }
    root
}

fn insert_nested(target: &mut Value, segments: &[String], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *target = value;
        return;
    };

    if head.is_empty() {
        if !target.is_array() {
            *target = Value::Array(Vec::new());
        }
        if let Value::Array(items) = target {
            let mut slot = Value::Null;
            insert_nested(&mut slot, rest, value);
            items.push(slot);
        }
        return;
    }

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        let slot = map.entry(head.clone()).or_insert(Value::Null);
        insert_nested(slot, rest, value);
    }
}
