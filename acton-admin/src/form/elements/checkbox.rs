//! Boolean checkbox element

use serde_json::Value;

use crate::error::AdminResult;
use crate::form::{FormElement, NamedFormElement};
use crate::model::Model;
use crate::request::RequestContext;

/// Interpret a submitted or stored value as a boolean
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "on" | "true" | "yes"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Checkbox bound to a boolean attribute
#[derive(Debug, Clone)]
pub struct Checkbox {
    named: NamedFormElement,
}

impl Checkbox {
    /// Create a checkbox
    #[must_use]
    pub fn new(path: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            named: NamedFormElement::new(path, label),
        }
    }
}

impl FormElement for Checkbox {
    fn named(&self) -> &NamedFormElement {
        &self.named
    }

    fn named_mut(&mut self) -> &mut NamedFormElement {
        &mut self.named
    }

    fn type_name(&self) -> &'static str {
        "Checkbox"
    }

    fn value(&self, request: &dyn RequestContext, model: Option<&dyn Model>) -> AdminResult<Option<Value>> {
        let value = self.named.value(request, model)?;
        Ok(Some(Value::Bool(value.as_ref().is_some_and(truthy))))
    }

    fn save(&self, request: &dyn RequestContext, model: &mut dyn Model) -> AdminResult<()> {
        // Disabled inputs are never submitted
        if self.named.is_readonly() {
            tracing::debug!(path = %self.named.path(), "read-only checkbox left unchanged");
            return Ok(());
        }

        let checked = self
            .named
            .value_from_request(request)
            .as_ref()
            .is_some_and(truthy);
        self.named.save_value(model, Some(Value::Bool(checked)))
    }
}
