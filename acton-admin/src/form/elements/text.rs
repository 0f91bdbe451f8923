//! Single-line input elements

use serde_json::{Map, Value};

use crate::form::{FormElement, NamedFormElement};

/// Single-line input (`text`, `email`, `number`, ...)
#[derive(Debug, Clone)]
pub struct Text {
    named: NamedFormElement,
    input_type: String,
    placeholder: Option<String>,
}

impl Text {
    /// Create a `type="text"` input
    #[must_use]
    pub fn new(path: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            named: NamedFormElement::new(path, label),
            input_type: "text".into(),
            placeholder: None,
        }
    }

    /// Create a `type="email"` input carrying the `email` rule
    #[must_use]
    pub fn email(path: impl Into<String>, label: Option<&str>) -> Self {
        let mut text = Self::new(path, label);
        text.set_input_type("email");
        text.named.add_validation_rule("email", None);
        text
    }

    /// HTML input type
    #[must_use]
    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    /// Set the HTML input type
    pub fn set_input_type(&mut self, input_type: impl Into<String>) -> &mut Self {
        self.input_type = input_type.into();
        self
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

impl FormElement for Text {
    fn named(&self) -> &NamedFormElement {
        &self.named
    }

    fn named_mut(&mut self) -> &mut NamedFormElement {
        &mut self.named
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn extend_payload(&self, payload: &mut Map<String, Value>) {
        payload.insert("input_type".into(), Value::String(self.input_type.clone()));
        payload.insert("placeholder".into(), self.placeholder.clone().into());
    }
}

/// Hidden input
#[derive(Debug, Clone)]
pub struct Hidden {
    named: NamedFormElement,
}

impl Hidden {
    /// Create a hidden input
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            named: NamedFormElement::new(path, None),
        }
    }
}

impl FormElement for Hidden {
    fn named(&self) -> &NamedFormElement {
        &self.named
    }

    fn named_mut(&mut self) -> &mut NamedFormElement {
        &mut self.named
    }

    fn type_name(&self) -> &'static str {
        "Hidden"
    }
}
