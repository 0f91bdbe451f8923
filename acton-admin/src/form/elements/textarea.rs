//! Multi-line text element

use serde_json::{Map, Value};

use crate::config::FormSettings;
use crate::form::{FormElement, NamedFormElement};

const DEFAULT_ROWS: u32 = 10;

/// Multi-line text input with a row count
#[derive(Debug, Clone)]
pub struct Textarea {
    named: NamedFormElement,
    rows: u32,
}

impl Textarea {
    /// Create a textarea with 10 rows
    #[must_use]
    pub fn new(path: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            named: NamedFormElement::new(path, label),
            rows: DEFAULT_ROWS,
        }
    }

    /// Create a textarea using the configured default row count
    #[must_use]
    pub fn from_settings(path: impl Into<String>, label: Option<&str>, settings: &FormSettings) -> Self {
        let mut textarea = Self::new(path, label);
        textarea.set_rows(i64::from(settings.textarea_rows));
        textarea
    }

    /// Number of visible rows
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Set the number of visible rows, never fewer than one
    pub fn set_rows(&mut self, rows: i64) -> &mut Self {
        self.rows = u32::try_from(rows.max(1)).unwrap_or(u32::MAX);
        self
    }
}

impl FormElement for Textarea {
    fn named(&self) -> &NamedFormElement {
        &self.named
    }

    fn named_mut(&mut self) -> &mut NamedFormElement {
        &mut self.named
    }

    fn type_name(&self) -> &'static str {
        "Textarea"
    }

    fn extend_payload(&self, payload: &mut Map<String, Value>) {
        payload.insert("rows".into(), Value::from(self.rows));
    }
}
