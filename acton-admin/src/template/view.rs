//! Renderable views bound to a payload

use minijinja::Value;
use serde_json::Map;
use std::collections::BTreeMap;
use std::fmt;

use super::{TemplateError, Templates};

/// A view id bound to its render payload
///
/// Rendering is deferred until [`View::to_html`] is called or the view is
/// formatted with `Display`.
#[derive(Debug, Clone)]
pub struct View {
    templates: Templates,
    name: String,
    payload: Map<String, serde_json::Value>,
    markup: BTreeMap<String, String>,
}

impl View {
    /// Bind `payload` to the view called `name`
    #[must_use]
    pub fn new(templates: &Templates, name: impl Into<String>, payload: Map<String, serde_json::Value>) -> Self {
        Self {
            templates: templates.clone(),
            name: name.into(),
            payload,
            markup: BTreeMap::new(),
        }
    }

    /// Add pre-rendered, already escaped markup under `key`
    #[must_use]
    pub fn with_markup(mut self, key: impl Into<String>, html: impl Into<String>) -> Self {
        self.markup.insert(key.into(), html.into());
        self
    }

    /// View id
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound payload
    #[must_use]
    pub const fn payload(&self) -> &Map<String, serde_json::Value> {
        &self.payload
    }

    /// Render the view
    ///
    /// # Errors
    ///
    /// Returns error if the view is unknown or rendering fails.
    pub fn to_html(&self) -> Result<String, TemplateError> {
        let mut ctx: BTreeMap<&str, Value> = self
            .payload
            .iter()
            .map(|(key, value)| (key.as_str(), Value::from_serialize(value)))
            .collect();
        for (key, html) in &self.markup {
            ctx.insert(key.as_str(), Value::from_safe_string(html.clone()));
        }

        self.templates.render(&self.name, ctx)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_html() {
            Ok(html) => f.write_str(&html),
            Err(e) => {
                tracing::warn!(view = %self.name, error = %e, "view rendering failed");
                Err(fmt::Error)
            }
        }
    }
}
