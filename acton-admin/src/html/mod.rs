//! HTML attribute bags for columns and form elements
//!
//! Attributes keep insertion order so rendered markup is stable.
//! The `class` attribute is kept as a de-duplicated list.

use std::fmt;

/// Ordered collection of HTML attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
}

impl HtmlAttributes {
    /// Create an empty attribute bag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value
    ///
    /// Setting `class` appends to the class list instead.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();

        if name == "class" {
            for class in value.split_whitespace() {
                self.add_class(class);
            }
            return self;
        }

        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Get an attribute value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is set
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        if name == "class" {
            return !self.classes.is_empty();
        }
        self.get(name).is_some()
    }

    /// Remove an attribute
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if name == "class" {
            self.classes.clear();
        } else {
            self.attributes.retain(|(n, _)| n != name);
        }
        self
    }

    /// Add a CSS class if not already present
    pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Check whether a CSS class is present
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether no attribute or class is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.classes.is_empty()
    }
}

impl fmt::Display for HtmlAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.classes.is_empty() {
            write!(f, r#"class="{}""#, escape_attr(&self.classes.join(" ")))?;
            first = false;
        }
        for (name, value) in &self.attributes {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, r#"{}="{}""#, name, escape_attr(value))?;
            first = false;
        }
        Ok(())
    }
}

/// Escape a string for use in HTML attribute values
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
