//! Table column header

use serde::Serialize;

use crate::error::AdminResult;
use crate::template::{Templates, View};

/// Header cell of a table column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableHeader {
    title: Option<String>,
    orderable: bool,
}

impl TableHeader {
    /// Create an untitled, non-orderable header
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Header title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the header title
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the header advertises sorting
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        self.orderable
    }

    /// Set the orderable flag
    pub fn set_orderable(&mut self, orderable: bool) -> &mut Self {
        self.orderable = orderable;
        self
    }

    /// Render the header cell, optionally with a column width
    ///
    /// # Errors
    ///
    /// Returns error if the `column.header` view cannot be rendered.
    pub fn render(&self, templates: &Templates, width: Option<&str>) -> AdminResult<View> {
        let mut payload = serde_json::Map::new();
        payload.insert("title".into(), self.title.clone().into());
        payload.insert("orderable".into(), self.orderable.into());
        payload.insert("width".into(), width.map(ToString::to_string).into());
        Ok(View::new(templates, "column.header", payload))
    }
}
