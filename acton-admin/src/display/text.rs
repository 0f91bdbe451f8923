//! Column showing an attribute by dotted path

use serde_json::{Map, Value};

use super::column::{Column, TableColumn};
use crate::model::walk_loaded;
use crate::path;

/// Displays the attribute at `path`, following loaded relations
///
/// # Example
///
/// ```rust
/// use acton_admin::display::{Column, Text};
/// use acton_admin::model::{Model, Record};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let mut column = Text::new("author.name", "Author");
/// let post = Record::persisted("posts", json!(1))
///     .with_loaded("author", Record::persisted("users", json!(2)).with_attribute("name", "Ann"));
/// column.set_model(Arc::new(post));
///
/// assert_eq!(column.value(), Some(json!("Ann")));
/// ```
#[derive(Debug)]
pub struct Text {
    column: TableColumn,
    path: String,
}

impl Text {
    /// Create a text column, orderable by its path
    #[must_use]
    pub fn new(path: impl Into<String>, label: &str) -> Self {
        let path = path.into();
        let mut column = TableColumn::new(Some(label));
        if let Err(e) = column.set_orderable(path.as_str()) {
            tracing::warn!(%path, error = %e, "text column left unorderable");
        }
        Self { column, path }
    }

    /// Dotted attribute path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Value of the bound row, if a model is bound and the path resolves
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        let model = self.column.model()?;
        let segments = path::segments(&self.path);
        let (attribute, relations) = segments.split_last()?;
        walk_loaded(model, relations)?.attribute(attribute)
    }
}

impl Column for Text {
    fn column(&self) -> &TableColumn {
        &self.column
    }

    fn column_mut(&mut self) -> &mut TableColumn {
        &mut self.column
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn extend_payload(&self, payload: &mut Map<String, Value>) {
        payload.insert("name".into(), Value::String(self.path.clone()));
        payload.insert("value".into(), self.value().unwrap_or(Value::Null));
    }
}
