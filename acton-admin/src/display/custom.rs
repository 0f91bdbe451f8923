//! Column rendering a closure's output

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use super::column::{Column, TableColumn};
use crate::model::Model;

type CustomCallback = Arc<dyn Fn(&dyn Model) -> String + Send + Sync>;

/// Displays whatever a closure computes from the row model
pub struct Custom {
    column: TableColumn,
    callback: CustomCallback,
}

impl Custom {
    /// Create a custom column
    pub fn new<F>(label: &str, callback: F) -> Self
    where
        F: Fn(&dyn Model) -> String + Send + Sync + 'static,
    {
        Self {
            column: TableColumn::new(Some(label)),
            callback: Arc::new(callback),
        }
    }

    /// Computed value for the bound row
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.column.model().map(|model| (self.callback)(model))
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}

impl Column for Custom {
    fn column(&self) -> &TableColumn {
        &self.column
    }

    fn column_mut(&mut self) -> &mut TableColumn {
        &mut self.column
    }

    fn type_name(&self) -> &'static str {
        "Custom"
    }

    fn extend_payload(&self, payload: &mut Map<String, Value>) {
        payload.insert("value".into(), self.value().map_or(Value::Null, Value::String));
    }
}
