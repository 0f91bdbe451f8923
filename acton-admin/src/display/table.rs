//! Tabular display of model rows

use std::sync::Arc;

use super::column::Column;
use crate::error::{AdminError, AdminResult};
use crate::model::Model;
use crate::query::{QueryBuilder, SortDirection};
use crate::template::{Templates, View};

/// Ordered set of columns rendered as a table
#[derive(Debug, Default)]
pub struct DisplayTable {
    columns: Vec<Box<dyn Column>>,
}

impl DisplayTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column
    #[must_use]
    pub fn column(mut self, column: impl Column + 'static) -> Self {
        self.columns.push(Box::new(column));
        self
    }

    /// Columns in display order
    #[must_use]
    pub fn columns(&self) -> &[Box<dyn Column>] {
        &self.columns
    }

    /// Apply the ordering of the column at `index`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidArgument`] if there is no such column
    /// or it is not orderable.
    pub fn apply_order(
        &self,
        query: &mut dyn QueryBuilder,
        index: usize,
        direction: SortDirection,
    ) -> AdminResult<()> {
        let column = self
            .columns
            .get(index)
            .ok_or_else(|| AdminError::InvalidArgument(format!("no column at index {index}")))?;
        column.column().order_by(query, direction)
    }

    /// Render headers and one row per model
    ///
    /// Each column is rebound to every row before the row is rendered.
    ///
    /// # Errors
    ///
    /// Returns error if any header or cell fails to render.
    pub fn render_rows(&mut self, templates: &Templates, rows: &[Arc<dyn Model>]) -> AdminResult<View> {
        let mut headers = String::new();
        for column in &self.columns {
            let column = column.column();
            headers.push_str(&column.header().render(templates, column.width())?.to_html()?);
        }

        let mut body = String::new();
        for row in rows {
            body.push_str("<tr>");
            for column in &mut self.columns {
                column.set_model(Arc::clone(row));
                body.push_str(&column.render(templates)?.to_html()?);
            }
            body.push_str("</tr>");
        }

        tracing::debug!(columns = self.columns.len(), rows = rows.len(), "rendered display table");
        Ok(View::new(templates, "display.table", serde_json::Map::new())
            .with_markup("headers", headers)
            .with_markup("body", body))
    }
}
