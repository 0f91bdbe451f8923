//! Base table column
//!
//! [`TableColumn`] holds the state every column shares: header, bound row
//! model, appended column, width, view override, ordering clause and HTML
//! attributes. Concrete columns embed it and implement [`Column`].

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use super::header::TableHeader;
use super::order::{OrderBy, OrderByClause, Orderable};
use crate::error::{AdminError, AdminResult};
use crate::html::HtmlAttributes;
use crate::model::Model;
use crate::query::{QueryBuilder, SortDirection};
use crate::template::{Templates, View};

/// A column of an admin table
pub trait Column: fmt::Debug + Send + Sync {
    /// Shared column state
    fn column(&self) -> &TableColumn;

    /// Mutable shared column state
    fn column_mut(&mut self) -> &mut TableColumn;

    /// Short type name; the default view is `column.<lowercase name>`
    fn type_name(&self) -> &'static str;

    /// Add type-specific entries to the render payload
    fn extend_payload(&self, _payload: &mut Map<String, Value>) {}

    /// View id used to render the column
    fn view(&self) -> String {
        self.column()
            .view_override()
            .map_or_else(|| format!("column.{}", self.type_name().to_lowercase()), ToString::to_string)
    }

    /// Bind the row model (propagated to the appended column)
    fn set_model(&mut self, model: Arc<dyn Model>) {
        self.column_mut().set_model(model);
    }

    /// Render payload: base payload plus type-specific entries
    fn to_payload(&self) -> Map<String, Value> {
        let mut payload = self.column().base_payload();
        self.extend_payload(&mut payload);
        payload
    }

    /// Bind the payload to the column's view
    ///
    /// # Errors
    ///
    /// Returns error if the appended column cannot be rendered.
    fn render(&self, templates: &Templates) -> AdminResult<View> {
        let column = self.column();
        let mut view = View::new(templates, self.view(), self.to_payload())
            .with_markup("attributes", column.attributes().to_string());

        if let Some(append) = column.appends() {
            let html = append.render(templates)?.to_html()?;
            view = view.with_markup("append", html);
        }

        Ok(view)
    }
}

/// State shared by all columns
#[derive(Default)]
pub struct TableColumn {
    header: TableHeader,
    model: Option<Arc<dyn Model>>,
    append: Option<Box<dyn Column>>,
    width: Option<String>,
    view: Option<String>,
    order_by: Option<Box<dyn OrderByClause>>,
    attributes: HtmlAttributes,
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("header", &self.header)
            .field("model", &self.model)
            .field("append", &self.append)
            .field("width", &self.width)
            .field("view", &self.view)
            .field("order_by", &self.order_by)
            .finish_non_exhaustive()
    }
}

impl TableColumn {
    /// Create a column, titling its header when a label is given
    #[must_use]
    pub fn new(label: Option<&str>) -> Self {
        let mut column = Self::default();
        if let Some(label) = label {
            column.set_label(label);
        }
        column
    }

    /// Column header
    #[must_use]
    pub const fn header(&self) -> &TableHeader {
        &self.header
    }

    /// Set the header title
    pub fn set_label(&mut self, title: impl Into<String>) -> &mut Self {
        self.header.set_title(title);
        self
    }

    /// Column width
    #[must_use]
    pub fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    /// Set the column width (any CSS length)
    pub fn set_width(&mut self, width: impl Into<String>) -> &mut Self {
        self.width = Some(width.into());
        self
    }

    /// Explicit view id, if one was set
    #[must_use]
    pub fn view_override(&self) -> Option<&str> {
        self.view.as_deref()
    }

    /// Override the view id
    pub fn set_view(&mut self, view: impl Into<String>) -> &mut Self {
        self.view = Some(view.into());
        self
    }

    /// Appended column
    #[must_use]
    pub fn appends(&self) -> Option<&dyn Column> {
        self.append.as_deref()
    }

    /// Append a column rendered inside this one
    pub fn append(&mut self, append: impl Column + 'static) -> &mut Self {
        self.append = Some(Box::new(append));
        self
    }

    /// Bound row model
    #[must_use]
    pub fn model(&self) -> Option<&dyn Model> {
        self.model.as_deref()
    }

    /// Bind the row model and hand the same model to the appended column
    pub fn set_model(&mut self, model: Arc<dyn Model>) -> &mut Self {
        if let Some(append) = self.append.as_mut() {
            append.set_model(Arc::clone(&model));
        }
        self.model = Some(model);
        self
    }

    /// HTML attributes of the cell
    #[must_use]
    pub const fn attributes(&self) -> &HtmlAttributes {
        &self.attributes
    }

    /// Mutable HTML attributes of the cell
    pub fn attributes_mut(&mut self) -> &mut HtmlAttributes {
        &mut self.attributes
    }

    /// Make the column sortable, or not
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidArgument`] for `true` or an empty column name.
    pub fn set_orderable(&mut self, orderable: impl Into<Orderable>) -> AdminResult<&mut Self> {
        let clause: Option<Box<dyn OrderByClause>> = match orderable.into() {
            Orderable::Flag(false) => None,
            Orderable::Flag(true) => {
                return Err(AdminError::InvalidArgument(
                    "orderable must be a column name, a closure, an ordering clause or false".into(),
                ))
            }
            Orderable::Column(column) if column.trim().is_empty() => {
                return Err(AdminError::InvalidArgument(
                    "orderable column name must not be empty".into(),
                ))
            }
            Orderable::Column(column) => Some(Box::new(OrderBy::Column(column))),
            Orderable::Callback(callback) => Some(Box::new(OrderBy::Callback(callback))),
            Orderable::Clause(clause) => Some(clause),
        };

        self.order_by = clause;
        let orderable = self.is_orderable();
        self.header.set_orderable(orderable);
        Ok(self)
    }

    /// Whether an ordering clause is attached
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        self.order_by.is_some()
    }

    /// Apply the ordering clause to `query`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidArgument`] if the column is not orderable.
    pub fn order_by(&self, query: &mut dyn QueryBuilder, direction: SortDirection) -> AdminResult<()> {
        let Some(clause) = self.order_by.as_ref() else {
            return Err(AdminError::InvalidArgument(
                "column is not orderable; set an ordering clause first".into(),
            ));
        };

        tracing::trace!(?clause, %direction, "ordering by column");
        clause.modify_query(query, direction);
        Ok(())
    }

    /// Payload shared by all columns
    #[must_use]
    pub fn base_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("attributes".into(), Value::String(self.attributes.to_string()));
        payload.insert(
            "model".into(),
            self.model.as_ref().map_or(Value::Null, |model| model.to_json()),
        );
        payload.insert(
            "append".into(),
            self.append
                .as_ref()
                .map_or(Value::Null, |append| Value::Object(append.to_payload())),
        );
        payload.insert("width".into(), self.width.clone().into());
        payload.insert("title".into(), self.header.title().map(ToString::to_string).into());
        payload
    }
}
