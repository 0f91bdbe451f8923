//! acton-admin: model-bound table columns and form elements for admin panels
//!
//! Two cooperating building blocks:
//! - [`display`]: read-only table columns bound to row models, with
//!   optional ordering clauses and chained "append" columns
//! - [`form`]: editable elements addressed by dotted paths
//!   (`author.profile.bio`) that read values from the request or the model,
//!   synthesize validation rules and write submitted values back through
//!   model relations
//!
//! Models are reached through the [`model::Model`] trait; persisting a
//! saved model stays with the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_admin::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AdminConfig::default();
//! let templates = Templates::from_settings(&config.templates)?;
//!
//! // Display
//! let mut table = DisplayTable::new().column(TextColumn::new("name", "Name"));
//! let rows: Vec<Arc<dyn Model>> = vec![Arc::new(
//!     Record::persisted("users", json!(1)).with_attribute("name", "Ann"),
//! )];
//! println!("{}", table.render_rows(&templates, &rows)?);
//!
//! // Form
//! let form = AdminForm::new("/admin/users/1")
//!     .element(Textarea::from_settings("bio", Some("Bio"), &config.forms));
//! let mut user = Record::persisted("users", json!(1));
//! let request = InputBag::new().with_input(json!({"bio": "Hello"}));
//! form.save(&request, &mut user)?;
//! assert_eq!(user.attribute("bio"), Some(json!("Hello")));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod html;
pub mod model;
pub mod observability;
pub mod path;
pub mod query;
pub mod request;
pub mod template;

/// Commonly used types
pub mod prelude {
    pub use crate::config::{AdminConfig, FormSettings, PasswordHashing, TemplateSettings};
    pub use crate::display::{
        Column, Custom as CustomColumn, DisplayTable, OrderBy, OrderByClause, Orderable, TableColumn,
        TableHeader, Text as TextColumn,
    };
    pub use crate::error::{AdminError, AdminResult};
    pub use crate::form::{
        AdminForm, Checkbox, FormElement, Hidden, NamedFormElement, Password, Text, Textarea,
        ValidationErrors, Validator,
    };
    pub use crate::html::HtmlAttributes;
    pub use crate::model::{Model, Record, Relation, RelationKind};
    pub use crate::query::{QueryBuilder, SelectQuery, SortDirection};
    pub use crate::request::{InputBag, RequestContext};
    pub use crate::template::{TemplateError, Templates, View};
}
