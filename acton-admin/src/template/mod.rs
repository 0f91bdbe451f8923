//! Themed view rendering
//!
//! Columns and form elements name a view such as `column.text` or
//! `form.element.textarea`. The view id maps to a template file by
//! replacing dots with slashes: `column/text.html`.
//!
//! Templates are resolved in order:
//! 1. `<template_dir>/<theme>/<file>` when a template directory is configured
//! 2. `$XDG_CONFIG_HOME/acton-admin/templates/<theme>/<file>`
//! 3. Built-in defaults compiled into the binary
//!
//! # Example
//!
//! ```rust
//! use acton_admin::template::Templates;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), acton_admin::template::TemplateError> {
//! let templates = Templates::builtin()?;
//! let html = templates.render_json("column.header", &json!({
//!     "title": "Name",
//!     "orderable": true,
//! }))?;
//! assert!(html.contains("Name"));
//! # Ok(())
//! # }
//! ```

mod loader;
mod view;

pub use loader::{TemplateError, Templates};
pub use view::View;

/// Built-in templates of the default theme
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("column/header.html", include_str!("../../templates/default/column/header.html")),
    ("column/text.html", include_str!("../../templates/default/column/text.html")),
    ("column/custom.html", include_str!("../../templates/default/column/custom.html")),
    ("display/table.html", include_str!("../../templates/default/display/table.html")),
    ("form/default.html", include_str!("../../templates/default/form/default.html")),
    ("form/element/text.html", include_str!("../../templates/default/form/element/text.html")),
    ("form/element/textarea.html", include_str!("../../templates/default/form/element/textarea.html")),
    ("form/element/hidden.html", include_str!("../../templates/default/form/element/hidden.html")),
    ("form/element/password.html", include_str!("../../templates/default/form/element/password.html")),
    ("form/element/checkbox.html", include_str!("../../templates/default/form/element/checkbox.html")),
];

/// Map a view id (`column.text`) to its template file (`column/text.html`)
#[must_use]
pub fn view_file(view: &str) -> String {
    format!("{}.html", view.replace('.', "/"))
}
