//! Read-only tabular display
//!
//! Columns are declared once per display and rebound to each row model.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_admin::display::{Column, DisplayTable, Text};
//! use acton_admin::model::{Model, Record};
//! use acton_admin::query::{SelectQuery, SortDirection};
//! use acton_admin::template::Templates;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # fn example() -> acton_admin::error::AdminResult<()> {
//! let templates = Templates::builtin()?;
//! let mut table = DisplayTable::new()
//!     .column(Text::new("name", "Name"))
//!     .column(Text::new("email", "Email"));
//!
//! let mut query = SelectQuery::new("users");
//! table.apply_order(&mut query, 0, SortDirection::Asc)?;
//!
//! let rows: Vec<Arc<dyn Model>> = vec![Arc::new(
//!     Record::persisted("users", json!(1)).with_attribute("name", "Ann"),
//! )];
//! let html = table.render_rows(&templates, &rows)?.to_html()?;
//! assert!(html.contains("Ann"));
//! # Ok(())
//! # }
//! ```

mod column;
mod custom;
mod header;
mod order;
mod table;
mod text;

pub use column::{Column, TableColumn};
pub use custom::Custom;
pub use header::TableHeader;
pub use order::{OrderBy, OrderByClause, OrderCallback, Orderable};
pub use table::DisplayTable;
pub use text::Text;
