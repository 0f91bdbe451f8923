//! Query builder contract used by orderable columns

use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

/// Sort direction requested for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending (default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// Get the SQL keyword
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AdminError::InvalidArgument(format!(
                "sort direction must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

/// A query that can be sorted
#[cfg_attr(test, mockall::automock)]
pub trait QueryBuilder {
    /// Append an ordering on `column`
    fn order_by(&mut self, column: &str, direction: SortDirection);
}

/// Minimal `SELECT` statement builder
///
/// # Example
///
/// ```rust
/// use acton_admin::query::{QueryBuilder, SelectQuery, SortDirection};
///
/// let mut query = SelectQuery::new("users");
/// query.order_by("name", SortDirection::Asc);
/// query.order_by("created_at", SortDirection::Desc);
///
/// assert_eq!(
///     query.to_sql(),
///     r#"SELECT * FROM "users" ORDER BY "name" ASC, "created_at" DESC"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    table: String,
    orders: Vec<(String, SortDirection)>,
}

impl SelectQuery {
    /// Select everything from `table`
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            orders: Vec::new(),
        }
    }

    /// Applied orderings, in order
    #[must_use]
    pub fn orders(&self) -> &[(String, SortDirection)] {
        &self.orders
    }

    /// Render the statement as SQL
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT * FROM {}", quote_ident(&self.table));
        if !self.orders.is_empty() {
            let orders: Vec<String> = self
                .orders
                .iter()
                .map(|(column, direction)| {
                    format!("{} {}", quote_ident(column), direction.as_str().to_uppercase())
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&orders.join(", "));
        }
        sql
    }
}

impl QueryBuilder for SelectQuery {
    fn order_by(&mut self, column: &str, direction: SortDirection) {
        self.orders.push((column.to_string(), direction));
    }
}

fn quote_ident(ident: &str) -> String {
    ident
        .split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}
