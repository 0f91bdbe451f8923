//! Ordering clauses for sortable columns

use std::fmt;
use std::sync::Arc;

use crate::query::{QueryBuilder, SortDirection};

/// Strategy that applies "order by" semantics to a query
pub trait OrderByClause: fmt::Debug + Send + Sync {
    /// Mutate `query` to sort in `direction`
    fn modify_query(&self, query: &mut dyn QueryBuilder, direction: SortDirection);
}

/// Closure form of an ordering clause
pub type OrderCallback = Arc<dyn Fn(&mut dyn QueryBuilder, SortDirection) + Send + Sync>;

/// Ordering clause built from a column name or a closure
#[derive(Clone)]
pub enum OrderBy {
    /// Order by a column (qualified names such as `users.name` pass through)
    Column(String),
    /// Let a closure modify the query
    Callback(OrderCallback),
}

impl OrderBy {
    /// Order by `column`
    #[must_use]
    pub fn column(column: impl Into<String>) -> Self {
        Self::Column(column.into())
    }

    /// Order with a closure
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&mut dyn QueryBuilder, SortDirection) + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }
}

impl fmt::Debug for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(column) => f.debug_tuple("Column").field(column).finish(),
            Self::Callback(_) => f.debug_tuple("Callback").finish_non_exhaustive(),
        }
    }
}

impl OrderByClause for OrderBy {
    fn modify_query(&self, query: &mut dyn QueryBuilder, direction: SortDirection) {
        match self {
            Self::Column(column) => query.order_by(column, direction),
            Self::Callback(callback) => callback(query, direction),
        }
    }
}

/// Argument accepted by `set_orderable`
///
/// `false` disables ordering. A column name or closure is wrapped into an
/// [`OrderBy`] clause. `true` and empty column names are rejected.
pub enum Orderable {
    /// Boolean flag; only `false` is valid
    Flag(bool),
    /// Column name
    Column(String),
    /// Closure
    Callback(OrderCallback),
    /// Explicit clause
    Clause(Box<dyn OrderByClause>),
}

impl Orderable {
    /// Wrap a closure
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&mut dyn QueryBuilder, SortDirection) + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Wrap an explicit clause
    pub fn clause(clause: impl OrderByClause + 'static) -> Self {
        Self::Clause(Box::new(clause))
    }
}

impl fmt::Debug for Orderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Self::Column(column) => f.debug_tuple("Column").field(column).finish(),
            Self::Callback(_) => f.debug_tuple("Callback").finish_non_exhaustive(),
            Self::Clause(clause) => f.debug_tuple("Clause").field(clause).finish(),
        }
    }
}

impl From<bool> for Orderable {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for Orderable {
    fn from(column: &str) -> Self {
        Self::Column(column.to_string())
    }
}

impl From<String> for Orderable {
    fn from(column: String) -> Self {
        Self::Column(column)
    }
}

impl From<OrderBy> for Orderable {
    fn from(clause: OrderBy) -> Self {
        Self::Clause(Box::new(clause))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{MockQueryBuilder, SelectQuery};

    #[test]
    fn test_column_clause_orders_query() {
        let mut query = SelectQuery::new("users");
        OrderBy::column("name").modify_query(&mut query, SortDirection::Desc);
        assert_eq!(query.orders(), &[("name".to_string(), SortDirection::Desc)]);
    }

    #[test]
    fn test_callback_clause_receives_direction() {
        let clause = OrderBy::callback(|query, direction| {
            query.order_by("last_name", direction);
            query.order_by("first_name", direction);
        });

        let mut query = SelectQuery::new("users");
        clause.modify_query(&mut query, SortDirection::Asc);
        assert_eq!(query.orders().len(), 2);
        assert_eq!(format!("{clause:?}"), "Callback(..)");
    }

    #[test]
    fn test_orderable_conversions() {
        assert!(matches!(Orderable::from(false), Orderable::Flag(false)));
        assert!(matches!(Orderable::from("email"), Orderable::Column(c) if c == "email"));
        assert!(matches!(Orderable::from(OrderBy::column("id")), Orderable::Clause(_)));
    }

    #[test]
    fn test_column_clause_calls_builder_once() {
        let mut query = MockQueryBuilder::new();
        query
            .expect_order_by()
            .withf(|column, direction| column == "users.name" && *direction == SortDirection::Desc)
            .times(1)
            .return_const(());

        OrderBy::column("users.name").modify_query(&mut query, SortDirection::Desc);
    }
}
