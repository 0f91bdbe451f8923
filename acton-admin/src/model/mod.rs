//! Model contract consumed by columns and form elements
//!
//! Columns and form elements never talk to a database. They read and write
//! attributes, walk loaded relations, and ask a model for relation
//! descriptors. Anything that implements [`Model`] can be bound to them;
//! [`Record`] is a dynamic implementation for callers without their own
//! entity types.
//!
//! # Example
//!
//! ```rust
//! use acton_admin::model::{Model, Record, Relation};
//! use serde_json::json;
//!
//! let profile = Record::new("profiles");
//! let mut user = Record::persisted("users", json!(7))
//!     .with_relation("profile", Relation::has_one(profile, "user_id", "id"));
//! user.set_attribute("email", json!("ann@example.com"));
//!
//! assert!(user.exists());
//! assert_eq!(user.key(), Some(json!(7)));
//! assert!(user.relation("profile").is_some());
//! ```

mod record;
mod relation;

pub use record::Record;
pub use relation::{Relation, RelationKind};

use serde_json::Value;
use std::fmt;

/// An ORM-style model instance
///
/// Attribute values are dynamic JSON values. Loaded relations are owned by
/// their parent model; relation descriptors are produced on demand and
/// never hold data.
pub trait Model: fmt::Debug + Send + Sync {
    /// Underlying table name
    fn table(&self) -> &str;

    /// Name of the primary key attribute
    fn key_name(&self) -> &str {
        "id"
    }

    /// Primary key value, if set
    fn key(&self) -> Option<Value> {
        self.attribute(self.key_name()).filter(|v| !v.is_null())
    }

    /// Whether the model is backed by a persisted row
    fn exists(&self) -> bool;

    /// Read an attribute
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Write an attribute (in memory only)
    fn set_attribute(&mut self, name: &str, value: Value);

    /// A related model that is already loaded under `relation`
    fn loaded(&self, relation: &str) -> Option<&dyn Model>;

    /// Mutable access to a loaded related model
    fn loaded_mut(&mut self, relation: &str) -> Option<&mut dyn Model>;

    /// Attach a related model under `relation`
    fn set_relation(&mut self, relation: &str, model: Box<dyn Model>);

    /// Relation accessor: describe the relation called `name`, if the model defines one
    fn relation(&self, name: &str) -> Option<Relation>;

    /// A fresh, non-persisted instance of the same model type
    fn new_instance(&self) -> Box<dyn Model>;

    /// Clone into a boxed trait object
    fn box_clone(&self) -> Box<dyn Model>;

    /// Serialize attributes (and loaded relations) for render payloads
    fn to_json(&self) -> Value;
}

impl Clone for Box<dyn Model> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Follow already-loaded relations along `segments`
///
/// Returns `None` as soon as a segment is not loaded.
#[must_use]
pub fn walk_loaded<'m>(model: &'m dyn Model, segments: &[&str]) -> Option<&'m dyn Model> {
    segments
        .iter()
        .try_fold(model, |current, segment| current.loaded(segment))
}
