//! Relation descriptors
//!
//! A [`Relation`] describes how a parent model reaches a related model.
//! It carries a template instance of the related model and the key names,
//! never loaded data.

use serde_json::Value;

use super::Model;

/// Kind of relation a relation accessor returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Parent holds the foreign key of the related model
    BelongsTo,
    /// Related model holds the foreign key of the parent
    HasOne,
    /// Polymorphic has-one: related model holds the parent key and type
    MorphOne,
    /// Any other relation shape (has-many, many-to-many, ...)
    Other,
}

impl RelationKind {
    /// Get the relation kind as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs_to",
            Self::HasOne => "has_one",
            Self::MorphOne => "morph_one",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
struct MorphType {
    column: String,
    class: String,
}

/// Relation descriptor returned by a model's relation accessor
#[derive(Debug, Clone)]
pub struct Relation {
    kind: RelationKind,
    related: Box<dyn Model>,
    foreign_key: String,
    // owner key on the related model for belongs-to, local key on the parent otherwise
    other_key: String,
    morph: Option<MorphType>,
}

impl Relation {
    /// Parent holds `foreign_key`, pointing at `owner_key` of `related`
    pub fn belongs_to(
        related: impl Model + 'static,
        foreign_key: impl Into<String>,
        owner_key: impl Into<String>,
    ) -> Self {
        Self {
            kind: RelationKind::BelongsTo,
            related: Box::new(related),
            foreign_key: foreign_key.into(),
            other_key: owner_key.into(),
            morph: None,
        }
    }

    /// `related` holds `foreign_key`, pointing at `local_key` of the parent
    pub fn has_one(
        related: impl Model + 'static,
        foreign_key: impl Into<String>,
        local_key: impl Into<String>,
    ) -> Self {
        Self {
            kind: RelationKind::HasOne,
            related: Box::new(related),
            foreign_key: foreign_key.into(),
            other_key: local_key.into(),
            morph: None,
        }
    }

    /// Polymorphic has-one using the `{name}_id` and `{name}_type` columns
    pub fn morph_one(
        related: impl Model + 'static,
        name: &str,
        morph_class: impl Into<String>,
        local_key: impl Into<String>,
    ) -> Self {
        Self {
            kind: RelationKind::MorphOne,
            related: Box::new(related),
            foreign_key: format!("{name}_id"),
            other_key: local_key.into(),
            morph: Some(MorphType {
                column: format!("{name}_type"),
                class: morph_class.into(),
            }),
        }
    }

    /// A relation shape that single-value fields can not traverse
    pub fn other(related: impl Model + 'static) -> Self {
        Self {
            kind: RelationKind::Other,
            related: Box::new(related),
            foreign_key: String::new(),
            other_key: String::new(),
            morph: None,
        }
    }

    /// Relation kind
    #[must_use]
    pub const fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Template instance of the related model
    #[must_use]
    pub fn related(&self) -> &dyn Model {
        self.related.as_ref()
    }

    /// Foreign key column
    #[must_use]
    pub fn foreign_key(&self) -> &str {
        &self.foreign_key
    }

    /// Value of the parent key the related model points at
    ///
    /// Only meaningful for has-one and morph-one relations.
    #[must_use]
    pub fn parent_key(&self, parent: &dyn Model) -> Option<Value> {
        match self.kind {
            RelationKind::HasOne | RelationKind::MorphOne => parent.attribute(&self.other_key),
            RelationKind::BelongsTo | RelationKind::Other => None,
        }
    }

    /// Instantiate a new related model wired to `parent`
    ///
    /// For has-one and morph-one relations the foreign key (and morph type)
    /// are pre-populated from the parent. Other kinds yield a plain instance.
    #[must_use]
    pub fn make_related(&self, parent: &dyn Model) -> Box<dyn Model> {
        let mut related = self.related.new_instance();
        if matches!(self.kind, RelationKind::HasOne | RelationKind::MorphOne) {
            let key = self.parent_key(parent).unwrap_or(Value::Null);
            related.set_attribute(&self.foreign_key, key);
            if let Some(morph) = &self.morph {
                related.set_attribute(&morph.column, Value::String(morph.class.clone()));
            }
        }
        related
    }

    /// Associate `related` with `parent` through a belongs-to relation
    ///
    /// Copies the related owner key into the parent's foreign key and
    /// attaches `related` under `name`. Other kinds only attach.
    pub fn associate(&self, parent: &mut dyn Model, name: &str, related: Box<dyn Model>) {
        if self.kind == RelationKind::BelongsTo {
            let key = related.attribute(&self.other_key).unwrap_or(Value::Null);
            parent.set_attribute(&self.foreign_key, key);
        }
        parent.set_relation(name, related);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use serde_json::json;

    #[test]
    fn test_has_one_make_related_sets_foreign_key() {
        let parent = Record::persisted("users", json!(5));
        let relation = Relation::has_one(Record::new("profiles"), "user_id", "id");

        let related = relation.make_related(&parent);
        assert_eq!(related.table(), "profiles");
        assert!(!related.exists());
        assert_eq!(related.attribute("user_id"), Some(json!(5)));
    }

    #[test]
    fn test_morph_one_sets_type_column() {
        let parent = Record::persisted("posts", json!(9));
        let relation = Relation::morph_one(Record::new("images"), "imageable", "post", "id");

        assert_eq!(relation.foreign_key(), "imageable_id");

        let related = relation.make_related(&parent);
        assert_eq!(related.attribute("imageable_id"), Some(json!(9)));
        assert_eq!(related.attribute("imageable_type"), Some(json!("post")));
    }

    #[test]
    fn test_belongs_to_associate_copies_owner_key() {
        let mut post = Record::persisted("posts", json!(1));
        let relation = Relation::belongs_to(Record::new("users"), "author_id", "id");

        let author = Record::persisted("users", json!(42));
        relation.associate(&mut post, "author", Box::new(author));

        assert_eq!(post.attribute("author_id"), Some(json!(42)));
        assert!(post.loaded("author").is_some());
    }

    #[test]
    fn test_belongs_to_associate_new_instance_nulls_foreign_key() {
        let mut post = Record::persisted("posts", json!(1));
        post.set_attribute("author_id", json!(3));
        let relation = Relation::belongs_to(Record::new("users"), "author_id", "id");

        let fresh = relation.related().new_instance();
        relation.associate(&mut post, "author", fresh);

        assert_eq!(post.attribute("author_id"), Some(Value::Null));
    }

    #[test]
    fn test_parent_key_only_for_has_relations() {
        let parent = Record::persisted("users", json!(5));
        let belongs = Relation::belongs_to(Record::new("teams"), "team_id", "id");
        assert_eq!(belongs.parent_key(&parent), None);
        assert_eq!(RelationKind::MorphOne.to_string(), "morph_one");
    }
}
