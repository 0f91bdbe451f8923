//! Dynamic in-memory model

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{Model, Relation};

/// A schemaless model backed by a JSON attribute map
///
/// Relation accessors are declared up front with [`Record::with_relation`];
/// loaded relations are attached with [`Model::set_relation`].
#[derive(Debug, Clone)]
pub struct Record {
    table: String,
    key_name: String,
    exists: bool,
    attributes: Map<String, Value>,
    loaded: BTreeMap<String, Box<dyn Model>>,
    relations: BTreeMap<String, Relation>,
}

impl Record {
    /// Create a new, non-persisted record for `table`
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key_name: "id".to_string(),
            exists: false,
            attributes: Map::new(),
            loaded: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Create a record that represents a persisted row with primary key `key`
    #[must_use]
    pub fn persisted(table: impl Into<String>, key: impl Into<Value>) -> Self {
        let mut record = Self::new(table);
        record.attributes.insert(record.key_name.clone(), key.into());
        record.exists = true;
        record
    }

    /// Use a primary key attribute other than `id`
    #[must_use]
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        let key_name = key_name.into();
        if let Some(key) = self.attributes.remove(&self.key_name) {
            self.attributes.insert(key_name.clone(), key);
        }
        self.key_name = key_name;
        self
    }

    /// Set an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Declare a relation accessor
    #[must_use]
    pub fn with_relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        self.relations.insert(name.into(), relation);
        self
    }

    /// Attach an already-loaded related model
    #[must_use]
    pub fn with_loaded(mut self, name: impl Into<String>, model: impl Model + 'static) -> Self {
        self.loaded.insert(name.into(), Box::new(model));
        self
    }

    /// All attributes
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl Model for Record {
    fn table(&self) -> &str {
        &self.table
    }

    fn key_name(&self) -> &str {
        &self.key_name
    }

    fn exists(&self) -> bool {
        self.exists
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: Value) {
        self.attributes.insert(name.to_string(), value);
    }

    fn loaded(&self, relation: &str) -> Option<&dyn Model> {
        self.loaded.get(relation).map(|model| &**model)
    }

    fn loaded_mut(&mut self, relation: &str) -> Option<&mut dyn Model> {
        match self.loaded.get_mut(relation) {
            Some(model) => Some(model.as_mut()),
            None => None,
        }
    }

    fn set_relation(&mut self, relation: &str, model: Box<dyn Model>) {
        self.loaded.insert(relation.to_string(), model);
    }

    fn relation(&self, name: &str) -> Option<Relation> {
        self.relations.get(name).cloned()
    }

    fn new_instance(&self) -> Box<dyn Model> {
        Box::new(Self {
            table: self.table.clone(),
            key_name: self.key_name.clone(),
            exists: false,
            attributes: Map::new(),
            loaded: BTreeMap::new(),
            relations: self.relations.clone(),
        })
    }

    fn box_clone(&self) -> Box<dyn Model> {
        Box::new(self.clone())
    }

    fn to_json(&self) -> Value {
        let mut object = self.attributes.clone();
        for (name, model) in &self.loaded {
            object.insert(name.clone(), model.to_json());
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_is_not_persisted() {
        let record = Record::new("users");
        assert!(!record.exists());
        assert_eq!(record.key(), None);
        assert_eq!(record.table(), "users");
    }

    #[test]
    fn test_custom_key_name() {
        let record = Record::persisted("users", json!("u-1")).with_key_name("uuid");
        assert_eq!(record.key_name(), "uuid");
        assert_eq!(record.key(), Some(json!("u-1")));
        assert_eq!(record.attribute("id"), None);
    }

    #[test]
    fn test_new_instance_keeps_relations_but_drops_data() {
        let record = Record::persisted("users", json!(1))
            .with_attribute("email", "a@b.c")
            .with_relation("profile", Relation::has_one(Record::new("profiles"), "user_id", "id"))
            .with_loaded("team", Record::persisted("teams", json!(2)));

        let fresh = record.new_instance();
        assert!(!fresh.exists());
        assert_eq!(fresh.attribute("email"), None);
        assert!(fresh.loaded("team").is_none());
        assert!(fresh.relation("profile").is_some());
    }

    #[test]
    fn test_to_json_includes_loaded_relations() {
        let record = Record::persisted("users", json!(1))
            .with_attribute("name", "Ann")
            .with_loaded("team", Record::persisted("teams", json!(2)).with_attribute("name", "Ops"));

        assert_eq!(
            record.to_json(),
            json!({"id": 1, "name": "Ann", "team": {"id": 2, "name": "Ops"}})
        );
    }

    #[test]
    fn test_loaded_mut_allows_nested_writes() {
        let mut record =
            Record::persisted("users", json!(1)).with_loaded("profile", Record::persisted("profiles", json!(4)));

        if let Some(profile) = record.loaded_mut("profile") {
            profile.set_attribute("bio", json!("updated"));
        }
        assert_eq!(
            record.loaded("profile").and_then(|p| p.attribute("bio")),
            Some(json!("updated"))
        );
    }
}
