//! Path-bound form element state
//!
//! A [`NamedFormElement`] is addressed by a dotted path such as
//! `author.profile.bio`. The path decides the HTML field name
//! (`author[profile][bio]`), where the current value is read from, how the
//! `_unique` rule is expanded and which relations are crossed on save.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::element::ElementValidation;
use crate::error::{AdminError, AdminResult};
use crate::html::HtmlAttributes;
use crate::model::{Model, RelationKind};
use crate::path;
use crate::request::RequestContext;

/// Pure transformation applied to a submitted value before assignment
pub type ValueMutator = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Sentinel rule expanded into a `unique:` rule for the resolved model
pub const UNIQUE_RULE: &str = "_unique";

/// State and behavior shared by every path-bound element
#[derive(Clone)]
pub struct NamedFormElement {
    path: String,
    name: String,
    attribute: String,
    label: Option<String>,
    help_text: Option<String>,
    readonly: bool,
    default_value: Option<Value>,
    mutator: Option<ValueMutator>,
    validation: ElementValidation,
    view: Option<String>,
    attributes: HtmlAttributes,
}

impl fmt::Debug for NamedFormElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFormElement")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("readonly", &self.readonly)
            .field("has_mutator", &self.has_mutator())
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl NamedFormElement {
    /// Create an element bound to the dotted `path`
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_admin::form::NamedFormElement;
    ///
    /// let element = NamedFormElement::new("author.profile.bio", Some("Bio"));
    /// assert_eq!(element.name(), "author[profile][bio]");
    /// assert_eq!(element.attribute(), "bio");
    /// ```
    #[must_use]
    pub fn new(path: impl Into<String>, label: Option<&str>) -> Self {
        let path = path.into();
        let segments = path::segments(&path);
        let name = path::compose_name(&segments);
        let attribute = segments.last().copied().unwrap_or_default().to_string();

        Self {
            name,
            attribute,
            path,
            label: label.map(ToString::to_string),
            help_text: None,
            readonly: false,
            default_value: None,
            mutator: None,
            validation: ElementValidation::new(),
            view: None,
            attributes: HtmlAttributes::new(),
        }
    }

    /// Dotted path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bracketed HTML field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute written on the final model (last path segment)
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Label
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set the label
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Help text shown below the field
    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    /// Set the help text
    pub fn set_help_text(&mut self, help_text: impl Into<String>) -> &mut Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Whether the field is read-only
    #[must_use]
    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Mark the field read-only
    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.readonly = readonly;
        self
    }

    /// Value shown for new records
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Set the value shown for new records
    pub fn set_default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default_value = Some(value.into());
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

    /// HTML attributes of the field
    #[must_use]
    pub const fn attributes(&self) -> &HtmlAttributes {
        &self.attributes
    }

    /// Mutable HTML attributes of the field
    pub fn attributes_mut(&mut self) -> &mut HtmlAttributes {
        &mut self.attributes
    }

    /// Validation state
    #[must_use]
    pub const fn validation(&self) -> &ElementValidation {
        &self.validation
    }

    /// Append a rule, registering `message` for it when given
    pub fn add_validation_rule(&mut self, rule: impl Into<String>, message: Option<&str>) -> &mut Self {
        let rule = rule.into();
        if let Some(message) = message {
            self.validation.add_message(&rule, message);
        }
        self.validation.add_rule(rule);
        self
    }

    /// Shortcut for the `required` rule
    pub fn required(&mut self, message: Option<&str>) -> &mut Self {
        self.add_validation_rule("required", message)
    }

    /// Shortcut for a uniqueness rule against the model's table
    pub fn unique(&mut self, message: Option<&str>) -> &mut Self {
        self.add_validation_rule(UNIQUE_RULE, message)
    }

    /// Register a custom message; `min:5` is keyed as `min`
    pub fn add_validation_message(&mut self, rule: &str, message: impl Into<String>) -> &mut Self {
        self.validation.add_message(rule, message);
        self
    }

    /// Replace all custom messages (keyed by rule name)
    pub fn set_validation_messages(&mut self, messages: BTreeMap<String, String>) -> &mut Self {
        self.validation.set_messages(messages);
        self
    }

    /// Custom messages keyed by `<name>.<rule>`
    ///
    /// A message given for `_unique` is keyed under the expanded `unique` rule.
    #[must_use]
    pub fn validation_messages(&self) -> BTreeMap<String, String> {
        self.validation
            .messages()
            .iter()
            .map(|(rule, message)| {
                let rule = if rule == UNIQUE_RULE { "unique" } else { rule.as_str() };
                (format!("{}.{rule}", self.name), message.clone())
            })
            .collect()
    }

    /// Label keyed by path
    #[must_use]
    pub fn validation_labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(self.path.clone(), self.label.clone().unwrap_or_default())])
    }

    /// Set the value mutator
    pub fn mutate_value<F>(&mut self, mutator: F) -> &mut Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.mutator = Some(Arc::new(mutator));
        self
    }

    /// Whether a mutator is set
    #[must_use]
    pub const fn has_mutator(&self) -> bool {
        self.mutator.is_some()
    }

    /// Apply the mutator, if any, to `value`
    #[must_use]
    pub fn prepare_value(&self, value: Value) -> Value {
        match &self.mutator {
            Some(mutator) => mutator(value),
            None => value,
        }
    }

    /// Submitted value: old input first, then current input
    #[must_use]
    pub fn value_from_request(&self, request: &dyn RequestContext) -> Option<Value> {
        request.old_or_input(&self.path)
    }

    /// Current value of the field
    ///
    /// Submitted values win over the model. Without a persisted model the
    /// default value is returned. Otherwise loaded relations are followed
    /// along the path.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnfetchableValue`] if an intermediate relation
    /// is not loaded and the path is longer than two segments.
    pub fn value(&self, request: &dyn RequestContext, model: Option<&dyn Model>) -> AdminResult<Option<Value>> {
        if let Some(value) = self.value_from_request(request) {
            return Ok(Some(value));
        }

        let Some(model) = model.filter(|model| model.exists()) else {
            return Ok(self.default_value.clone());
        };

        let segments = path::segments(&self.path);
        let Some((attribute, relations)) = segments.split_last() else {
            return Ok(self.default_value.clone());
        };

        let mut current = model;
        for relation in relations {
            if let Some(related) = current.loaded(relation) {
                current = related;
                continue;
            }

            if segments.len() == 2 {
                tracing::trace!(path = %self.path, %relation, "relation not loaded, reading attribute");
                return Ok(current.attribute(relation));
            }

            return Err(AdminError::UnfetchableValue {
                path: self.path.clone(),
            });
        }

        Ok(current.attribute(attribute))
    }

    /// Model owning the final attribute, for rule synthesis
    ///
    /// Loaded relations of a persisted model are descended into; otherwise
    /// only belongs-to accessors are followed, to their related template.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnresolvablePath`] for any other relation shape.
    pub fn resolve_path(&self, model: &dyn Model) -> AdminResult<Box<dyn Model>> {
        let segments = path::segments(&self.path);
        let relations = &segments[..segments.len() - 1];

        resolve_through(model, relations).ok_or_else(|| AdminError::UnresolvablePath {
            path: self.path.clone(),
        })
    }

    /// Rules keyed by path, expanding `_unique` against the resolved model
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnresolvablePath`] if `_unique` is declared and
    /// the path can not be resolved (or no model is given).
    pub fn validation_rules(&self, model: Option<&dyn Model>) -> AdminResult<BTreeMap<String, Vec<String>>> {
        let mut rules = Vec::with_capacity(self.validation.rules().len());
        for rule in self.validation.rules() {
            if rule != UNIQUE_RULE {
                rules.push(rule.clone());
                continue;
            }

            let model = model.ok_or_else(|| AdminError::UnresolvablePath {
                path: self.path.clone(),
            })?;
            let resolved = self.resolve_path(model)?;

            let mut unique = format!("unique:{},{}", resolved.table(), self.attribute);
            if resolved.exists() {
                if let Some(key) = resolved.key() {
                    unique.push(',');
                    unique.push_str(&key_to_string(&key));
                }
            }
            tracing::debug!(path = %self.path, rule = %unique, "expanded unique rule");
            rules.push(unique);
        }

        Ok(BTreeMap::from([(self.path.clone(), rules)]))
    }

    /// Write the submitted value into `model`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnmappableField`] if the path crosses a segment
    /// that is neither loaded nor a supported relation. Nothing is modified
    /// in that case.
    pub fn save(&self, request: &dyn RequestContext, model: &mut dyn Model) -> AdminResult<()> {
        self.save_value(model, self.value_from_request(request))
    }

    /// Write `value` (through the mutator) into `model`, crossing relations
    ///
    /// # Errors
    ///
    /// See [`NamedFormElement::save`].
    pub fn save_value(&self, model: &mut dyn Model, value: Option<Value>) -> AdminResult<()> {
        let segments = path::segments(&self.path);
        let relations = &segments[..segments.len() - 1];

        let unmappable = AdminError::UnmappableField {
            path: self.path.clone(),
            table: model.table().to_string(),
        };
        if !can_traverse(model, relations) {
            return Err(unmappable);
        }

        let target = traverse(model, relations).ok_or(unmappable)?;
        let value = self.prepare_value(value.unwrap_or(Value::Null));
        tracing::debug!(path = %self.path, table = target.table(), "assigning submitted value");
        target.set_attribute(&self.attribute, value);
        Ok(())
    }

    /// Payload shared by all elements, around an already resolved `value`
    #[must_use]
    pub fn base_payload(&self, value: Option<Value>) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("attributes".into(), Value::String(self.attributes.to_string()));
        payload.insert("id".into(), Value::String(self.name.clone()));
        payload.insert("name".into(), Value::String(self.name.clone()));
        payload.insert("path".into(), Value::String(self.path.clone()));
        payload.insert("label".into(), self.label.clone().into());
        payload.insert("readonly".into(), Value::Bool(self.readonly));
        payload.insert("value".into(), value.unwrap_or(Value::Null));
        payload.insert("helpText".into(), self.help_text.clone().into());
        payload.insert("required".into(), Value::Bool(self.validation.has_rule("required")));
        payload
    }
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn resolve_through(model: &dyn Model, relations: &[&str]) -> Option<Box<dyn Model>> {
    let Some((relation, rest)) = relations.split_first() else {
        return Some(model.box_clone());
    };

    if model.exists() {
        if let Some(related) = model.loaded(relation) {
            return resolve_through(related, rest);
        }
    }

    let descriptor = model
        .relation(relation)
        .filter(|descriptor| descriptor.kind() == RelationKind::BelongsTo)?;
    resolve_through(descriptor.related(), rest)
}

fn can_traverse(model: &dyn Model, relations: &[&str]) -> bool {
    let Some((relation, rest)) = relations.split_first() else {
        return true;
    };

    if let Some(related) = model.loaded(relation) {
        return can_traverse(related, rest);
    }

    // Unloaded relations are crossed on a fresh instance, so loaded state of
    // the template must not count.
    match model.relation(relation) {
        Some(descriptor) if descriptor.kind() != RelationKind::Other => {
            can_traverse(descriptor.related().new_instance().as_ref(), rest)
        }
        _ => false,
    }
}

fn traverse<'m>(model: &'m mut dyn Model, relations: &[&str]) -> Option<&'m mut dyn Model> {
    let Some((relation, rest)) = relations.split_first() else {
        return Some(model);
    };

    if model.loaded(relation).is_none() {
        let descriptor = model.relation(relation)?;
        match descriptor.kind() {
            RelationKind::BelongsTo => {
                let related = descriptor.related().new_instance();
                descriptor.associate(model, relation, related);
            }
            RelationKind::HasOne | RelationKind::MorphOne => {
                let related = descriptor.make_related(model);
                model.set_relation(relation, related);
            }
            RelationKind::Other => return None,
        }
        tracing::trace!(%relation, kind = %descriptor.kind(), "attached related model");
    }

    traverse(model.loaded_mut(relation)?, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, Relation};
    use crate::request::InputBag;
    use serde_json::json;

    fn user() -> Record {
        Record::persisted("users", json!(7))
            .with_attribute("email", "ann@example.com")
            .with_relation("profile", Relation::has_one(Record::new("profiles"), "user_id", "id"))
            .with_relation("company", Relation::belongs_to(Record::new("companies"), "company_id", "id"))
            .with_relation("posts", Relation::other(Record::new("posts")))
    }

    #[test]
    fn test_construction_derives_name_and_attribute() {
        let element = NamedFormElement::new("a.b.c", None);
        assert_eq!(element.path(), "a.b.c");
        assert_eq!(element.name(), "a[b][c]");
        assert_eq!(element.attribute(), "c");

        let single = NamedFormElement::new("x", Some("X"));
        assert_eq!(single.name(), "x");
        assert_eq!(single.attribute(), "x");
    }

    #[test]
    fn test_old_value_wins_over_input_and_model() {
        let element = NamedFormElement::new("email", Some("Email"));
        let request = InputBag::new()
            .with_old(json!({"email": "old@example.com"}))
            .with_input(json!({"email": "new@example.com"}));
        let model = user();

        let value = element.value(&request, Some(&model)).expect("value");
        assert_eq!(value, Some(json!("old@example.com")));
    }

    #[test]
    fn test_input_wins_over_model() {
        let element = NamedFormElement::new("email", None);
        let request = InputBag::new().with_input(json!({"email": "new@example.com"}));
        let value = element.value(&request, Some(&user())).expect("value");
        assert_eq!(value, Some(json!("new@example.com")));
    }

    #[test]
    fn test_default_for_missing_or_new_model() {
        let mut element = NamedFormElement::new("email", None);
        element.set_default_value("default@example.com");
        let request = InputBag::new();

        assert_eq!(
            element.value(&request, None).expect("value"),
            Some(json!("default@example.com"))
        );
        let fresh = Record::new("users").with_attribute("email", "ignored@example.com");
        assert_eq!(
            element.value(&request, Some(&fresh)).expect("value"),
            Some(json!("default@example.com"))
        );
    }

    #[test]
    fn test_value_through_loaded_relations() {
        let element = NamedFormElement::new("author.profile.bio", None);
        let post = Record::persisted("posts", json!(1)).with_loaded(
            "author",
            Record::persisted("users", json!(2)).with_loaded(
                "profile",
                Record::persisted("profiles", json!(3)).with_attribute("bio", "hello"),
            ),
        );

        let value = element.value(&InputBag::new(), Some(&post)).expect("value");
        assert_eq!(value, Some(json!("hello")));
    }

    #[test]
    fn test_two_segment_path_reads_unloaded_relation_attribute() {
        let element = NamedFormElement::new("settings.theme", None);
        let model = Record::persisted("users", json!(1)).with_attribute("settings", json!({"theme": "dark"}));

        let value = element.value(&InputBag::new(), Some(&model)).expect("value");
        assert_eq!(value, Some(json!({"theme": "dark"})));
    }

    #[test]
    fn test_unloaded_deep_relation_is_logic_error() {
        let element = NamedFormElement::new("author.profile.bio", None);
        let post = Record::persisted("posts", json!(1));

        let err = element.value(&InputBag::new(), Some(&post)).expect_err("unfetchable");
        assert!(matches!(err, AdminError::UnfetchableValue { .. }));
        assert!(err.is_logic_error());
    }

    #[test]
    fn test_unique_rule_with_and_without_key() {
        let mut element = NamedFormElement::new("email", None);
        element.required(None).unique(None);

        let rules = element.validation_rules(Some(&user())).expect("rules");
        assert_eq!(rules["email"], vec!["required", "unique:users,email,7"]);

        let rules = element.validation_rules(Some(&Record::new("users"))).expect("rules");
        assert_eq!(rules["email"], vec!["required", "unique:users,email"]);
    }

    #[test]
    fn test_unique_rule_through_belongs_to() {
        let mut element = NamedFormElement::new("company.name", None);
        element.unique(None);

        let rules = element.validation_rules(Some(&user())).expect("rules");
        assert_eq!(rules["company.name"], vec!["unique:companies,name"]);
    }

    #[test]
    fn test_unique_rule_through_loaded_relation_keeps_key() {
        let mut element = NamedFormElement::new("profile.handle", None);
        element.unique(None);
        let model = user().with_loaded("profile", Record::persisted("profiles", json!(11)));

        let rules = element.validation_rules(Some(&model)).expect("rules");
        assert_eq!(rules["profile.handle"], vec!["unique:profiles,handle,11"]);
    }

    #[test]
    fn test_resolve_path_rejects_has_one_accessor() {
        let element = NamedFormElement::new("profile.bio", None);
        let err = element.resolve_path(&user()).expect_err("unresolvable");
        assert!(matches!(err, AdminError::UnresolvablePath { .. }));

        let single = NamedFormElement::new("email", None);
        assert_eq!(single.resolve_path(&user()).expect("self").table(), "users");
    }

    #[test]
    fn test_resolve_path_ignores_loaded_relations_of_new_model() {
        let mut element = NamedFormElement::new("company.name", None);
        element.unique(None);
        let model = Record::new("users")
            .with_relation("company", Relation::belongs_to(Record::new("companies"), "company_id", "id"))
            .with_loaded("company", Record::persisted("companies", json!(5)));

        let resolved = element.resolve_path(&model).expect("belongs-to template");
        assert!(!resolved.exists());
        let rules = element.validation_rules(Some(&model)).expect("rules");
        assert_eq!(rules["company.name"], vec!["unique:companies,name"]);

        let bio = NamedFormElement::new("profile.bio", None);
        let fresh = Record::new("users")
            .with_relation("profile", Relation::has_one(Record::new("profiles"), "user_id", "id"))
            .with_loaded("profile", Record::persisted("profiles", json!(3)));
        let err = bio.resolve_path(&fresh).expect_err("has-one is not followed");
        assert!(matches!(err, AdminError::UnresolvablePath { .. }));
    }

    #[test]
    fn test_messages_keyed_by_name_and_rule() {
        let mut element = NamedFormElement::new("profile.bio", None);
        element
            .add_validation_rule("max:200", Some("too long"))
            .add_validation_message("min:5", "too short");

        let messages = element.validation_messages();
        assert_eq!(messages["profile[bio].min"], "too short");
        assert_eq!(messages["profile[bio].max"], "too long");

        let mut unique = NamedFormElement::new("email", None);
        unique.unique(Some("taken"));
        assert_eq!(unique.validation_messages()["email.unique"], "taken");
    }

    #[test]
    fn test_save_single_segment() {
        let element = NamedFormElement::new("email", None);
        let request = InputBag::new().with_input(json!({"email": "new@example.com"}));
        let mut model = user();

        element.save(&request, &mut model).expect("saved");
        assert_eq!(model.attribute("email"), Some(json!("new@example.com")));
    }

    #[test]
    fn test_save_belongs_to_associates_new_instance() {
        let element = NamedFormElement::new("company.name", None);
        let request = InputBag::new().with_input(json!({"company": {"name": "Acme"}}));
        let mut model = user();

        element.save(&request, &mut model).expect("saved");
        let company = model.loaded("company").expect("associated");
        assert_eq!(company.table(), "companies");
        assert_eq!(company.attribute("name"), Some(json!("Acme")));
        assert_eq!(model.attribute("company_id"), Some(Value::Null));
    }

    #[test]
    fn test_save_through_other_relation_fails_without_mutation() {
        let element = NamedFormElement::new("posts.title", None);
        let request = InputBag::new().with_input(json!({"posts": {"title": "Hi"}}));
        let mut model = user();
        let before = model.to_json();

        let err = element.save(&request, &mut model).expect_err("unmappable");
        assert!(matches!(err, AdminError::UnmappableField { ref table, .. } if table == "users"));
        assert_eq!(model.to_json(), before);
    }

    #[test]
    fn test_save_belongs_to_behind_has_one() {
        let profiles = Record::new("profiles")
            .with_relation("company", Relation::belongs_to(Record::new("companies"), "company_id", "id"));
        let mut model = Record::persisted("users", json!(7))
            .with_relation("profile", Relation::has_one(profiles, "user_id", "id"));
        let element = NamedFormElement::new("profile.company.name", None);
        let request = InputBag::new().with_input(json!({"profile": {"company": {"name": "Acme"}}}));

        element.save(&request, &mut model).expect("saved");

        let profile = model.loaded("profile").expect("profile attached");
        assert_eq!(profile.attribute("user_id"), Some(json!(7)));
        assert_eq!(profile.attribute("company_id"), Some(Value::Null));
        let company = profile.loaded("company").expect("company associated");
        assert_eq!(company.table(), "companies");
        assert_eq!(company.attribute("name"), Some(json!("Acme")));
    }

    #[test]
    fn test_save_ignores_relations_loaded_on_template() {
        let template = Record::new("profiles").with_loaded("extra", Record::new("extras"));
        let mut model = Record::persisted("users", json!(7))
            .with_relation("profile", Relation::has_one(template, "user_id", "id"));
        let before = model.to_json();
        let element = NamedFormElement::new("profile.extra.note", None);
        let request = InputBag::new().with_input(json!({"profile": {"extra": {"note": "x"}}}));

        let err = element.save(&request, &mut model).expect_err("unmappable");
        assert!(matches!(err, AdminError::UnmappableField { .. }));
        assert_eq!(model.to_json(), before);
        assert!(model.loaded("profile").is_none());
    }

    #[test]
    fn test_mutator_applied_once() {
        let mut element = NamedFormElement::new("name", None);
        assert!(!element.has_mutator());
        element.mutate_value(|value| match value {
            Value::String(s) => Value::String(format!("{s}!")),
            other => other,
        });
        assert!(element.has_mutator());

        let request = InputBag::new().with_input(json!({"name": "ann"}));
        let mut model = Record::new("users");
        element.save(&request, &mut model).expect("saved");
        assert_eq!(model.attribute("name"), Some(json!("ann!")));
    }

    #[test]
    fn test_payload_keys() {
        let mut element = NamedFormElement::new("profile.bio", Some("Bio"));
        element.required(None).set_help_text("Shown publicly");

        let payload = element.base_payload(Some(json!("hello")));
        assert_eq!(payload["id"], json!("profile[bio]"));
        assert_eq!(payload["name"], json!("profile[bio]"));
        assert_eq!(payload["path"], json!("profile.bio"));
        assert_eq!(payload["label"], json!("Bio"));
        assert_eq!(payload["readonly"], json!(false));
        assert_eq!(payload["value"], json!("hello"));
        assert_eq!(payload["helpText"], json!("Shown publicly"));
        assert_eq!(payload["required"], json!(true));
        assert_eq!(element.validation_labels()["profile.bio"], "Bio");
    }
}
