//! Form element contract and shared validation state

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::named::NamedFormElement;
use crate::error::AdminResult;
use crate::model::Model;
use crate::request::RequestContext;
use crate::template::{Templates, View};

/// Rule name without its parameters: `min:5` -> `min`
#[must_use]
pub fn rule_name(rule: &str) -> &str {
    rule.split_once(':').map_or(rule, |(name, _)| name)
}

/// Validation rules and custom messages of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementValidation {
    rules: Vec<String>,
    messages: BTreeMap<String, String>,
}

impl ElementValidation {
    /// Create empty validation state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, keeping declaration order
    pub fn add_rule(&mut self, rule: impl Into<String>) -> &mut Self {
        self.rules.push(rule.into());
        self
    }

    /// Register a message for `rule`, keyed by the rule name only
    pub fn add_message(&mut self, rule: &str, message: impl Into<String>) -> &mut Self {
        self.messages.insert(rule_name(rule).to_string(), message.into());
        self
    }

    /// Replace all custom messages
    pub fn set_messages(&mut self, messages: BTreeMap<String, String>) -> &mut Self {
        self.messages = messages;
        self
    }

    /// Rules in declaration order
    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Custom messages keyed by rule name
    #[must_use]
    pub const fn messages(&self) -> &BTreeMap<String, String> {
        &self.messages
    }

    /// Whether exactly `rule` was declared
    #[must_use]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.rules.iter().any(|r| r == rule)
    }
}

/// An editable field of an admin form
///
/// Concrete elements embed a [`NamedFormElement`] and only add presentation
/// state; path handling, value resolution, validation and saving are shared.
pub trait FormElement: fmt::Debug + Send + Sync {
    /// Shared element state
    fn named(&self) -> &NamedFormElement;

    /// Mutable shared element state
    fn named_mut(&mut self) -> &mut NamedFormElement;

    /// Short type name; the default view is `form.element.<lowercase name>`
    fn type_name(&self) -> &'static str;

    /// Add type-specific entries to the render payload
    fn extend_payload(&self, _payload: &mut Map<String, Value>) {}

    /// View id used to render the element
    fn view(&self) -> String {
        self.named().view_override().map_or_else(
            || format!("form.element.{}", self.type_name().to_lowercase()),
            ToString::to_string,
        )
    }

    /// Current value: old input, then input, then the model
    ///
    /// # Errors
    ///
    /// Returns a logic error if the model can not be walked along the path.
    fn value(&self, request: &dyn RequestContext, model: Option<&dyn Model>) -> AdminResult<Option<Value>> {
        self.named().value(request, model)
    }

    /// Render payload: base payload plus type-specific entries
    ///
    /// # Errors
    ///
    /// Returns a logic error if the value can not be fetched.
    fn to_payload(&self, request: &dyn RequestContext, model: Option<&dyn Model>) -> AdminResult<Map<String, Value>> {
        let mut payload = self.named().base_payload(self.value(request, model)?);
        self.extend_payload(&mut payload);
        Ok(payload)
    }

    /// Bind the payload to the element's view
    ///
    /// # Errors
    ///
    /// Returns a logic error if the value can not be fetched.
    fn render(
        &self,
        templates: &Templates,
        request: &dyn RequestContext,
        model: Option<&dyn Model>,
    ) -> AdminResult<View> {
        let payload = self.to_payload(request, model)?;
        Ok(View::new(templates, self.view(), payload)
            .with_markup("attributes", self.named().attributes().to_string()))
    }

    /// Write the submitted value into `model`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnmappableField`](crate::error::AdminError::UnmappableField)
    /// if the path crosses an unsupported relation.
    fn save(&self, request: &dyn RequestContext, model: &mut dyn Model) -> AdminResult<()> {
        self.named().save(request, model)
    }

    /// Rules keyed by path, with `_unique` expanded against `model`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnresolvablePath`](crate::error::AdminError::UnresolvablePath)
    /// if `_unique` is declared and the path can not be resolved.
    fn validation_rules(&self, model: Option<&dyn Model>) -> AdminResult<BTreeMap<String, Vec<String>>> {
        self.named().validation_rules(model)
    }

    /// Custom messages keyed by `<name>.<rule>`
    fn validation_messages(&self) -> BTreeMap<String, String> {
        self.named().validation_messages()
    }

    /// Human readable label keyed by path
    fn validation_labels(&self) -> BTreeMap<String, String> {
        self.named().validation_labels()
    }
}
