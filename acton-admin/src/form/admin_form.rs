//! Ordered group of form elements

use serde_json::{Map, Value};

use super::element::FormElement;
use super::validation::{RuleSet, ValidationErrors, Validator};
use crate::error::AdminResult;
use crate::model::Model;
use crate::request::RequestContext;
use crate::template::{Templates, View};

/// A model edit form
#[derive(Debug)]
pub struct AdminForm {
    action: String,
    submit_label: String,
    elements: Vec<Box<dyn FormElement>>,
}

impl AdminForm {
    /// Create an empty form posting to `action`
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            submit_label: "Save".into(),
            elements: Vec::new(),
        }
    }

    /// Add an element
    #[must_use]
    pub fn element(mut self, element: impl FormElement + 'static) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Set the submit button label
    #[must_use]
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Elements in display order
    #[must_use]
    pub fn elements(&self) -> &[Box<dyn FormElement>] {
        &self.elements
    }

    /// Rules, messages and labels of every element
    ///
    /// # Errors
    ///
    /// Returns a logic error if a `_unique` rule can not be resolved.
    pub fn rule_set(&self, model: Option<&dyn Model>) -> AdminResult<RuleSet> {
        let mut set = RuleSet::default();
        for element in &self.elements {
            let element_set = element_rule_set(element.as_ref(), model)?;
            set.rules.extend(element_set.rules);
            set.messages.extend(element_set.messages);
            set.labels.extend(element_set.labels);
        }
        Ok(set)
    }

    /// Validate the submitted request, element by element
    ///
    /// # Errors
    ///
    /// Returns a logic error if the rules can not be synthesized.
    pub fn validate(
        &self,
        validator: &Validator<'_>,
        request: &dyn RequestContext,
        model: Option<&dyn Model>,
    ) -> AdminResult<ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for element in &self.elements {
            let set = element_rule_set(element.as_ref(), model)?;
            errors.merge(&validator.validate(&set, request));
        }
        tracing::debug!(errors = errors.count(), "form validated");
        Ok(errors)
    }

    /// Save every element into `model`, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the first element's save error.
    pub fn save(&self, request: &dyn RequestContext, model: &mut dyn Model) -> AdminResult<()> {
        for element in &self.elements {
            element.save(request, model)?;
        }
        tracing::debug!(table = model.table(), elements = self.elements.len(), "form saved");
        Ok(())
    }

    /// Render all elements inside the form view
    ///
    /// # Errors
    ///
    /// Returns error if an element value can not be fetched or rendered.
    pub fn render(
        &self,
        templates: &Templates,
        request: &dyn RequestContext,
        model: Option<&dyn Model>,
    ) -> AdminResult<View> {
        let mut elements = String::new();
        for element in &self.elements {
            elements.push_str(&element.render(templates, request, model)?.to_html()?);
        }

        let mut payload = Map::new();
        payload.insert("action".into(), Value::String(self.action.clone()));
        payload.insert("submit_label".into(), Value::String(self.submit_label.clone()));
        Ok(View::new(templates, "form.default", payload).with_markup("elements", elements))
    }
}

fn element_rule_set(element: &dyn FormElement, model: Option<&dyn Model>) -> AdminResult<RuleSet> {
    Ok(RuleSet {
        rules: element.validation_rules(model)?,
        messages: element.validation_messages(),
        labels: element.validation_labels(),
    })
}
