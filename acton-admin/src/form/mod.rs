//! Model-bound form elements
//!
//! Every element is addressed by a dotted path into the edited model. The
//! path yields the HTML field name, the lookup key for submitted values and
//! the relations crossed when the value is saved.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_admin::form::{AdminForm, FormElement, Text, Textarea, Validator};
//! use acton_admin::model::{Model, Record, Relation};
//! use acton_admin::request::InputBag;
//! use serde_json::json;
//!
//! # fn example() -> acton_admin::error::AdminResult<()> {
//! let mut email = Text::email("email", Some("Email"));
//! email.named_mut().required(None).unique(None);
//!
//! let form = AdminForm::new("/admin/users/7")
//!     .element(email)
//!     .element(Textarea::new("profile.bio", Some("Bio")));
//!
//! let mut user = Record::persisted("users", json!(7))
//!     .with_relation("profile", Relation::has_one(Record::new("profiles"), "user_id", "id"));
//! let request = InputBag::new().with_input(json!({
//!     "email": "ann@example.com",
//!     "profile": {"bio": "Hello"}
//! }));
//!
//! let errors = form.validate(&Validator::new(), &request, Some(&user))?;
//! assert!(!errors.has_errors());
//!
//! form.save(&request, &mut user)?;
//! assert_eq!(user.loaded("profile").and_then(|p| p.attribute("user_id")), Some(json!(7)));
//! # Ok(())
//! # }
//! ```

mod admin_form;
mod element;
mod elements;
mod named;
mod validation;

pub use admin_form::AdminForm;
pub use element::{rule_name, ElementValidation, FormElement};
pub use elements::{hash_password, truthy, Checkbox, Hidden, Password, Text, Textarea};
pub use named::{NamedFormElement, ValueMutator, UNIQUE_RULE};
pub use validation::{FieldError, RuleSet, UniquenessCheck, ValidationErrors, Validator};
