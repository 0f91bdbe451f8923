//! Password element
//!
//! Never echoes the stored value. Submitted passwords are hashed with
//! Argon2id before assignment unless hashing is turned off in the form
//! settings. An empty submission leaves the stored hash untouched.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as _, SaltString},
    Argon2,
};
use serde_json::Value;

use crate::config::{FormSettings, PasswordHashing};
use crate::error::{AdminError, AdminResult};
use crate::form::{FormElement, NamedFormElement};
use crate::model::Model;
use crate::request::RequestContext;

/// Hash `password` with Argon2id and a random salt
///
/// # Errors
///
/// Returns [`AdminError::PasswordHash`] if hashing fails.
pub fn hash_password(password: &str) -> AdminResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AdminError::PasswordHash(e.to_string()))
}

/// Password input
#[derive(Debug, Clone)]
pub struct Password {
    named: NamedFormElement,
    hashing: PasswordHashing,
    allow_empty: bool,
}

impl Password {
    /// Create a password input hashing with Argon2id
    #[must_use]
    pub fn new(path: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            named: NamedFormElement::new(path, label),
            hashing: PasswordHashing::Argon2,
            allow_empty: false,
        }
    }

    /// Create a password input using the configured hashing
    #[must_use]
    pub fn from_settings(path: impl Into<String>, label: Option<&str>, settings: &FormSettings) -> Self {
        let mut password = Self::new(path, label);
        password.hashing = settings.password_hash;
        password
    }

    /// Store submitted values as-is
    pub fn without_hashing(&mut self) -> &mut Self {
        self.hashing = PasswordHashing::None;
        self
    }

    /// Save empty submissions instead of skipping them
    pub fn allow_empty(&mut self, allow: bool) -> &mut Self {
        self.allow_empty = allow;
        self
    }

    /// Configured hashing
    #[must_use]
    pub const fn hashing(&self) -> PasswordHashing {
        self.hashing
    }
}

impl FormElement for Password {
    fn named(&self) -> &NamedFormElement {
        &self.named
    }

    fn named_mut(&mut self) -> &mut NamedFormElement {
        &mut self.named
    }

    fn type_name(&self) -> &'static str {
        "Password"
    }

    fn value(&self, _request: &dyn RequestContext, _model: Option<&dyn Model>) -> AdminResult<Option<Value>> {
        Ok(None)
    }

    fn save(&self, request: &dyn RequestContext, model: &mut dyn Model) -> AdminResult<()> {
        let submitted = self.named.value_from_request(request);
        let password = submitted.as_ref().and_then(Value::as_str).unwrap_or_default();

        if password.is_empty() && !self.allow_empty {
            tracing::debug!(path = %self.named.path(), "empty password submitted, keeping stored value");
            return Ok(());
        }

        let value = match self.hashing {
            PasswordHashing::Argon2 if !password.is_empty() => Value::String(hash_password(password)?),
            PasswordHashing::Argon2 | PasswordHashing::None => Value::String(password.to_string()),
        };
        self.named.save_value(model, Some(value))
    }
}
