//! Error types and error handling
//!
//! Every failure in this crate is a configuration or schema problem:
//! an ordering API used the wrong way, or a field path that does not
//! match the relations of the model it is bound to. None of them are
//! retried; they propagate to the request handler.

use thiserror::Error;

use crate::template::TemplateError;

/// Convenience alias for results produced by this crate
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin layer error type
#[derive(Debug, Error)]
pub enum AdminError {
    /// Misuse of an API argument (for example the ordering API)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value could not be read through the relations of the bound model
    #[error("Can not fetch value for field '{path}'. Probably relation definition is incorrect")]
    UnfetchableValue {
        /// Dotted field path
        path: String,
    },

    /// A field path could not be resolved to the model that owns its attribute
    #[error("Can not resolve path for field '{path}'. Probably relation definition is incorrect")]
    UnresolvablePath {
        /// Dotted field path
        path: String,
    },

    /// A field path crosses a segment that is not a supported relation
    #[error(
        "Field '{path}' can't be mapped to relations of model '{table}'. \
         Probably some dot delimited segment is not a supported relation type"
    )]
    UnmappableField {
        /// Dotted field path
        path: String,
        /// Table of the model the traversal started from
        table: String,
    },

    /// A submitted password could not be hashed
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Template lookup or rendering failed
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl AdminError {
    /// Whether this error signals a path/schema mismatch between a field and its model
    #[must_use]
    pub const fn is_logic_error(&self) -> bool {
        matches!(
            self,
            Self::UnfetchableValue { .. } | Self::UnresolvablePath { .. } | Self::UnmappableField { .. }
        )
    }

    /// Whether this error signals a misused argument
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_error_classification() {
        let err = AdminError::UnresolvablePath {
            path: "author.name".into(),
        };
        assert!(err.is_logic_error());
        assert!(!err.is_argument_error());
        assert!(err.to_string().contains("author.name"));
    }

    #[test]
    fn test_argument_error_classification() {
        let err = AdminError::InvalidArgument("not orderable".into());
        assert!(err.is_argument_error());
        assert!(!err.is_logic_error());
    }

    #[test]
    fn test_unmappable_field_message() {
        let err = AdminError::UnmappableField {
            path: "profile.bio".into(),
            table: "users".into(),
        };
        let message = err.to_string();
        assert!(message.contains("profile.bio"));
        assert!(message.contains("users"));
    }
}
