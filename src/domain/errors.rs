//! Domain error types
//!
//! This module defines the error hierarchy for envguard. All errors are
//! domain-specific; the only third-party type exposed is [`url::ParseError`],
//! carried as a source so callers can inspect why a URL field failed.

use crate::schema::Kind;
use thiserror::Error;

/// Main envguard error type
///
/// Every way a validation run can fail is a variant here. On the pure
/// [`try_clean_env`](crate::try_clean_env) path these are returned as data;
/// on the [`clean_env`](crate::clean_env) path they are rendered as a single
/// diagnostic line before the process exits.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The schema declares a kind outside the recognized set
    ///
    /// This is a schema-authoring error, not an environment error: no
    /// environment value can satisfy a field whose kind the engine does not
    /// know how to coerce.
    #[error("Unknown type `{kind}`")]
    UnknownType {
        /// The unrecognized kind name as written in the schema
        kind: String,
    },

    /// No usable value resolved for a field, or a configured default's
    /// runtime type disagrees with the declared kind
    #[error("Expected `{key}` to be a {kind}")]
    MissingOrWrongType {
        /// The schema key that failed to resolve
        key: String,
        /// The kind the field was declared as
        kind: Kind,
    },

    /// Numeric coercion of the resolved value failed (`number` and `port`)
    #[error("`{key}` is not a valid number")]
    NotANumber {
        /// The schema key whose value failed coercion
        key: String,
    },

    /// Numeric value outside the accepted port range (0 through 65536)
    #[error("`{key}` is not a valid port")]
    InvalidPort {
        /// The schema key whose value was out of range
        key: String,
    },

    /// The resolved value could not be parsed as a URL (`url` kind)
    #[error("`{key}` is not a valid URL: {source}")]
    InvalidUrl {
        /// The schema key whose value failed to parse
        key: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },
}

impl EnvError {
    /// Returns the schema key the error is about, if the error is tied to a
    /// specific field ([`UnknownType`](Self::UnknownType) is not).
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::UnknownType { .. } => None,
            EnvError::MissingOrWrongType { key, .. }
            | EnvError::NotANumber { key }
            | EnvError::InvalidPort { key }
            | EnvError::InvalidUrl { key, .. } => Some(key),
        }
    }
}
