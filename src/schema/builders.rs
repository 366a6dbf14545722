//! Schema builder functions, one per recognized kind
//!
//! Builders are pure data constructors: they capture the kind name into a
//! [`FieldSpec`] and nothing else. Options are attached with the descriptor's
//! `with_default` / `with_dev_default` methods.

use super::field::{FieldSpec, Kind};

/// Declares a numeric field
///
/// The environment value is coerced to a number; coercion failure is fatal
/// at validation time.
///
/// # Examples
///
/// ```
/// use envguard::{number, Schema};
///
/// let schema = Schema::from([("WORKERS", number().with_default(4))]);
/// ```
pub fn number() -> FieldSpec {
    FieldSpec::new(Kind::Number.as_str())
}

/// Declares a plain string field, stored verbatim
pub fn string() -> FieldSpec {
    FieldSpec::new(Kind::String.as_str())
}

/// Declares a URL field
///
/// The value is parsed and stored in normalized absolute form. Defaults may
/// be given as text or as an already-parsed [`url::Url`].
pub fn url() -> FieldSpec {
    FieldSpec::new(Kind::Url.as_str())
}

/// Declares a port field
///
/// Coerced like [`number`], then range-checked against the accepted port
/// range (0 through 65536, both inclusive).
pub fn port() -> FieldSpec {
    FieldSpec::new(Kind::Port.as_str())
}
