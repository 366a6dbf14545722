//! The schema mapping
//!
//! [`Schema`] is a flat, insertion-ordered mapping from field names to
//! [`FieldSpec`] descriptors. Declaration order does not affect the cleaned
//! result, but it is the order the engine visits fields in, so it decides
//! which of several invalid fields reports first.

use super::field::FieldSpec;

/// A flat mapping from field names to descriptors
///
/// Keys are arbitrary caller-chosen names, conventionally matching the
/// environment variable. Re-declaring a key replaces its descriptor in
/// place, keeping the original position.
///
/// # Examples
///
/// ```
/// use envguard::{port, string, Schema};
///
/// let schema = Schema::from([
///     ("PORT", port().with_dev_default(3000)),
///     ("HOST", string().with_default("localhost")),
/// ]);
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    /// Creates an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field, replacing any existing declaration for the key
    pub fn declare(&mut self, key: impl Into<String>, spec: FieldSpec) -> &mut Self {
        let key = key.into();
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = spec,
            None => self.fields.push((key, spec)),
        }
        self
    }

    /// Returns the descriptor declared for `key`
    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, spec)| spec)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates declarations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldSpec)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, FieldSpec)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (key, spec) in iter {
            schema.declare(key, spec);
        }
        schema
    }
}

impl<K: Into<String>, const N: usize> From<[(K, FieldSpec); N]> for Schema {
    fn from(entries: [(K, FieldSpec); N]) -> Self {
        entries.into_iter().collect()
    }
}
