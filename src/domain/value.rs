//! Coerced configuration values and the cleaned output mapping
//!
//! A validation run produces a [`CleanedEnv`]: a flat mapping from the
//! schema's keys to [`Value`]s coerced per the declared kind. `number` and
//! `port` fields coerce to [`Value::Number`]; `string` and `url` fields to
//! [`Value::Str`] (URLs in normalized absolute form).

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single coerced configuration value
///
/// # Examples
///
/// ```
/// use envguard::domain::Value;
///
/// let port = Value::Number(3000.0);
/// assert_eq!(port.as_number(), Some(3000.0));
/// assert_eq!(port.as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A coerced numeric value (`number` and `port` kinds)
    Number(f64),
    /// A string value (`string` and `url` kinds)
    Str(String),
}

impl Value {
    /// Returns the numeric value, or `None` for string values
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    /// Returns the string value, or `None` for numeric values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// The validated, coerced output of a validation run
///
/// Keys appear in schema declaration order. The engine populates this
/// mapping field-by-field during validation and hands it to the caller only
/// once every field has validated; callers treat it as read-only.
///
/// # Examples
///
/// ```
/// use envguard::{port, string, try_clean_env, RawEnv, Schema};
///
/// # fn example() -> envguard::Result<()> {
/// let schema = Schema::from([
///     ("PORT", port().with_default(8080)),
///     ("HOST", string().with_default("localhost")),
/// ]);
/// let cleaned = try_clean_env(&schema, &RawEnv::empty())?;
///
/// assert_eq!(cleaned.number("PORT"), Some(8080.0));
/// assert_eq!(cleaned.string("HOST"), Some("localhost"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedEnv {
    entries: Vec<(String, Value)>,
}

// Serialized as a plain name → value map, in schema declaration order.
impl Serialize for CleanedEnv {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl CleanedEnv {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push((key.into(), value));
    }

    /// Returns the coerced value for `key`, if the schema declared it
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Returns the numeric value for `key` (`number` and `port` fields)
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    /// Returns the string value for `key` (`string` and `url` fields)
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns true if `key` was declared in the schema
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of validated fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the schema declared no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in schema declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<'a> IntoIterator for &'a CleanedEnv {
    type Item = (&'a str, &'a Value);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CleanedEnv {
        let mut cleaned = CleanedEnv::new();
        cleaned.insert("PORT", Value::Number(3000.0));
        cleaned.insert("HOST", Value::Str("localhost".to_string()));
        cleaned
    }

    #[test]
    fn test_typed_accessors() {
        let cleaned = sample();
        assert_eq!(cleaned.number("PORT"), Some(3000.0));
        assert_eq!(cleaned.string("HOST"), Some("localhost"));
    }

    #[test]
    fn test_accessors_reject_kind_mismatch() {
        let cleaned = sample();
        assert_eq!(cleaned.string("PORT"), None);
        assert_eq!(cleaned.number("HOST"), None);
    }

    #[test]
    fn test_accessors_on_undeclared_key() {
        let cleaned = sample();
        assert_eq!(cleaned.get("MISSING"), None);
        assert_eq!(cleaned.number("MISSING"), None);
        assert_eq!(cleaned.string("MISSING"), None);
        assert!(!cleaned.contains("MISSING"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let cleaned = sample();
        let keys: Vec<&str> = cleaned.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["PORT", "HOST"]);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(3000.0).to_string(), "3000");
        assert_eq!(Value::Number(80.5).to_string(), "80.5");
        assert_eq!(Value::Str("hello".to_string()).to_string(), "hello");
    }

    #[test]
    fn test_value_serializes_untagged() {
        let json = serde_json::to_string(&Value::Number(3000.0)).unwrap();
        assert_eq!(json, "3000.0");
        let json = serde_json::to_string(&Value::Str("x".to_string())).unwrap();
        assert_eq!(json, "\"x\"");
    }

    #[test]
    fn test_cleaned_env_serializes_as_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"PORT":3000.0,"HOST":"localhost"}"#);
    }

    #[test]
    fn test_empty() {
        let cleaned = CleanedEnv::new();
        assert!(cleaned.is_empty());
        assert_eq!(cleaned.len(), 0);
    }
}
