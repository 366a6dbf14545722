//! Field descriptor types
//!
//! A schema is a flat mapping from field names to [`FieldSpec`] descriptors.
//! Each descriptor carries a kind name and the field's options. Descriptors
//! are pure data: nothing is validated at construction time, and a descriptor
//! whose kind the engine does not recognize only fails once validation runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// The declared semantic type of a configuration field
///
/// # Examples
///
/// ```
/// use envguard::Kind;
///
/// assert_eq!(Kind::from_name("port"), Some(Kind::Port));
/// assert_eq!(Kind::from_name("boolean"), None);
/// assert_eq!(Kind::Port.as_str(), "port");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A numeric field, coerced to `f64`
    Number,
    /// A plain string field, stored verbatim
    String,
    /// A URL field, parsed and stored in normalized absolute form
    Url,
    /// A numeric field additionally constrained to the port range
    Port,
}

impl Kind {
    /// All recognized kinds, in diagnostic order
    pub const ALL: [Kind; 4] = [Kind::Number, Kind::String, Kind::Url, Kind::Port];

    /// Resolves a kind name to a `Kind`, or `None` for unrecognized names
    pub fn from_name(name: &str) -> Option<Kind> {
        match name {
            "number" => Some(Kind::Number),
            "string" => Some(Kind::String),
            "url" => Some(Kind::Url),
            "port" => Some(Kind::Port),
            _ => None,
        }
    }

    /// Returns the canonical kind name
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Url => "url",
            Kind::Port => "port",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A default value supplied through [`FieldOptions`]
///
/// The variant records the runtime type the caller supplied; the engine
/// checks it against the field's declared kind when the default is actually
/// used for fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultValue {
    /// A numeric default (`number` and `port` fields)
    Number(f64),
    /// A string default (`string` fields, and `url` fields given as text)
    Str(String),
    /// An already-parsed URL default (`url` fields)
    Url(Url),
}

impl From<f64> for DefaultValue {
    fn from(n: f64) -> Self {
        DefaultValue::Number(n)
    }
}

impl From<i32> for DefaultValue {
    fn from(n: i32) -> Self {
        DefaultValue::Number(f64::from(n))
    }
}

impl From<u16> for DefaultValue {
    fn from(n: u16) -> Self {
        DefaultValue::Number(f64::from(n))
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        DefaultValue::Str(s.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        DefaultValue::Str(s)
    }
}

impl From<Url> for DefaultValue {
    fn from(url: Url) -> Self {
        DefaultValue::Url(url)
    }
}

/// Per-field options recognized by the validation engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Fallback used whenever the environment variable is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,

    /// Fallback used only in development mode, and only when no `default`
    /// is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_default: Option<DefaultValue>,
}

/// A single field's declaration: kind name plus options
///
/// Built through the kind builders ([`number`](crate::number),
/// [`string`](crate::string), [`url`](crate::url), [`port`](crate::port))
/// for the recognized kinds, or [`FieldSpec::new`] for data-driven schemas
/// where the kind name arrives as text.
///
/// # Examples
///
/// ```
/// use envguard::port;
///
/// let spec = port().with_dev_default(3000);
/// assert_eq!(spec.kind(), "port");
/// assert!(spec.options().dev_default.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    kind: String,
    #[serde(default)]
    options: FieldOptions,
}

impl FieldSpec {
    /// Creates a descriptor with the given kind name and no options
    ///
    /// The name is not checked here; validation fails with an unknown-type
    /// error if it is not one of the recognized kinds.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: FieldOptions::default(),
        }
    }

    /// Sets the unconditional default value
    pub fn with_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.options.default = Some(value.into());
        self
    }

    /// Sets the development-only default value
    pub fn with_dev_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.options.dev_default = Some(value.into());
        self
    }

    /// Returns the declared kind name
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the field's options
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_names() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_kind_rejects_unrecognized_names() {
        assert_eq!(Kind::from_name("boolean"), None);
        assert_eq!(Kind::from_name("Number"), None);
        assert_eq!(Kind::from_name(""), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Port.to_string(), "port");
        assert_eq!(Kind::Number.to_string(), "number");
    }

    #[test]
    fn test_default_value_conversions() {
        assert_eq!(DefaultValue::from(3000), DefaultValue::Number(3000.0));
        assert_eq!(DefaultValue::from(80.5), DefaultValue::Number(80.5));
        assert_eq!(
            DefaultValue::from("localhost"),
            DefaultValue::Str("localhost".to_string())
        );

        let url = Url::parse("http://example.com/").unwrap();
        assert_eq!(DefaultValue::from(url.clone()), DefaultValue::Url(url));
    }

    #[test]
    fn test_field_spec_builder() {
        let spec = FieldSpec::new("number")
            .with_default(10)
            .with_dev_default(20);
        assert_eq!(spec.kind(), "number");
        assert_eq!(spec.options().default, Some(DefaultValue::Number(10.0)));
        assert_eq!(spec.options().dev_default, Some(DefaultValue::Number(20.0)));
    }

    #[test]
    fn test_field_spec_allows_unrecognized_kind() {
        // Construction is pure data capture; the engine rejects the kind.
        let spec = FieldSpec::new("boolean");
        assert_eq!(spec.kind(), "boolean");
        assert_eq!(Kind::from_name(spec.kind()), None);
    }

    #[test]
    fn test_field_spec_serde_round_trip() {
        let spec = FieldSpec::new("port").with_dev_default(3000);
        let json = serde_json::to_string(&spec).unwrap();
        let back: FieldSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_field_spec_deserializes_without_options() {
        let spec: FieldSpec = serde_json::from_str(r#"{"kind":"string"}"#).unwrap();
        assert_eq!(spec.kind(), "string");
        assert_eq!(spec.options(), &FieldOptions::default());
    }
}
