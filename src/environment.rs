//! Raw environment snapshots and runtime mode
//!
//! The engine never reads process-global state directly: callers thread a
//! [`RawEnv`] snapshot in, which keeps validation pure and testable. The
//! [`clean_env`](crate::clean_env) wrapper takes the snapshot from the live
//! process environment; tests build snapshots from literal pairs.
//!
//! The snapshot also carries the dev/production marker: the variable named
//! by [`MODE_VAR`] selects [`Mode::Production`] when set to exactly
//! `"production"`, and [`Mode::Development`] otherwise.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Environment variable that selects the runtime mode
pub const MODE_VAR: &str = "APP_ENV";

/// Marker value that selects production mode
const PRODUCTION_SENTINEL: &str = "production";

/// Runtime mode used to decide whether `dev_default` values apply
///
/// Development is the default: production must be opted into explicitly
/// through the marker variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Development mode; `dev_default` fallbacks apply
    #[default]
    Development,
    /// Production mode; `dev_default` fallbacks are ignored
    Production,
}

impl Mode {
    /// Resolves the mode from a raw environment snapshot
    ///
    /// Absence of the marker, or any value other than the production
    /// sentinel, means development.
    pub fn from_env(env: &RawEnv) -> Mode {
        match env.get(MODE_VAR) {
            Some(PRODUCTION_SENTINEL) => Mode::Production,
            _ => Mode::Development,
        }
    }

    /// Returns true in development mode
    pub fn is_development(self) -> bool {
        self == Mode::Development
    }
}

/// An immutable snapshot of a name → string environment mapping
///
/// Not owned or mutated by the engine; construct one per validation call.
///
/// # Examples
///
/// ```
/// use envguard::RawEnv;
///
/// let env = RawEnv::from([("PORT", "8080")]);
/// assert_eq!(env.get("PORT"), Some("8080"));
/// assert_eq!(env.get("HOST"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEnv {
    vars: HashMap<String, String>,
}

impl RawEnv {
    /// Creates an empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshots the live process environment
    ///
    /// Variables with non-Unicode names or values are skipped, matching
    /// `std::env::vars` semantics.
    pub fn from_process() -> Self {
        let env = std::env::vars().collect::<Self>();
        debug!(vars = env.len(), "snapshotted process environment");
        env
    }

    /// Returns the value for `key`, if set
    ///
    /// A variable set to the empty string is present and returns `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns true if `key` is set
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables in the snapshot
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the snapshot holds no variables
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for RawEnv {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
