//! The validation engine
//!
//! A single synchronous pass over the schema: each field's raw value is
//! resolved from the environment snapshot (falling back to configured
//! defaults under the documented rules), coerced per its declared kind, and
//! accumulated into the output mapping. The first failure aborts the run.
//!
//! Two entry points share the pass:
//!
//! - [`try_clean_env`] is pure: the environment snapshot is threaded in and
//!   failures come back as [`EnvError`] values.
//! - [`clean_env`] wraps it for application startup: it snapshots the live
//!   process environment and turns any failure into a single diagnostic
//!   line plus a non-zero process exit.

use crate::core::coerce;
use crate::domain::{CleanedEnv, EnvError, Result, Value};
use crate::environment::{Mode, RawEnv};
use crate::report;
use crate::schema::{DefaultValue, FieldSpec, Kind, Schema};
use tracing::{debug, trace};

/// Validates and coerces an environment snapshot against a schema
///
/// Fields are visited in schema declaration order; the first invalid field
/// decides the returned error. An empty schema yields an empty mapping
/// without consulting the snapshot.
///
/// # Errors
///
/// Returns the first [`EnvError`] produced by an unrecognized kind, an
/// unresolvable or wrongly-defaulted field, or a failed coercion.
///
/// # Examples
///
/// ```
/// use envguard::{port, try_clean_env, RawEnv, Schema};
///
/// let schema = Schema::from([("PORT", port())]);
/// let env = RawEnv::from([("PORT", "8080")]);
///
/// let cleaned = try_clean_env(&schema, &env)?;
/// assert_eq!(cleaned.number("PORT"), Some(8080.0));
/// # Ok::<(), envguard::EnvError>(())
/// ```
pub fn try_clean_env(schema: &Schema, env: &RawEnv) -> Result<CleanedEnv> {
    let mut cleaned = CleanedEnv::new();
    if schema.is_empty() {
        return Ok(cleaned);
    }

    let mode = Mode::from_env(env);
    debug!(?mode, fields = schema.len(), "validating environment");

    for (key, spec) in schema.iter() {
        let value = clean_field(key, spec, env, mode)?;
        trace!(key, %value, "field validated");
        cleaned.insert(key, value);
    }

    Ok(cleaned)
}

/// Validates the live process environment, exiting the process on failure
///
/// This is the fail-fast startup entry point: misconfigured environments
/// never let the application proceed. On failure a single diagnostic line
/// is printed to standard output and the process exits with status 1; no
/// error is ever returned to the caller.
///
/// # Examples
///
/// ```no_run
/// use envguard::{clean_env, port, string, Schema};
///
/// let schema = Schema::from([
///     ("PORT", port().with_dev_default(3000)),
///     ("HOST", string().with_default("localhost")),
/// ]);
///
/// let env = clean_env(&schema);
/// let port = env.number("PORT").unwrap_or_default();
/// ```
pub fn clean_env(schema: &Schema) -> CleanedEnv {
    match try_clean_env(schema, &RawEnv::from_process()) {
        Ok(cleaned) => cleaned,
        Err(err) => report::fail(&err),
    }
}

/// A field's effective raw value: the environment string when the variable
/// is set, otherwise the configured fallback.
enum Resolved<'a> {
    Env(&'a str),
    Fallback(&'a DefaultValue),
}

fn clean_field(key: &str, spec: &FieldSpec, env: &RawEnv, mode: Mode) -> Result<Value> {
    let kind = Kind::from_name(spec.kind()).ok_or_else(|| EnvError::UnknownType {
        kind: spec.kind().to_string(),
    })?;

    // An explicit default always beats dev_default; dev_default is only
    // honored in development mode.
    let options = spec.options();
    let fallback = options.default.as_ref().or(if mode.is_development() {
        options.dev_default.as_ref()
    } else {
        None
    });

    let resolved = match env.get(key) {
        Some(raw) => {
            trace!(key, "resolved from environment");
            Resolved::Env(raw)
        }
        None => match fallback {
            Some(value) => {
                trace!(key, "resolved from fallback");
                Resolved::Fallback(value)
            }
            None => return Err(missing_or_wrong_type(key, kind)),
        },
    };

    match kind {
        Kind::String => clean_string(key, kind, &resolved),
        Kind::Number => clean_number(key, &resolved),
        Kind::Port => clean_port(key, &resolved),
        Kind::Url => clean_url(key, kind, &resolved),
    }
}

fn clean_string(key: &str, kind: Kind, resolved: &Resolved<'_>) -> Result<Value> {
    match resolved {
        Resolved::Env(raw) => Ok(Value::Str((*raw).to_string())),
        Resolved::Fallback(DefaultValue::Str(s)) => Ok(Value::Str(s.clone())),
        Resolved::Fallback(_) => Err(missing_or_wrong_type(key, kind)),
    }
}

fn clean_number(key: &str, resolved: &Resolved<'_>) -> Result<Value> {
    resolve_number(key, Kind::Number, resolved).map(Value::Number)
}

fn clean_port(key: &str, resolved: &Resolved<'_>) -> Result<Value> {
    let port = resolve_number(key, Kind::Port, resolved)?;
    // The accepted range is 0..=65536, both bounds inclusive, kept exactly
    // for compatibility with existing schemas.
    if !(0.0..=65536.0).contains(&port) {
        return Err(EnvError::InvalidPort {
            key: key.to_string(),
        });
    }
    Ok(Value::Number(port))
}

fn clean_url(key: &str, kind: Kind, resolved: &Resolved<'_>) -> Result<Value> {
    match resolved {
        Resolved::Env(raw) => coerce_url(key, raw),
        Resolved::Fallback(DefaultValue::Str(s)) => coerce_url(key, s),
        Resolved::Fallback(DefaultValue::Url(url)) => Ok(Value::Str(url.to_string())),
        Resolved::Fallback(DefaultValue::Number(_)) => Err(missing_or_wrong_type(key, kind)),
    }
}

fn coerce_url(key: &str, raw: &str) -> Result<Value> {
    coerce::normalize_url(raw)
        .map(Value::Str)
        .map_err(|source| EnvError::InvalidUrl {
            key: key.to_string(),
            source,
        })
}

/// Resolves a numeric value for `number` and `port` fields: environment
/// strings go through numeric coercion, fallbacks must already be numeric.
fn resolve_number(key: &str, kind: Kind, resolved: &Resolved<'_>) -> Result<f64> {
    match resolved {
        Resolved::Env(raw) => coerce::coerce_number(raw).ok_or_else(|| EnvError::NotANumber {
            key: key.to_string(),
        }),
        Resolved::Fallback(DefaultValue::Number(n)) if n.is_nan() => {
            Err(EnvError::NotANumber {
                key: key.to_string(),
            })
        }
        Resolved::Fallback(DefaultValue::Number(n)) => Ok(*n),
        Resolved::Fallback(_) => Err(missing_or_wrong_type(key, kind)),
    }
}

fn missing_or_wrong_type(key: &str, kind: Kind) -> EnvError {
    EnvError::MissingOrWrongType {
        key: key.to_string(),
        kind,
    }
}
