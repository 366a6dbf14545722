// Envguard - Fail-fast environment variable validation
// Copyright (c) 2026 Envguard Contributors
// Licensed under the MIT License

//! # Envguard - Typed, Fail-Fast Environment Validation
//!
//! Envguard validates and coerces a process's environment variables against
//! a declared schema, producing a typed, sanitized configuration mapping —
//! or stopping the process with a single diagnostic before a misconfigured
//! application can run.
//!
//! ## Overview
//!
//! Application startup code declares what it needs once, instead of
//! scattering raw string lookups through a codebase:
//!
//! ```no_run
//! use envguard::{clean_env, number, port, string, url, Schema};
//!
//! let schema = Schema::from([
//!     ("PORT", port().with_dev_default(3000)),
//!     ("WORKERS", number().with_default(4)),
//!     ("HOST", string().with_default("localhost")),
//!     ("API_URL", url().with_dev_default("http://localhost:8080/")),
//! ]);
//!
//! // Returns the cleaned mapping, or prints a diagnostic and exits.
//! let env = clean_env(&schema);
//!
//! let port = env.number("PORT").unwrap_or_default();
//! let host = env.string("HOST").unwrap_or_default();
//! ```
//!
//! ## Architecture
//!
//! - [`schema`] - Field descriptors, builders, and the schema mapping
//! - [`core`] - The single-pass validation engine and coercion rules
//! - [`environment`] - Environment snapshots and dev/production mode
//! - [`domain`] - Cleaned values, errors, and the `Result` alias
//!
//! ## Pure validation
//!
//! The engine itself never touches process-global state. For tests, or for
//! callers who want errors as data instead of an exit, thread a snapshot
//! through [`try_clean_env`]:
//!
//! ```
//! use envguard::{port, try_clean_env, EnvError, RawEnv, Schema};
//!
//! let schema = Schema::from([("PORT", port())]);
//! let env = RawEnv::from([("PORT", "70000")]);
//!
//! let err = try_clean_env(&schema, &env).unwrap_err();
//! assert!(matches!(err, EnvError::InvalidPort { .. }));
//! ```
//!
//! ## Defaults and modes
//!
//! Each field may carry a `default` and a `dev_default`. A `default` applies
//! whenever the variable is absent; a `dev_default` applies only in
//! development mode and never outranks an explicit `default`. Production
//! mode is selected by setting `APP_ENV=production`; anything else is
//! development.
//!
//! ## Failure semantics
//!
//! On the [`clean_env`] path every failure is fatal: one red line on
//! standard output, prefixed with the crate name, then exit with a non-zero
//! status. There is no recovery and no partial result — fixing the
//! environment is the remedy, not catching an error.

pub mod core;
pub mod domain;
pub mod environment;
mod report;
pub mod schema;

// Re-export the public API at the crate root
pub use crate::core::engine::{clean_env, try_clean_env};
pub use crate::domain::{CleanedEnv, EnvError, Result, Value};
pub use crate::environment::{Mode, RawEnv, MODE_VAR};
pub use crate::schema::{
    number, port, string, url, DefaultValue, FieldOptions, FieldSpec, Kind, Schema,
};
