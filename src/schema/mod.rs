//! Schema declaration for envguard.
//!
//! A schema is a flat mapping from field names to typed descriptors, built
//! from one declaration function per supported kind:
//!
//! - [`number`] — numeric fields, coerced to `f64`
//! - [`string`] — plain string fields, stored verbatim
//! - [`url`] — URL fields, parsed and normalized
//! - [`port`] — numeric fields constrained to the port range
//!
//! Builders capture the kind and options into a [`FieldSpec`]; no validation
//! happens until the schema is handed to the engine.
//!
//! # Quick Start
//!
//! ```
//! use envguard::{number, port, string, url, Schema};
//!
//! let schema = Schema::from([
//!     ("PORT", port().with_dev_default(3000)),
//!     ("WORKERS", number().with_default(4)),
//!     ("HOST", string().with_default("localhost")),
//!     ("API_URL", url().with_dev_default("http://localhost:8080/")),
//! ]);
//! ```
//!
//! # Data-driven schemas
//!
//! Descriptors serialize with serde, so a schema can also be assembled from
//! configuration data. Kind names arriving as text are checked by the
//! engine, not at construction time:
//!
//! ```
//! use envguard::{FieldSpec, Schema};
//!
//! let spec: FieldSpec = serde_json::from_str(r#"{"kind":"port"}"#).unwrap();
//! let mut schema = Schema::new();
//! schema.declare("PORT", spec);
//! ```

pub mod builders;
pub mod field;
pub mod map;

// Re-export commonly used types
pub use builders::{number, port, string, url};
pub use field::{DefaultValue, FieldOptions, FieldSpec, Kind};
pub use map::Schema;
