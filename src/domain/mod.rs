//! Domain types for envguard.
//!
//! This module contains the core output and error types shared by the rest
//! of the crate:
//!
//! - **Coerced values** ([`Value`]) and the cleaned output mapping
//!   ([`CleanedEnv`])
//! - **Error types** ([`EnvError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, EnvError>`]:
//!
//! ```
//! use envguard::domain::{EnvError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are propagated with the ? operator
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;
pub mod value;

// Re-export commonly used types
pub use errors::EnvError;
pub use result::Result;
pub use value::{CleanedEnv, Value};
