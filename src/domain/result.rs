//! Result type alias for envguard
//!
//! This module provides a convenient Result type alias that uses [`EnvError`]
//! as the error type.

use super::errors::EnvError;

/// Result type alias for envguard operations
///
/// # Examples
///
/// ```
/// use envguard::domain::result::Result;
/// use envguard::domain::errors::EnvError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(EnvError::NotANumber {
///         key: "WORKERS".to_string(),
///     })
/// }
/// ```
pub type Result<T> = std::result::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::EnvError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(EnvError::NotANumber {
            key: "N".to_string(),
        });
        assert!(result.is_err());
    }
}
