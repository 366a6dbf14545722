//! Failure diagnostics for the process-terminating path
//!
//! Every failure reaching [`clean_env`](crate::clean_env) is rendered as one
//! line on standard output — the crate name, then the message in red — and
//! the process exits with a non-zero status. There is no machine-readable
//! channel here; callers who want structured errors use
//! [`try_clean_env`](crate::try_clean_env).

use crate::domain::EnvError;
use std::process;
use tracing::error;

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Renders the single-line diagnostic for a validation failure
pub(crate) fn render(err: &EnvError) -> String {
    format!("envguard: {ANSI_RED}{err}{ANSI_RESET}")
}

/// Prints the diagnostic and terminates the process
pub(crate) fn fail(err: &EnvError) -> ! {
    error!(error = %err, "environment validation failed");
    println!("{}", render(err));
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes_crate_name() {
        let err = EnvError::NotANumber {
            key: "PORT".to_string(),
        };
        let line = render(&err);
        assert!(line.starts_with("envguard: "));
    }

    #[test]
    fn test_render_wraps_message_in_red() {
        let err = EnvError::NotANumber {
            key: "PORT".to_string(),
        };
        let line = render(&err);
        assert_eq!(
            line,
            format!("envguard: {ANSI_RED}`PORT` is not a valid number{ANSI_RESET}")
        );
    }
}
