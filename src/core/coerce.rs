//! Kind-specific coercion primitives
//!
//! These are the pure string → value conversions the engine applies after a
//! field's raw value has been resolved. Coercion rules:
//!
//! - Numeric: leading/trailing whitespace is tolerated, an empty or blank
//!   string coerces to 0, decimal and scientific notation are accepted, and
//!   infinities are accepted. Anything that does not coerce to a real number
//!   (including an explicit NaN) is rejected.
//! - URL: parsed with the `url` crate and rendered back in normalized
//!   absolute form, so `"http://example.com"` becomes `"http://example.com/"`.

use url::Url;

/// Coerces a raw string to a number, `None` when coercion fails
pub(crate) fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Parses a raw string as a URL and returns its normalized absolute form
pub(crate) fn normalize_url(raw: &str) -> Result<String, url::ParseError> {
    Url::parse(raw).map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_integers() {
        assert_eq!(coerce_number("8080"), Some(8080.0));
        assert_eq!(coerce_number("0"), Some(0.0));
        assert_eq!(coerce_number("-1"), Some(-1.0));
    }

    #[test]
    fn test_coerce_decimal_and_scientific() {
        assert_eq!(coerce_number("80.5"), Some(80.5));
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number(".5"), Some(0.5));
    }

    #[test]
    fn test_coerce_tolerates_whitespace() {
        assert_eq!(coerce_number("  42  "), Some(42.0));
        assert_eq!(coerce_number("\t7\n"), Some(7.0));
    }

    #[test]
    fn test_blank_coerces_to_zero() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("   "), Some(0.0));
    }

    #[test]
    fn test_infinities_accepted() {
        assert_eq!(coerce_number("inf"), Some(f64::INFINITY));
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("12abc"), None);
        assert_eq!(coerce_number("1,000"), None);
        assert_eq!(coerce_number("NaN"), None);
    }

    #[test]
    fn test_url_normalization_adds_trailing_slash() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_url_with_path_round_trips() {
        assert_eq!(
            normalize_url("http://example.com/path").unwrap(),
            "http://example.com/path"
        );
    }

    #[test]
    fn test_malformed_url_rejected() {
        assert!(normalize_url("not a url").is_err());
        assert!(normalize_url("/relative/only").is_err());
    }
}
