//! Portfolio review domain: wire payloads and input validation.

pub mod model;

use thiserror::Error;
use url::Url;

/// User-facing rejection reasons for the portfolio URL field.
///
/// The messages are shown verbatim in the UI, so the two cases stay
/// distinct: an empty field asks for a URL at all, a non-empty field
/// asks for a well-formed one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Please enter a valid URL.")]
    Empty,

    #[error("Please enter a properly formatted URL (e.g., https://example.com)")]
    Malformed,
}

/// Validate the portfolio URL field.
///
/// Whitespace is trimmed first; an empty field is rejected before any
/// parse attempt. Anything the URL parser accepts as an absolute URL
/// passes.
pub fn validate_portfolio_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }
    Url::parse(trimmed).map_err(|_| UrlError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_is_rejected_before_parsing() {
        assert_eq!(validate_portfolio_url(""), Err(UrlError::Empty));
        assert_eq!(validate_portfolio_url("   "), Err(UrlError::Empty));
    }

    #[test]
    fn plain_text_is_malformed() {
        assert_eq!(validate_portfolio_url("not a url"), Err(UrlError::Malformed));
    }

    #[test]
    fn relative_path_is_malformed() {
        assert_eq!(validate_portfolio_url("/about/me"), Err(UrlError::Malformed));
    }

    #[test]
    fn absolute_url_is_accepted() {
        let url = validate_portfolio_url("https://example.com").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!(validate_portfolio_url("  https://example.com/portfolio  ").is_ok());
    }

    #[test]
    fn messages_stay_distinct() {
        assert_eq!(UrlError::Empty.to_string(), "Please enter a valid URL.");
        assert_eq!(
            UrlError::Malformed.to_string(),
            "Please enter a properly formatted URL (e.g., https://example.com)"
        );
    }
}
