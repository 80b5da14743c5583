//! Errors raised by the strict helpers.
//!
//! Parsing and building a [`Url`](crate::url_model::Url) never fail; these
//! errors only come from the explicit validation helpers used when taking
//! user input (configuration values, CLI arguments).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Scheme text other than `http` or `https`.
    #[error("unknown scheme {0:?} (expected \"http\" or \"https\")")]
    UnknownScheme(String),
    /// Query parameter given without a `name=value` separator.
    #[error("query parameter {0:?} has no '='")]
    MissingEquals(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            UrlError::UnknownScheme("ftp".into()).to_string(),
            "unknown scheme \"ftp\" (expected \"http\" or \"https\")"
        );
        assert_eq!(
            UrlError::MissingEquals("flag".into()).to_string(),
            "query parameter \"flag\" has no '='"
        );
    }
}
