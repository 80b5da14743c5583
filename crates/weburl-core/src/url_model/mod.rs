//! URL value type.
//!
//! A [`Url`] is a plain value holding the decomposed parts of an `http` or
//! `https` address. Parsing is lenient and never fails: whatever cannot be
//! understood is left at its default. Building always succeeds and writes the
//! fields back out without validation.
//!
//! `Url::parse(s).build()` is not guaranteed to reproduce `s` exactly (query
//! values are re-encoded, the scheme is normalized), but parsing a built URL
//! again yields the same value.

mod build;
mod parse;
mod query;
mod scheme;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use query::QueryParams;
pub use scheme::Scheme;

/// A parsed network address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub scheme: Scheme,
    /// Host name, without port. May be empty for malformed input.
    pub host: String,
    /// Explicit port; 0 means none was given.
    pub port: u16,
    /// Path starting at the first `/` after the host, or empty.
    pub path: String,
    /// Decoded query parameters in order of appearance.
    pub query: QueryParams,
    /// Text after the first `#` in the path, without the `#`.
    pub fragment: String,
}

impl Url {
    /// Default value: `http`, everything else empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposes `input`.
    ///
    /// # Examples
    ///
    /// - `Url::parse("https://a.com:8080/p?q=1#f")` → Https, `a.com`, 8080,
    ///   `/p`, `[("q", "1")]`, `f`
    /// - `Url::parse("a.com")` → Http, `a.com`, port 0, empty path
    pub fn parse(input: &str) -> Self {
        parse::parse_url(input)
    }

    /// Replaces the current contents with the result of parsing `input`.
    pub fn assign(&mut self, input: &str) {
        *self = Self::parse(input);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Serializes back to text. See [`fmt::Display`], which writes the same.
    pub fn build(&self) -> String {
        self.to_string()
    }

    /// The explicit port, or the scheme's default when none was given.
    pub fn effective_port(&self) -> u16 {
        if self.port == 0 {
            self.scheme.default_port()
        } else {
            self.port
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        build::write_url(self, f)
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Url {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Url {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_discards_previous_contents() {
        let mut url = Url::parse("https://a.com:81/x?k=v#f");
        url.assign("b.org");
        assert_eq!(
            url,
            Url {
                host: "b.org".into(),
                ..Url::default()
            }
        );
    }

    #[test]
    fn clear_resets_to_default() {
        let mut url = Url::parse("https://a.com:81/x?k=v#f");
        url.clear();
        assert_eq!(url, Url::new());
    }

    #[test]
    fn effective_port() {
        assert_eq!(Url::parse("http://a.com/").effective_port(), 80);
        assert_eq!(Url::parse("https://a.com/").effective_port(), 443);
        assert_eq!(Url::parse("https://a.com:8443/").effective_port(), 8443);
    }

    #[test]
    fn conversions_agree_with_parse() {
        let s = "https://h/p?a=1";
        let parsed: Url = s.parse().unwrap();
        assert_eq!(parsed, Url::parse(s));
        assert_eq!(Url::from(s), Url::parse(s));
        assert_eq!(Url::from(s.to_string()), Url::parse(s));
    }

    #[test]
    fn display_matches_build() {
        let url = Url::parse("https://h:1/p?a=b%20c#f");
        assert_eq!(url.to_string(), url.build());
        assert_eq!(url.build(), "https://h:1/p?a=b%20c#f");
    }

    #[test]
    fn json_shape() {
        let url = Url::parse("https://h/p?a=1");
        let json = serde_json::to_value(&url).unwrap();
        assert_eq!(json["scheme"], "https");
        assert_eq!(json["host"], "h");
        assert_eq!(json["port"], 0);
        assert_eq!(json["query"][0][0], "a");
        let back: Url = serde_json::from_value(json).unwrap();
        assert_eq!(back, url);
    }
}
