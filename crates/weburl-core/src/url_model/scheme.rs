//! URL scheme (`http` / `https`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UrlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    /// Canonical lowercase literal, without `://`.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Port implied when a URL does not carry one.
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    /// Lenient mapping used by the parser: `https` in any case is Https,
    /// anything else (including `ftp`, `HTTP` or garbage) is Http.
    pub fn from_scheme_text(text: &str) -> Scheme {
        if text.eq_ignore_ascii_case("https") {
            return Scheme::Https;
        }
        if !text.eq_ignore_ascii_case("http") {
            tracing::debug!(scheme = text, "unrecognized scheme, using http");
        }
        Scheme::Http
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only `http` and `https` (any case) are accepted.
impl FromStr for Scheme {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("http") {
            Ok(Scheme::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Scheme::Https)
        } else {
            Err(UrlError::UnknownScheme(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_mapping() {
        assert_eq!(Scheme::from_scheme_text("https"), Scheme::Https);
        assert_eq!(Scheme::from_scheme_text("HTTPS"), Scheme::Https);
        assert_eq!(Scheme::from_scheme_text("http"), Scheme::Http);
        assert_eq!(Scheme::from_scheme_text("ftp"), Scheme::Http);
        assert_eq!(Scheme::from_scheme_text(""), Scheme::Http);
    }

    #[test]
    fn strict_parse() {
        assert_eq!("HtTp".parse::<Scheme>(), Ok(Scheme::Http));
        assert_eq!("https".parse::<Scheme>(), Ok(Scheme::Https));
        assert_eq!(
            "ftp".parse::<Scheme>(),
            Err(UrlError::UnknownScheme("ftp".into()))
        );
    }

    #[test]
    fn default_ports() {
        assert_eq!(Scheme::Http.default_port(), 80);
        assert_eq!(Scheme::Https.default_port(), 443);
        assert_eq!(Scheme::default(), Scheme::Http);
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Scheme::Https.to_string(), "https");
    }
}
