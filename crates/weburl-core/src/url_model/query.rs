//! Ordered query parameters.

use serde::{Deserialize, Serialize};

use crate::error::UrlError;
use crate::percent::{decode_percent, encode_percent};

/// Query parameters in order of appearance.
///
/// Repeated names are kept as separate entries, so this is a list of pairs
/// rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a query string (without the leading `?`).
    ///
    /// Tokens are split on `&`, then on their first `=`. Names are kept as
    /// written; values are percent-decoded. Tokens without `=` are dropped.
    pub fn parse_query_string(query: &str) -> Self {
        let mut params = Self::new();
        if query.is_empty() {
            return params;
        }
        for token in query.split('&') {
            match token.split_once('=') {
                Some((name, value)) => params.append(name, decode_percent(value)),
                None => tracing::trace!(token, "dropping query token without '='"),
            }
        }
        params
    }

    /// Parses a single `name=value` argument, taking the value literally.
    pub fn parse_pair(pair: &str) -> Result<(String, String), UrlError> {
        pair.split_once('=')
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .ok_or_else(|| UrlError::MissingEquals(pair.to_string()))
    }

    /// Serializes as `name=value` pairs joined by `&`, values percent-encoded
    /// with the unreserved characters left literal. No leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(&encode_percent(value, false));
        }
        out
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Values of every parameter called `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
