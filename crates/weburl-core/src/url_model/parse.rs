//! Lenient left-to-right decomposition of URL text.

use super::{QueryParams, Scheme, Url};

/// Splits `input` into its components. Never fails; sections that are absent
/// or malformed leave the corresponding field at its default.
pub(super) fn parse_url(input: &str) -> Url {
    let mut url = Url::default();

    let rest = match input.split_once("://") {
        Some((scheme, rest)) => {
            url.scheme = Scheme::from_scheme_text(scheme);
            rest
        }
        None => input,
    };

    let (host, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    url.host = match host.split_once(':') {
        Some((name, port)) => {
            url.port = parse_port(port);
            name.to_string()
        }
        None => host.to_string(),
    };

    let path = match path.split_once('#') {
        Some((path, fragment)) => {
            url.fragment = fragment.to_string();
            path
        }
        None => path,
    };

    url.path = match path.split_once('?') {
        Some((path, query)) => {
            url.query = QueryParams::parse_query_string(query);
            path.to_string()
        }
        None => path.to_string(),
    };

    url
}

/// Leading decimal digits of `text` as a port. No digits, or a value that does
/// not fit in a port number, yields 0.
fn parse_port(text: &str) -> u16 {
    let digits = text
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    match text[..digits].parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            tracing::debug!(port = &text[..digits], "port out of range, ignoring");
            0
        }
    }
}
