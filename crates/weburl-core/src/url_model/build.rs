//! Serialization of a [`Url`] back to text.

use std::fmt::{self, Write};

use super::Url;

/// Writes `url` as `scheme://host[:port]path[?query][#fragment]`.
///
/// Host, path and fragment are written verbatim; query values are
/// percent-encoded. No validation is done, so any value can be written.
pub(super) fn write_url<W: Write>(url: &Url, out: &mut W) -> fmt::Result {
    write!(out, "{}://{}", url.scheme, url.host)?;
    if url.port != 0 {
        write!(out, ":{}", url.port)?;
    }
    out.write_str(&url.path)?;
    if !url.query.is_empty() {
        write!(out, "?{}", url.query.to_query_string())?;
    }
    if !url.fragment.is_empty() {
        write!(out, "#{}", url.fragment)?;
    }
    Ok(())
}
