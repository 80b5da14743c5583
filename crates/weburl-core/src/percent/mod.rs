//! Percent-encoding codec (RFC 3986 `%HH` escapes).
//!
//! Both directions work on the UTF-8 bytes of the input text. Neither direction
//! can fail: malformed escapes decode to literal text, and byte sequences that
//! are not valid UTF-8 after decoding are replaced with U+FFFD.

mod decode;
mod encode;

pub use decode::decode_percent;
pub use encode::{encode_percent, is_unreserved};

/// Value of a single ASCII hex digit, either case.
pub(crate) fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
