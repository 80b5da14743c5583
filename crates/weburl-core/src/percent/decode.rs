//! Lenient percent-decoding.

use super::hex_value;

/// Decodes `%HH` escapes in `input`.
///
/// A `%` that is not followed by two hex digits (either case) is copied through
/// literally together with whatever follows it. The decoded bytes are converted
/// back to text with lossy UTF-8 conversion, so e.g. a lone `%FF` becomes
/// U+FFFD rather than an error.
pub fn decode_percent(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match escaped_byte(bytes, i) {
            Some(b) => {
                out.push(b);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }

    match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// The byte encoded by a well-formed `%HH` escape starting at `at`, if any.
fn escaped_byte(bytes: &[u8], at: usize) -> Option<u8> {
    if bytes[at] != b'%' {
        return None;
    }
    let high = hex_value(*bytes.get(at + 1)?)?;
    let low = hex_value(*bytes.get(at + 2)?)?;
    Some(high << 4 | low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes() {
        assert_eq!(decode_percent("c%2B%2B%20code"), "c++ code");
        assert_eq!(decode_percent("%41%42c"), "ABc");
    }

    #[test]
    fn decodes_lowercase_hex() {
        assert_eq!(decode_percent("%2b%2f"), "+/");
    }

    #[test]
    fn escape_at_end_of_input() {
        assert_eq!(decode_percent("a%41"), "aA");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(decode_percent("caf%C3%A9"), "caf\u{e9}");
        assert_eq!(decode_percent("%E6%97%A5"), "\u{65e5}");
    }

    #[test]
    fn malformed_escapes_are_literal() {
        assert_eq!(decode_percent("100%"), "100%");
        assert_eq!(decode_percent("%4"), "%4");
        assert_eq!(decode_percent("%zz1"), "%zz1");
        assert_eq!(decode_percent("%%41"), "%A");
    }

    #[test]
    fn non_ascii_input_is_kept() {
        assert_eq!(decode_percent("\u{e9}t\u{e9}%20!"), "\u{e9}t\u{e9} !");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_percent("a%FFb"), "a\u{fffd}b");
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(decode_percent("a+b"), "a+b");
    }
}
