//! Byte-wise percent-encoding.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// RFC 3986 unreserved characters other than ALPHA / DIGIT.
pub fn is_unreserved(b: u8) -> bool {
    matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encodes the UTF-8 bytes of `input`.
///
/// ASCII letters and digits are always copied through. `-`, `.`, `_` and `~`
/// are copied through unless `encode_unreserved` is set, in which case they are
/// escaped like every other byte. Escapes use uppercase hex, and multi-byte
/// characters are escaped one byte at a time.
pub fn encode_percent(input: &str, encode_unreserved: bool) -> String {
    // In the worst case, every byte becomes "%XX" (3 chars)
    let mut out = String::with_capacity(input.len() * 3);

    for b in input.bytes() {
        if b.is_ascii_alphanumeric() || (!encode_unreserved && is_unreserved(b)) {
            out.push(b as char);
            continue;
        }
        out.push('%');
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0F) as usize] as char);
    }

    out
}
