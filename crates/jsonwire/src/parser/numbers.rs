//! Strict scanning of JSON number literals.
//!
//! RFC 8259 numbers are a strict subset of what `str::parse::<f64>` accepts
//! (`inf`, `nan`, `1.`, `.5`, and a leading `+` must all be rejected), so the
//! span is validated byte-wise here before conversion. The scanner knows
//! nothing about the value; overflow checks happen after conversion.

/// Scans a number at the start of `bytes` against the RFC 8259 grammar:
///
/// ```text
/// number = [ "-" ] int [ frac ] [ exp ]
/// int    = "0" | digit1-9 *digit
/// frac   = "." 1*digit
/// exp    = ("e" / "E") [ "-" / "+" ] 1*digit
/// ```
///
/// Returns the byte length of the literal, or `Err(offset)` pointing at the
/// first offending byte. A digit following a leading zero (`01`) is an
/// error here rather than a shorter match, so the caller reports it as a bad
/// number instead of trailing garbage.
pub(crate) fn scan(bytes: &[u8]) -> Result<usize, usize> {
    let mut pos = 0;

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    // Integer part: a lone zero or a nonzero digit followed by any digits.
    match bytes.get(pos) {
        Some(b'0') => {
            pos += 1;
            if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return Err(pos);
            }
        }
        Some(b'1'..=b'9') => {
            pos += 1;
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
        }
        _ => return Err(pos),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(pos);
        }
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(pos);
        }
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }

    Ok(pos)
}
