//! Compact JSON encoder.
//!
//! Walks a [`Value`] tree and serializes it with no optional whitespace.
//! The output is strict RFC 8259: `.` as the decimal point, control bytes
//! escaped, no BOM, keys in insertion order. Encoding is a deterministic
//! function of the tree.

use alloc::string::String;
use core::fmt::Write;

use crate::{EncodeError, MAX_DEPTH, Value};

/// Encodes a [`Value`] tree into compact JSON text.
///
/// Numbers are written as the shortest decimal form that parses back to the
/// identical `f64`, so `encode` ∘ `parse` preserves every numeric value
/// bit-for-bit.
///
/// # Errors
///
/// Fails on a non-finite number anywhere in the tree, or when containers
/// nest [`MAX_DEPTH`](crate::MAX_DEPTH) levels deep. Nothing is returned on
/// failure; there is no partial output.
///
/// # Examples
///
/// ```
/// use jsonwire::{encode, parse};
///
/// let doc = parse(" [ 1 , \"a\\tb\" ] ").unwrap();
/// assert_eq!(encode(&doc).unwrap(), "[1,\"a\\tb\"]");
/// assert!(encode(&jsonwire::Value::Number(f64::NAN)).is_err());
/// ```
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    let mut out = String::new();
    write_value(&mut out, value, 0)?;
    Ok(out)
}

/// Writes one value. `depth` counts the containers enclosing it, mirroring
/// the decoder's guard so that anything this encoder emits can be decoded
/// again.
fn write_value(out: &mut String, value: &Value, depth: usize) -> Result<(), EncodeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, *n)?,
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => {
            let depth = depth + 1;
            if depth >= MAX_DEPTH {
                return Err(EncodeError::DepthLimitExceeded);
            }
            out.push('[');
            let mut first = true;
            for element in elements {
                if !first {
                    out.push(',');
                }
                first = false;
                write_value(out, element, depth)?;
            }
            out.push(']');
        }
        Value::Object(members) => {
            let depth = depth + 1;
            if depth >= MAX_DEPTH {
                return Err(EncodeError::DepthLimitExceeded);
            }
            out.push('{');
            let mut first = true;
            for (key, member) in members {
                if !first {
                    out.push(',');
                }
                first = false;
                write_string(out, key);
                out.push(':');
                write_value(out, member, depth)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(out: &mut String, value: f64) -> Result<(), EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFiniteNumber);
    }
    write!(out, "{value}").expect("writing to a String cannot fail");
    Ok(())
}

fn write_string(out: &mut String, src: &str) {
    out.push('"');
    write_escaped_string(src, out).expect("writing to a String cannot fail");
    out.push('"');
}

/// Escapes a string body for inclusion in a JSON string literal.
///
/// `"` and `\` take backslash escapes, the five control characters with
/// short forms use them, any other code point below `U+0020` becomes
/// `\u00xx`, and everything else — including `/` and all non-ASCII — is
/// written verbatim.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => {
                write!(f, "\\u{:04x}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}
