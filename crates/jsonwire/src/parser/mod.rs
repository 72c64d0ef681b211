//! Strict recursive-descent JSON decoder.
//!
//! The decoder makes a single pass over the input with a byte cursor,
//! dispatching on the first byte of each token. It is strict by
//! construction: exactly the RFC 8259 grammar is accepted, with the one
//! liberty the RFC itself grants — a single leading UTF-8 byte-order mark is
//! skipped. Nesting of arrays and objects is bounded by
//! [`MAX_DEPTH`](crate::MAX_DEPTH) so hostile inputs cannot exhaust the call
//! stack, and failures abandon the partially built tree to `Drop`.
//!
//! Strings are materialized with a run-copy strategy: unescaped spans are
//! appended in one slice per run, and only escape sequences are decoded
//! byte-by-byte. The cursor stops exclusively at ASCII bytes (`"`, `\`,
//! control bytes), so every copied run begins and ends on a UTF-8 character
//! boundary and multi-byte sequences pass through untouched.

mod escape_buffer;
mod numbers;

use alloc::string::String;

use escape_buffer::{UnicodeEscapeBuffer, combine_surrogates, is_high_surrogate, is_low_surrogate};

use crate::{
    Array, MAX_DEPTH, Map, Value,
    error::{ParseError, SyntaxError},
};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes a JSON document into a [`Value`] tree.
///
/// The entire input must be consumed: a single value, optionally surrounded
/// by JSON whitespace, optionally preceded by a UTF-8 byte-order mark.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first deviation from RFC 8259.
///
/// # Examples
///
/// ```
/// use jsonwire::parse;
///
/// let doc = parse(r#"[1, {"a": 2}]"#).unwrap();
/// assert_eq!(doc.as_array().unwrap().len(), 2);
/// assert!(parse("[1, 2,]").is_err());
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).document()
}

/// Decodes a JSON document from raw bytes.
///
/// The bytes must be well-formed UTF-8; anything else is rejected with
/// [`SyntaxError::InvalidUtf8`] before parsing begins. Other encodings
/// (UTF-16, UTF-32, their BOMs) are therefore rejected too.
///
/// # Errors
///
/// Returns a [`ParseError`] on ill-formed UTF-8 or any syntax violation.
pub fn parse_bytes(input: &[u8]) -> Result<Value, ParseError> {
    let text = core::str::from_utf8(input).map_err(|e| ParseError {
        kind: SyntaxError::InvalidUtf8,
        offset: e.valid_up_to(),
    })?;
    parse(text)
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn document(mut self) -> Result<Value, ParseError> {
        if self.bytes.starts_with(BOM) {
            self.pos = BOM.len();
        }
        let value = self.value(0)?;
        self.skip_whitespace();
        if self.pos != self.bytes.len() {
            return Err(self.error(SyntaxError::TrailingCharacters));
        }
        Ok(value)
    }

    fn error(&self, kind: SyntaxError) -> ParseError {
        ParseError {
            kind,
            offset: self.pos,
        }
    }

    fn error_at(&self, kind: SyntaxError, offset: usize) -> ParseError {
        ParseError { kind, offset }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// The character under the cursor, for error reporting. The cursor is on
    /// a character boundary whenever this is called; the fallback covers the
    /// impossible mid-sequence case without panicking.
    fn char_at_cursor(&self) -> char {
        self.src
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\u{FFFD}')
    }

    /// Skips the four whitespace bytes of RFC 8259. Vertical tab and form
    /// feed are not among them and surface as invalid characters.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Parses one value. `depth` counts the containers enclosing it; a
    /// container opened at nesting level `MAX_DEPTH` is refused.
    fn value(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            Some(b'"') => Ok(Value::String(self.string()?)),
            Some(b'[') => self.array(depth + 1),
            Some(b'{') => self.object(depth + 1),
            Some(b't') => {
                self.literal("true")?;
                Ok(Value::Boolean(true))
            }
            Some(b'f') => {
                self.literal("false")?;
                Ok(Value::Boolean(false))
            }
            Some(b'n') => {
                self.literal("null")?;
                Ok(Value::Null)
            }
            Some(b'-' | b'0'..=b'9') => Ok(Value::Number(self.number()?)),
            Some(_) => Err(self.error(SyntaxError::InvalidCharacter(self.char_at_cursor()))),
        }
    }

    /// Matches a byte-exact lowercase literal. `True` or `NULL` fail on the
    /// first mismatching byte.
    fn literal(&mut self, literal: &'static str) -> Result<(), ParseError> {
        for &expected in literal.as_bytes() {
            match self.peek() {
                Some(have) if have == expected => self.pos += 1,
                Some(_) => return Err(self.error(SyntaxError::InvalidCharacter(self.char_at_cursor()))),
                None => return Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            }
        }
        Ok(())
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        let len = numbers::scan(&self.bytes[start..])
            .map_err(|bad| self.error_at(SyntaxError::InvalidNumber, start + bad))?;
        self.pos += len;

        // The scanned span is all ASCII, and `f64::from_str` parses the RFC
        // grammar locale-independently with correct rounding.
        let value: f64 = self.src[start..self.pos]
            .parse()
            .map_err(|_| self.error_at(SyntaxError::InvalidNumber, start))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.error_at(SyntaxError::NumberOutOfRange, start))
        }
    }

    /// Parses a string with the cursor on the opening quote.
    fn string(&mut self) -> Result<String, ParseError> {
        self.pos += 1;
        let mut out = String::new();
        let mut run = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error(SyntaxError::UnexpectedEndOfInput)),
                Some(b'"') => {
                    out.push_str(&self.src[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.src[run..self.pos]);
                    self.pos += 1;
                    out.push(self.escape()?);
                    run = self.pos;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.error(SyntaxError::ControlCharacter(b)));
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Decodes one escape sequence with the cursor past the backslash.
    fn escape(&mut self) -> Result<char, ParseError> {
        let Some(specifier) = self.peek() else {
            return Err(self.error(SyntaxError::UnexpectedEndOfInput));
        };
        self.pos += 1;
        match specifier {
            b'"' => Ok('"'),
            b'\\' => Ok('\\'),
            b'/' => Ok('/'),
            b'b' => Ok('\u{0008}'),
            b'f' => Ok('\u{000C}'),
            b'n' => Ok('\n'),
            b'r' => Ok('\r'),
            b't' => Ok('\t'),
            b'u' => self.unicode_escape(),
            _ => {
                self.pos -= 1;
                Err(self.error(SyntaxError::InvalidEscape(self.char_at_cursor())))
            }
        }
    }

    /// Decodes `\uHHHH`, pairing surrogates, with the cursor past the `u`.
    fn unicode_escape(&mut self) -> Result<char, ParseError> {
        let escape_start = self.pos - 2;
        let unit = self.hex4()?;

        if unit == 0 {
            return Err(self.error_at(SyntaxError::NulCharacter, escape_start));
        }
        if is_low_surrogate(unit) {
            return Err(self.error_at(SyntaxError::LoneSurrogate(unit), escape_start));
        }
        if is_high_surrogate(unit) {
            // The low half must follow immediately as another \uHHHH.
            if self.peek() != Some(b'\\') || self.bytes.get(self.pos + 1) != Some(&b'u') {
                return Err(self.error_at(SyntaxError::LoneSurrogate(unit), escape_start));
            }
            self.pos += 2;
            let low = self.hex4()?;
            return combine_surrogates(unit, low)
                .ok_or_else(|| self.error_at(SyntaxError::LoneSurrogate(unit), escape_start));
        }

        // Non-surrogate BMP code units are scalar values by definition.
        char::from_u32(u32::from(unit))
            .ok_or_else(|| self.error_at(SyntaxError::LoneSurrogate(unit), escape_start))
    }

    fn hex4(&mut self) -> Result<u16, ParseError> {
        let mut buffer = UnicodeEscapeBuffer::new();
        loop {
            if self.peek().is_none() {
                return Err(self.error(SyntaxError::UnexpectedEndOfInput));
            }
            let digit = self.char_at_cursor();
            match buffer.feed(digit) {
                Ok(None) => self.pos += 1,
                Ok(Some(unit)) => {
                    self.pos += 1;
                    return Ok(unit);
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    /// Parses an array with the cursor on `[`. `depth` is this array's own
    /// nesting level.
    fn array(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth >= MAX_DEPTH {
            return Err(self.error(SyntaxError::DepthLimitExceeded));
        }
        self.pos += 1;
        let mut elements = Array::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.value(depth)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(elements));
                }
                Some(_) => {
                    return Err(self.error(SyntaxError::InvalidCharacter(self.char_at_cursor())));
                }
                None => return Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            }
        }
    }

    /// Parses an object with the cursor on `{`. `depth` is this object's own
    /// nesting level.
    fn object(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth >= MAX_DEPTH {
            return Err(self.error(SyntaxError::DepthLimitExceeded));
        }
        self.pos += 1;
        let mut members = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(members));
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                Some(_) => {
                    return Err(self.error(SyntaxError::InvalidCharacter(self.char_at_cursor())));
                }
                None => return Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            }
            let key = self.string()?;

            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.pos += 1,
                Some(_) => {
                    return Err(self.error(SyntaxError::InvalidCharacter(self.char_at_cursor())));
                }
                None => return Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            }

            members.insert(key, self.value(depth)?);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(members));
                }
                Some(_) => {
                    return Err(self.error(SyntaxError::InvalidCharacter(self.char_at_cursor())));
                }
                None => return Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            }
        }
    }
}
