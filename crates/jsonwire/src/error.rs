//! Error types reported by the decoder and encoder.

use thiserror::Error;

/// An error produced while decoding JSON text.
///
/// Carries the [`SyntaxError`] kind and the byte offset into the input at
/// which the error was detected. The offset is measured from the start of
/// the input, including any leading byte-order mark.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub(crate) kind: SyntaxError,
    pub(crate) offset: usize,
}

impl ParseError {
    /// The kind of syntax violation encountered.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }

    /// Byte offset into the input at which the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The ways a JSON document can be malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A byte that cannot start or continue any token at this position.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// The input ended inside a value, string, or literal.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Non-whitespace bytes remained after the top-level value.
    #[error("trailing characters after value")]
    TrailingCharacters,
    /// A number deviating from the RFC 8259 grammar (`01`, `1.`, `1e`, ...).
    #[error("invalid number literal")]
    InvalidNumber,
    /// A grammatically valid number whose value overflows an `f64`.
    #[error("number out of range")]
    NumberOutOfRange,
    /// A backslash followed by anything other than `" \ / b f n r t u`.
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    /// A `\u` escape with fewer than four hexadecimal digits.
    #[error("invalid unicode escape sequence at character '{0}'")]
    InvalidUnicodeEscapeChar(char),
    /// A UTF-16 surrogate code unit not part of a valid surrogate pair.
    #[error("lone surrogate \\u{0:04X} in string")]
    LoneSurrogate(u16),
    /// An unescaped control byte (below `0x20`) inside a string.
    #[error("unescaped control character 0x{0:02X} in string")]
    ControlCharacter(u8),
    /// The escape `\u0000`; NUL is not permitted in decoded strings.
    #[error("NUL character in string")]
    NulCharacter,
    /// Arrays and objects nested [`MAX_DEPTH`](crate::MAX_DEPTH) levels deep.
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
    /// Input bytes that are not well-formed UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

/// An error produced while encoding a [`Value`](crate::Value) tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The tree contains a NaN or infinite number, which JSON cannot
    /// represent.
    #[error("number is not finite")]
    NonFiniteNumber,
    /// The tree nests arrays and objects [`MAX_DEPTH`](crate::MAX_DEPTH)
    /// levels deep.
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
}
