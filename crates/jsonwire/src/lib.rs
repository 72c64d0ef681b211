//! A strict codec for [RFC 8259] JSON text.
//!
//! `jsonwire` decodes JSON documents into an owned [`Value`] tree and
//! encodes trees back to compact JSON, enforcing the full strictness of the
//! RFC in both directions: exact lowercase literals, the precise number
//! grammar, mandatory string escaping rules, surrogate-pair validation, and
//! a nesting ceiling of [`MAX_DEPTH`] that protects the call stack. Object
//! members keep their insertion order — including duplicate keys — so
//! decoding and re-encoding a document is stable.
//!
//! Deliberately out of scope: comments, trailing commas, `NaN`/infinities,
//! streaming decode, and every other extension to the RFC. Input and output
//! are UTF-8 only; a single leading UTF-8 byte-order mark is tolerated on
//! input and never emitted.
//!
//! # Examples
//!
//! ```
//! use jsonwire::{Value, encode, parse};
//!
//! let doc = parse(r#"{ "name": "jsonwire", "strict": true }"#)?;
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("jsonwire"));
//! assert_eq!(encode(&doc)?, r#"{"name":"jsonwire","strict":true}"#);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod encoder;
mod error;
mod map;
mod parser;
mod pretty;
mod value;

#[cfg(test)]
mod tests;

pub use encoder::encode;
pub use error::{EncodeError, ParseError, SyntaxError};
pub use map::Map;
pub use parser::{parse, parse_bytes};
pub use pretty::Pretty;
pub use value::{Array, Value};

/// Ceiling on array/object nesting, enforced by both the decoder and the
/// encoder. A container at nesting level `MAX_DEPTH` fails the operation,
/// bounding recursion on pathological inputs.
pub const MAX_DEPTH: usize = 512;
