//! Human-facing indented rendering of a value tree.
//!
//! This is a debug aid, not a wire format: layout and number formatting are
//! unspecified and may change. Tests of the codec contract target
//! [`encode`](crate::encode).

use core::fmt;

use crate::{MAX_DEPTH, Value, encoder::write_escaped_string};

impl Value {
    /// Returns a [`Display`](fmt::Display) adapter that renders the tree
    /// across multiple lines, indented by `indent` spaces per nesting level.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonwire::parse;
    ///
    /// let doc = parse(r#"{"a":[1,2]}"#).unwrap();
    /// let text = format!("{}", doc.pretty(2));
    /// assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    /// ```
    #[must_use]
    pub fn pretty(&self, indent: usize) -> Pretty<'_> {
        Pretty {
            value: self,
            indent,
        }
    }
}

/// Adapter returned by [`Value::pretty`].
#[derive(Clone, Copy, Debug)]
pub struct Pretty<'a> {
    value: &'a Value,
    indent: usize,
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(f, self.value, self.indent, 0)
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    for _ in 0..width {
        f.write_str(" ")?;
    }
    Ok(())
}

fn write_pretty(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    indent: usize,
    level: usize,
) -> fmt::Result {
    if level >= MAX_DEPTH {
        return Err(fmt::Error);
    }
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => {
            f.write_str("\"")?;
            write_escaped_string(s, f)?;
            f.write_str("\"")
        }
        Value::Array(elements) => {
            if elements.is_empty() {
                return f.write_str("[]");
            }
            f.write_str("[\n")?;
            let inner = (level + 1) * indent;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    f.write_str(",\n")?;
                }
                write_indent(f, inner)?;
                write_pretty(f, element, indent, level + 1)?;
            }
            f.write_str("\n")?;
            write_indent(f, level * indent)?;
            f.write_str("]")
        }
        Value::Object(members) => {
            if members.is_empty() {
                return f.write_str("{}");
            }
            f.write_str("{\n")?;
            let inner = (level + 1) * indent;
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(",\n")?;
                }
                write_indent(f, inner)?;
                f.write_str("\"")?;
                write_escaped_string(key, f)?;
                f.write_str("\": ")?;
                write_pretty(f, member, indent, level + 1)?;
            }
            f.write_str("\n")?;
            write_indent(f, level * indent)?;
            f.write_str("}")
        }
    }
}
