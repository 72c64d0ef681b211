//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value. A `Value` exclusively owns its descendants; dropping a root drops
//! the whole subtree.

use alloc::{string::String, vec::Vec};

use crate::Map;

/// An array of JSON values.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// Numbers are IEEE-754 `f64`. The decoder only ever produces finite
/// numbers; a hand-built tree containing a NaN or infinity is rejected by
/// [`encode`](crate::encode). Object members keep their insertion order,
/// including duplicates (see [`Map`]).
///
/// # Examples
///
/// ```
/// use jsonwire::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key", Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(jsonwire::encode(&v).unwrap(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The literal `null`.
    Null,
    /// The literals `true` and `false`.
    Boolean(bool),
    /// A finite IEEE-754 double.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// An insertion-ordered sequence of key/value members.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonwire::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self { Some(*b) } else { None }
    }

    /// The numeric payload, if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Number(n) = self { Some(*n) } else { None }
    }

    /// The string payload, if the value is [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    /// The elements, if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(a) = self { Some(a) } else { None }
    }

    /// Mutable variant of [`as_array`](Value::as_array).
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        if let Self::Array(a) = self { Some(a) } else { None }
    }

    /// The members, if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(o) = self { Some(o) } else { None }
    }

    /// Mutable variant of [`as_object`](Value::as_object).
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        if let Self::Object(o) = self { Some(o) } else { None }
    }

    /// Looks up an object member by key.
    ///
    /// Returns `None` when the value is not an object or no member matches.
    /// With duplicate keys, the first member in insertion order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonwire::{Value, parse};
    ///
    /// let doc = parse(r#"{"a":1,"a":2}"#).unwrap();
    /// assert_eq!(doc.get("a"), Some(&Value::Number(1.0)));
    /// assert_eq!(doc.get("b"), None);
    /// assert_eq!(Value::Null.get("a"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Self::Object(map) = self {
            map.get(key)
        } else {
            None
        }
    }
}

impl core::fmt::Display for Value {
    /// Writes the compact wire encoding of the value.
    ///
    /// Formatting fails (with [`core::fmt::Error`]) when the tree cannot be
    /// encoded; use [`encode`](crate::encode) to learn why.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = crate::encode(self).map_err(|_| core::fmt::Error)?;
        f.write_str(&text)
    }
}
