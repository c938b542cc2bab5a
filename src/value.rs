//! Dynamic value representation for JSON data.
//!
//! This module provides the [`Value`] enum which represents any JSON value
//! as a tree of owned nodes. It's useful for working with JSON data when
//! the structure isn't known at compile time.
//!
//! ## Core Types
//!
//! - [`Value`]: An enum representing any JSON value (null, bool, int,
//!   number, string, array, object)
//! - [`Map`]: The object payload, an insertion-ordered map with unique keys
//!
//! ## Ownership
//!
//! A `Value` owns its whole subtree exclusively: there is no sharing or
//! back-reference between nodes. Dropping a value drops every descendant;
//! cloning duplicates the entire tree; assigning over a value releases its
//! previous payload before attaching the new one.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use dynjson::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let int = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the json! macro
//! use dynjson::json;
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Building Trees Incrementally
//!
//! Indexing an object by a missing key inserts `null` there and hands back
//! a mutable reference, so trees can be grown key by key:
//!
//! ```rust
//! use dynjson::{Map, Value};
//!
//! let mut root = Value::Object(Map::new());
//! *root.entry("server").unwrap() = Value::Object(Map::new());
//! *root.entry("server").unwrap().entry("port").unwrap() = Value::from(8080);
//!
//! assert_eq!(root.entry("server").unwrap().entry("port").unwrap().as_i64(), Some(8080));
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use dynjson::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert!(!value.is_string());
//! assert_eq!(value.as_i64(), Some(42));
//! ```

use crate::error::{Error, Result};
use crate::map::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any JSON value.
///
/// Exactly one of seven variants is live at a time, and the variant always
/// agrees with its payload — the type system rules out a tag without a
/// matching payload. `Int` and `Number` are distinct variants: the grammar
/// only ever produces `Number` (see [`crate::parser`]), while `Int` comes
/// from programmatic construction.
///
/// # Examples
///
/// ```rust
/// use dynjson::Value;
///
/// let null = Value::Null;
/// let num = Value::Number(123.125);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a floating number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The name of the live variant, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// Note that parsed numeric literals are always the `Number` variant,
    /// so this returns `None` for them:
    ///
    /// ```rust
    /// use dynjson::{parse, Value};
    ///
    /// assert_eq!(Value::from(42).as_i64(), Some(42));
    /// assert_eq!(parse("42").value.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a floating number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Indexes an object by key, inserting `null` at a missing key and
    /// returning a mutable reference to the value there.
    ///
    /// This auto-vivification is what makes incremental tree building
    /// work: assigning through a missing key inserts it on first access.
    /// Calling this on anything other than an object — including a null
    /// that was itself just vivified — fails with [`Error::WrongVariant`]
    /// and leaves the value untouched, so nesting a level deeper requires
    /// assigning an object there first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::{Map, Value};
    ///
    /// let mut obj = Value::Object(Map::new());
    /// *obj.entry("answer").unwrap() = Value::from(42);
    /// assert_eq!(obj.entry("answer").unwrap().as_i64(), Some(42));
    ///
    /// let mut text = Value::from("hello");
    /// assert!(text.entry("answer").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] when the value is not an object.
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        match self {
            Value::Object(obj) => Ok(obj.entry(key)),
            other => Err(Error::wrong_variant(
                "indexing by key",
                "object",
                other.type_name(),
            )),
        }
    }

    /// Looks up a key in an object without auto-vivifying.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] when the value is not an object.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        match self {
            Value::Object(obj) => Ok(obj.get(key)),
            other => Err(Error::wrong_variant(
                "key lookup",
                "object",
                other.type_name(),
            )),
        }
    }

    /// Returns whether an object contains the key, without auto-vivifying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::parse;
    ///
    /// let obj = parse(r#"{"a":1}"#).value;
    /// assert_eq!(obj.has("a").unwrap(), true);
    /// assert_eq!(obj.has("b").unwrap(), false);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] when the value is not an object.
    pub fn has(&self, key: &str) -> Result<bool> {
        match self {
            Value::Object(obj) => Ok(obj.contains_key(key)),
            other => Err(Error::wrong_variant(
                "key lookup",
                "object",
                other.type_name(),
            )),
        }
    }

    /// Indexes an array by position.
    ///
    /// Out-of-range positions panic, as with slice indexing; only the
    /// variant is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] when the value is not an array.
    pub fn at(&self, index: usize) -> Result<&Value> {
        match self {
            Value::Array(arr) => Ok(&arr[index]),
            other => Err(Error::wrong_variant(
                "indexing by position",
                "array",
                other.type_name(),
            )),
        }
    }

    /// Indexes an array by position, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] when the value is not an array.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        match self {
            Value::Array(arr) => Ok(&mut arr[index]),
            other => Err(Error::wrong_variant(
                "indexing by position",
                "array",
                other.type_name(),
            )),
        }
    }

    /// Returns the element count of an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::parse;
    ///
    /// assert_eq!(parse("[3,1,2]").value.len().unwrap(), 3);
    /// assert!(parse("null").value.len().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVariant`] when the value is not an array.
    pub fn len(&self) -> Result<usize> {
        match self {
            Value::Array(arr) => Ok(arr.len()),
            other => Err(Error::wrong_variant(
                "length",
                "array",
                other.type_name(),
            )),
        }
    }

    /// Releases the current payload, returning the value to `Null`.
    ///
    /// Composite payloads are dropped recursively.
    #[inline]
    pub fn reset(&mut self) {
        *self = Value::Null;
    }

    /// Moves the payload out, leaving `Null` behind.
    ///
    /// No deep copy is made: ownership of the whole subtree transfers to
    /// the returned value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::{json, Value};
    ///
    /// let mut a = json!([1, 2]);
    /// let b = a.take();
    /// assert!(a.is_null());
    /// assert!(b.is_array());
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Value::Int(value as i64)
        } else {
            Value::Number(value as f64)
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<&[Value]> for Value {
    fn from(value: &[Value]) -> Self {
        Value::Array(value.to_vec())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
