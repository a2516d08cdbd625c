//! XMP value types
//!
//! This module defines the scalar values a namespace can store, and the
//! declared value kinds a schema checks them against.

use crate::core::error::{XmpError, XmpResult};
use crate::types::uri::Uri;
use std::fmt;

/// XMP property value types
#[derive(Debug, Clone, PartialEq)]
pub enum XmpValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Real (floating point) value
    Real(f64),
    /// Boolean value
    Boolean(bool),
    /// URI value
    Uri(Uri),
}

impl XmpValue {
    /// Get the value as a string, if it is a string type
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmpValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is an integer type
    pub fn as_int(&self) -> Option<i64> {
        match self {
            XmpValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a real, if it is a real type
    pub fn as_real(&self) -> Option<f64> {
        match self {
            XmpValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is a boolean type
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            XmpValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a URI, if it is a URI type
    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            XmpValue::Uri(u) => Some(u),
            _ => None,
        }
    }

    /// The kind of this value
    pub fn value_type(&self) -> ValueType {
        ValueType::of(self)
    }
}

impl fmt::Display for XmpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmpValue::String(s) => write!(f, "{}", s),
            XmpValue::Integer(i) => write!(f, "{}", i),
            XmpValue::Real(r) => write!(f, "{:?}", r),
            XmpValue::Boolean(b) => f.write_str(if *b { "True" } else { "False" }),
            XmpValue::Uri(u) => write!(f, "{}", u),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for XmpValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            XmpValue::String(s) => serializer.serialize_str(s),
            XmpValue::Integer(i) => serializer.serialize_i64(*i),
            XmpValue::Real(r) => serializer.serialize_f64(*r),
            XmpValue::Boolean(b) => serializer.serialize_bool(*b),
            XmpValue::Uri(u) => serde::ser::Serialize::serialize(u, serializer),
        }
    }
}

impl From<String> for XmpValue {
    fn from(s: String) -> Self {
        XmpValue::String(s)
    }
}

impl From<&str> for XmpValue {
    fn from(s: &str) -> Self {
        XmpValue::String(s.to_string())
    }
}

impl From<i64> for XmpValue {
    fn from(i: i64) -> Self {
        XmpValue::Integer(i)
    }
}

impl From<f64> for XmpValue {
    fn from(r: f64) -> Self {
        XmpValue::Real(r)
    }
}

impl From<bool> for XmpValue {
    fn from(b: bool) -> Self {
        XmpValue::Boolean(b)
    }
}

impl From<Uri> for XmpValue {
    fn from(u: Uri) -> Self {
        XmpValue::Uri(u)
    }
}

/// Declared kind of a namespace property
///
/// Each kind carries its own coercion rules: a stored value of another kind
/// still satisfies the declaration when [`ValueType::coerce`] accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Free text
    Text,
    /// Signed 64-bit integer
    Integer,
    /// Floating point number
    Real,
    /// `True` or `False`
    Boolean,
    /// URI string
    Uri,
}

impl ValueType {
    /// The kind of a stored value
    pub fn of(value: &XmpValue) -> Self {
        match value {
            XmpValue::String(_) => ValueType::Text,
            XmpValue::Integer(_) => ValueType::Integer,
            XmpValue::Real(_) => ValueType::Real,
            XmpValue::Boolean(_) => ValueType::Boolean,
            XmpValue::Uri(_) => ValueType::Uri,
        }
    }

    /// Name of the kind, as used in error messages
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Text => "Text",
            ValueType::Integer => "Integer",
            ValueType::Real => "Real",
            ValueType::Boolean => "Boolean",
            ValueType::Uri => "URI",
        }
    }

    /// Convert a value to this kind
    ///
    /// Values already of this kind are returned unchanged. The stored value
    /// is never modified; the converted copy is returned.
    ///
    /// # Errors
    ///
    /// Returns `XmpError::BadValue` if the value has no representation of
    /// this kind.
    pub fn coerce(self, value: &XmpValue) -> XmpResult<XmpValue> {
        match self {
            ValueType::Text => Ok(XmpValue::String(value.to_string())),
            ValueType::Integer => coerce_integer(value).map(XmpValue::Integer),
            ValueType::Real => coerce_real(value).map(XmpValue::Real),
            ValueType::Boolean => coerce_boolean(value).map(XmpValue::Boolean),
            ValueType::Uri => coerce_uri(value).map(XmpValue::Uri),
        }
    }

    /// Check whether a value satisfies this kind, exactly or by coercion
    pub fn accepts(self, value: &XmpValue) -> bool {
        Self::of(value) == self || self.coerce(value).is_ok()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn cannot_convert(value: &XmpValue, target: ValueType) -> XmpError {
    XmpError::BadValue(format!(
        "cannot convert {} {:?} to {}",
        ValueType::of(value),
        value.to_string(),
        target
    ))
}

fn coerce_integer(value: &XmpValue) -> XmpResult<i64> {
    match value {
        XmpValue::Integer(i) => Ok(*i),
        XmpValue::String(s) => s
            .trim()
            .parse()
            .map_err(|_| cannot_convert(value, ValueType::Integer)),
        XmpValue::Uri(u) => u
            .trim()
            .parse()
            .map_err(|_| cannot_convert(value, ValueType::Integer)),
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        XmpValue::Real(r) if r.is_finite() && *r >= i64::MIN as f64 && *r < i64::MAX as f64 => {
            Ok(r.trunc() as i64)
        }
        XmpValue::Real(_) => Err(cannot_convert(value, ValueType::Integer)),
        XmpValue::Boolean(b) => Ok(i64::from(*b)),
    }
}

fn coerce_real(value: &XmpValue) -> XmpResult<f64> {
    match value {
        XmpValue::Real(r) => Ok(*r),
        XmpValue::Integer(i) => Ok(*i as f64),
        XmpValue::String(s) => s
            .trim()
            .parse()
            .map_err(|_| cannot_convert(value, ValueType::Real)),
        XmpValue::Uri(u) => u
            .trim()
            .parse()
            .map_err(|_| cannot_convert(value, ValueType::Real)),
        XmpValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
    }
}

// Truthiness: only empty text, zero and `false` are false
fn coerce_boolean(value: &XmpValue) -> XmpResult<bool> {
    Ok(match value {
        XmpValue::Boolean(b) => *b,
        XmpValue::String(s) => !s.is_empty(),
        XmpValue::Uri(u) => !u.is_empty(),
        XmpValue::Integer(i) => *i != 0,
        XmpValue::Real(r) => *r != 0.0,
    })
}

fn coerce_uri(value: &XmpValue) -> XmpResult<Uri> {
    match value {
        XmpValue::Uri(u) => Ok(u.clone()),
        XmpValue::String(s) => Ok(Uri::new(s.as_str())),
        other => Ok(Uri::new(other.to_string())),
    }
}
