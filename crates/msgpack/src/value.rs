//! [`Value`] — the dynamic value model every encode/decode call produces or
//! consumes.

use crate::{MsgPackExtension, Timestamp};

/// A closed tagged union over every kind of value the codec can carry.
///
/// Values are immutable trees: the wire format cannot represent cycles or
/// back-references, and the codec never retains a value across calls.
///
/// The signed/unsigned split between [`Value::Integer`] and
/// [`Value::UInteger`] exists only to cover the full 64-bit unsigned range;
/// the decoder produces [`Value::Integer`] for anything that fits `i64` and
/// [`Value::UInteger`] only above `i64::MAX`. Equality treats the two
/// variants as one numeric domain.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    /// The "absent" marker. A map entry whose value is `Undefined` is
    /// omitted from the encoded output; anywhere else, `Undefined` is an
    /// unsupported encode input.
    Undefined,
    Bool(bool),
    Integer(i64),
    UInteger(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Key/value pairs in wire order. Keys may be any value; the codec
    /// enforces no uniqueness and performs no de-duplication.
    Map(Vec<(Value, Value)>),
    Timestamp(Timestamp),
    Ext(MsgPackExtension),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is an integer that fits `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::UInteger(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// The integer value, if this is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(i) => u64::try_from(*i).ok(),
            Value::UInteger(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up the first map entry whose key is the given string.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| matches!(k, Value::Str(s) if s == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Structural equality with two deliberate rules: floats compare bit-exact
/// at 64-bit precision (so NaN payloads round-trip verifiably), and signed/
/// unsigned integers compare by numeric value across the variant split.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Undefined, Undefined) => true,
            (Bool(a), Bool(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (UInteger(a), UInteger(b)) => a == b,
            (Integer(a), UInteger(b)) | (UInteger(b), Integer(a)) => {
                *a >= 0 && *a as u64 == *b
            }
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Str(a), Str(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            (Timestamp(a), Timestamp(b)) => a == b,
            (Ext(a), Ext(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::UInteger(value),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Timestamp(value)
    }
}

impl From<MsgPackExtension> for Value {
    fn from(value: MsgPackExtension) -> Self {
        Value::Ext(value)
    }
}
