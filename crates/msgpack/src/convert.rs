//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! JSON is a strict subset of the value model, so the conversion into
//! [`Value`] is total. The reverse direction fails on kinds JSON cannot
//! carry (`Undefined`, binary, extensions, timestamps, non-string map keys,
//! non-finite floats).

use crate::msgpack::MsgPackError;
use crate::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInteger(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = MsgPackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(b)),
            Value::Integer(i) => Ok(serde_json::Value::from(i)),
            Value::UInteger(u) => Ok(serde_json::Value::from(u)),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .ok_or(MsgPackError::UnsupportedType),
            Value::Str(s) => Ok(serde_json::Value::String(s)),
            Value::Array(arr) => Ok(serde_json::Value::Array(
                arr.into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            Value::Map(entries) => {
                let mut obj = serde_json::Map::with_capacity(entries.len());
                for (key, val) in entries {
                    let Value::Str(key) = key else {
                        return Err(MsgPackError::UnsupportedType);
                    };
                    obj.insert(key, serde_json::Value::try_from(val)?);
                }
                Ok(serde_json::Value::Object(obj))
            }
            Value::Undefined | Value::Bytes(_) | Value::Timestamp(_) | Value::Ext(_) => {
                Err(MsgPackError::UnsupportedType)
            }
        }
    }
}
