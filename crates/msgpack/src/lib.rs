//! binpack-msgpack: a MessagePack codec over a dynamic value model.
//!
//! The crate translates between [`Value`] trees (null, boolean, integer,
//! float, string, binary, array, map, timestamp, extension) and the compact
//! self-describing MessagePack wire format.
//!
//! # Example
//!
//! ```
//! use binpack_msgpack::{msgpack, Value};
//!
//! let value = Value::Array(vec![Value::Integer(1), Value::Str("two".into())]);
//! let bytes = msgpack::encode(&value).unwrap();
//! assert_eq!(msgpack::decode(&bytes).unwrap(), value);
//! ```

mod convert;
mod extension;
mod timestamp;
mod value;

pub mod msgpack;

pub use extension::MsgPackExtension;
pub use timestamp::Timestamp;
pub use value::Value;

pub use msgpack::{
    EncodeOptions, MsgPack, MsgPackDecoder, MsgPackEncoder, MsgPackError, Replacement, TypeHint,
};

#[cfg(test)]
mod tests {
    use super::msgpack::{decode, decode_multiple, encode};
    use super::Value;
    use serde_json::json;

    #[test]
    fn json_fixture_roundtrip_matrix() {
        let cases = vec![
            json!(null),
            json!(true),
            json!(123),
            json!(-123),
            json!("hello"),
            json!([1, 2, 3]),
            json!({"a": 1, "b": [true, null, "x"]}),
            json!({"nested": {"deep": [{"k": "v"}, 0.25]}}),
        ];
        for case in cases {
            let value = Value::from(case.clone());
            let bytes = encode(&value).expect("encode msgpack");
            let back = decode(&bytes).expect("decode msgpack");
            assert_eq!(serde_json::Value::try_from(back).unwrap(), case);
        }
    }

    #[test]
    fn nil_is_a_single_byte() {
        assert_eq!(encode(&Value::Null).unwrap(), vec![0xc0]);
        assert_eq!(decode(&[0xc0]).unwrap(), Value::Null);
    }

    #[test]
    fn batch_roundtrip_preserves_order() {
        let values = [
            Value::Integer(1),
            Value::Str("two".to_owned()),
            Value::Bool(true),
        ];
        let mut bytes = Vec::new();
        for value in &values {
            bytes.extend(encode(value).unwrap());
        }
        let decoded = decode_multiple(&bytes).unwrap();
        assert_eq!(decoded, values);
    }
}
