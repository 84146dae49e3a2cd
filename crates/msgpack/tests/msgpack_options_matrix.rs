//! Call-level configuration: batch mode, numeric type hints, absent map
//! entries, and the invalid-type replacement hook.

use binpack_msgpack::msgpack::{decode_multiple, encode, encode_with};
use binpack_msgpack::{EncodeOptions, MsgPackError, Replacement, TypeHint, Value};

#[test]
fn batch_encode_concatenates_independent_values() {
    let items = vec![Value::Integer(1), Value::Null, Value::Str("x".to_owned())];
    let opts = EncodeOptions {
        multiple: true,
        ..Default::default()
    };
    let batch = encode_with(&Value::Array(items.clone()), &opts).unwrap();

    let mut expected = Vec::new();
    for item in &items {
        expected.extend(encode(item).unwrap());
    }
    assert_eq!(batch, expected);
    assert_eq!(decode_multiple(&batch).unwrap(), items);
}

#[test]
fn batch_encode_rejects_non_sequence_input() {
    let opts = EncodeOptions {
        multiple: true,
        ..Default::default()
    };
    assert!(matches!(
        encode_with(&Value::Integer(1), &opts),
        Err(MsgPackError::InvalidArgument(_))
    ));
}

#[test]
fn type_hint_forces_numeric_classification() {
    let double = EncodeOptions {
        type_hint: TypeHint::Double,
        ..Default::default()
    };
    let bytes = encode_with(&Value::Integer(3), &double).unwrap();
    assert_eq!(
        bytes,
        vec![0xcb, 0x40, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );

    let float = EncodeOptions {
        type_hint: TypeHint::Float,
        ..Default::default()
    };
    let bytes = encode_with(&Value::Float(0.5), &float).unwrap();
    assert_eq!(bytes, vec![0xca, 0x3f, 0x00, 0x00, 0x00]);

    let int = EncodeOptions {
        type_hint: TypeHint::Int,
        ..Default::default()
    };
    let bytes = encode_with(&Value::Float(-3.7), &int).unwrap();
    assert_eq!(bytes, vec![0xfd]); // -3 as negative fixint
}

#[test]
fn absent_map_entries_are_omitted() {
    let map = Value::Map(vec![
        (Value::Str("a".to_owned()), Value::Integer(1)),
        (Value::Str("b".to_owned()), Value::Undefined),
        (Value::Str("c".to_owned()), Value::Integer(3)),
    ]);
    let bytes = encode(&map).unwrap();
    // fixmap of 2: the "b" entry contributes neither length nor bytes.
    assert_eq!(
        bytes,
        vec![0x82, 0xa1, b'a', 0x01, 0xa1, b'c', 0x03]
    );
}

#[test]
fn unsupported_input_without_replacement_fails() {
    assert_eq!(
        encode(&Value::Undefined),
        Err(MsgPackError::UnsupportedType)
    );
    assert_eq!(
        encode(&Value::Array(vec![Value::Undefined])),
        Err(MsgPackError::UnsupportedType)
    );
}

#[test]
fn replacement_value_substitutes_unsupported_input() {
    let opts = EncodeOptions {
        invalid_type_replacement: Some(Replacement::Value(Value::Null)),
        ..Default::default()
    };
    assert_eq!(encode_with(&Value::Undefined, &opts).unwrap(), vec![0xc0]);

    // Inside composites too.
    let arr = Value::Array(vec![Value::Integer(1), Value::Undefined]);
    assert_eq!(encode_with(&arr, &opts).unwrap(), vec![0x92, 0x01, 0xc0]);
}

#[test]
fn replacement_function_receives_the_offending_value() {
    let opts = EncodeOptions {
        invalid_type_replacement: Some(Replacement::Func(Box::new(|offending: &Value| {
            Value::Str(format!("{offending:?}"))
        }))),
        ..Default::default()
    };
    let bytes = encode_with(&Value::Undefined, &opts).unwrap();
    let mut expected = vec![0xa9];
    expected.extend_from_slice(b"Undefined");
    assert_eq!(bytes, expected);
}

#[test]
fn replacement_result_is_not_replaced_again() {
    let opts = EncodeOptions {
        invalid_type_replacement: Some(Replacement::Value(Value::Undefined)),
        ..Default::default()
    };
    assert_eq!(
        encode_with(&Value::Undefined, &opts),
        Err(MsgPackError::UnsupportedType)
    );
}
