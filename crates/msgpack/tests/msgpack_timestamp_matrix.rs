//! Timestamp extension (type 255) wire forms: 4-byte seconds, 8-byte packed
//! seconds+nanoseconds, and the 12-byte general form.

use binpack_msgpack::msgpack::{decode, encode};
use binpack_msgpack::{Timestamp, Value};

fn bytes_of(ts: Timestamp) -> Vec<u8> {
    encode(&Value::Timestamp(ts)).unwrap()
}

#[test]
fn zero_nanoseconds_in_u32_range_takes_the_4_byte_form() {
    assert_eq!(
        bytes_of(Timestamp::from_secs(0)),
        vec![0xd6, 0xff, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        bytes_of(Timestamp::from_secs(1_700_000_000)),
        vec![0xd6, 0xff, 0x65, 0x53, 0xf1, 0x00]
    );
    assert_eq!(
        bytes_of(Timestamp::from_secs(u32::MAX as i64)),
        vec![0xd6, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn nanoseconds_or_34_bit_seconds_take_the_8_byte_form() {
    // 1 second + 1 nanosecond: packed as (nsec << 34) | sec.
    let packed: u64 = (1u64 << 34) | 1;
    let mut expected = vec![0xd7, 0xff];
    expected.extend_from_slice(&packed.to_be_bytes());
    assert_eq!(bytes_of(Timestamp::new(1, 1)), expected);

    // Seconds past u32 with zero nanoseconds still fit 34 bits.
    let sec = u32::MAX as i64 + 1;
    let mut expected = vec![0xd7, 0xff];
    expected.extend_from_slice(&(sec as u64).to_be_bytes());
    assert_eq!(bytes_of(Timestamp::from_secs(sec)), expected);
}

#[test]
fn out_of_range_seconds_take_the_12_byte_form() {
    let sec = 1i64 << 34;
    let mut expected = vec![0xc7, 12, 0xff, 0x00, 0x00, 0x00, 0x00];
    expected.extend_from_slice(&sec.to_be_bytes());
    assert_eq!(bytes_of(Timestamp::from_secs(sec)), expected);
}

#[test]
fn pre_epoch_seconds_require_the_12_byte_form() {
    let ts = Timestamp::new(-86400, 123);
    let bytes = bytes_of(ts);
    assert_eq!(&bytes[..3], &[0xc7, 12, 0xff]);
    assert_eq!(decode(&bytes).unwrap(), Value::Timestamp(ts));
}

#[test]
fn each_form_decodes_to_the_same_instant() {
    // The same second count through all three payload shapes.
    let sec = 1234i64;

    let mut fix4 = vec![0xd6, 0xff];
    fix4.extend_from_slice(&(sec as u32).to_be_bytes());

    let mut fix8 = vec![0xd7, 0xff];
    fix8.extend_from_slice(&(sec as u64).to_be_bytes());

    let mut ext12 = vec![0xc7, 12, 0xff, 0x00, 0x00, 0x00, 0x00];
    ext12.extend_from_slice(&sec.to_be_bytes());

    for bytes in [fix4, fix8, ext12] {
        assert_eq!(
            decode(&bytes).unwrap(),
            Value::Timestamp(Timestamp::from_secs(sec)),
            "bytes {bytes:x?}"
        );
    }
}

#[test]
fn packed_form_splits_nanoseconds_at_bit_34() {
    let packed: u64 = (999_999_999u64 << 34) | ((1u64 << 34) - 1);
    let mut bytes = vec![0xd7, 0xff];
    bytes.extend_from_slice(&packed.to_be_bytes());
    assert_eq!(
        decode(&bytes).unwrap(),
        Value::Timestamp(Timestamp::new((1 << 34) - 1, 999_999_999))
    );
}
