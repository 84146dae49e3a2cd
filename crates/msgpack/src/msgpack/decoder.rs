//! `MsgPackDecoder` — reads a byte sequence and reconstructs one or more
//! values.

use binpack_buffers::Reader;

use super::constants::{EXT_TIMESTAMP, NEVER_USED};
use super::error::MsgPackError;
use crate::{MsgPackExtension, Timestamp, Value};

/// MessagePack decoder.
///
/// Stateless across calls: every decode allocates its own cursor over the
/// borrowed input and retains nothing afterwards. All reads are bounds
/// checked, so truncated or malformed input fails with
/// [`MsgPackError::TruncatedInput`] instead of reading out of bounds.
#[derive(Default)]
pub struct MsgPackDecoder;

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode exactly one value. Trailing bytes are ignored; use
    /// [`MsgPackDecoder::decode_with_consumed`] or
    /// [`MsgPackDecoder::decode_multiple`] when they matter.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<Value, MsgPackError> {
        Ok(self.decode_with_consumed(bytes)?.0)
    }

    /// Decode one value and report how many input bytes it occupied.
    pub fn decode_with_consumed(
        &mut self,
        bytes: &[u8],
    ) -> Result<(Value, usize), MsgPackError> {
        if bytes.is_empty() {
            return Err(MsgPackError::InvalidArgument(
                "empty input supplied to decode",
            ));
        }
        let mut reader = Reader::new(bytes);
        let value = self.read_any(&mut reader)?;
        Ok((value, reader.x))
    }

    /// Batch mode: decode concatenated top-level values until the input is
    /// exhausted, in encoding order.
    pub fn decode_multiple(&mut self, bytes: &[u8]) -> Result<Vec<Value>, MsgPackError> {
        if bytes.is_empty() {
            return Err(MsgPackError::InvalidArgument(
                "empty input supplied to decode",
            ));
        }
        let mut reader = Reader::new(bytes);
        let mut values = Vec::new();
        while reader.size() > 0 {
            values.push(self.read_any(&mut reader)?);
        }
        Ok(values)
    }

    fn read_any(&mut self, r: &mut Reader<'_>) -> Result<Value, MsgPackError> {
        let byte = r.u8()?;
        match byte {
            0x00..=0x7f => Ok(Value::Integer(byte as i64)),
            0x80..=0x8f => self.read_map(r, (byte & 0x0f) as usize),
            0x90..=0x9f => self.read_arr(r, (byte & 0x0f) as usize),
            0xa0..=0xbf => self.read_str(r, (byte & 0x1f) as usize),
            0xc0 => Ok(Value::Null),
            NEVER_USED => Err(MsgPackError::InvalidByteCode),
            0xc2 => Ok(Value::Bool(false)),
            0xc3 => Ok(Value::Bool(true)),
            0xc4 => {
                let size = r.u8()? as usize;
                self.read_bin(r, size)
            }
            0xc5 => {
                let size = r.u16()? as usize;
                self.read_bin(r, size)
            }
            0xc6 => {
                let size = r.u32()? as usize;
                self.read_bin(r, size)
            }
            0xc7 => {
                let size = r.u8()? as usize;
                self.read_ext(r, size)
            }
            0xc8 => {
                let size = r.u16()? as usize;
                self.read_ext(r, size)
            }
            0xc9 => {
                let size = r.u32()? as usize;
                self.read_ext(r, size)
            }
            0xca => Ok(Value::Float(r.f32()? as f64)),
            0xcb => Ok(Value::Float(r.f64()?)),
            0xcc => Ok(Value::Integer(r.u8()? as i64)),
            0xcd => Ok(Value::Integer(r.u16()? as i64)),
            0xce => Ok(Value::Integer(r.u32()? as i64)),
            0xcf => {
                let uint = r.u64()?;
                // Stay in the signed domain whenever the value fits it.
                Ok(match i64::try_from(uint) {
                    Ok(int) => Value::Integer(int),
                    Err(_) => Value::UInteger(uint),
                })
            }
            0xd0 => Ok(Value::Integer(r.i8()? as i64)),
            0xd1 => Ok(Value::Integer(r.i16()? as i64)),
            0xd2 => Ok(Value::Integer(r.i32()? as i64)),
            0xd3 => Ok(Value::Integer(r.i64()?)),
            0xd4 => self.read_ext(r, 1),
            0xd5 => self.read_ext(r, 2),
            0xd6 => self.read_ext(r, 4),
            0xd7 => self.read_ext(r, 8),
            0xd8 => self.read_ext(r, 16),
            0xd9 => {
                let size = r.u8()? as usize;
                self.read_str(r, size)
            }
            0xda => {
                let size = r.u16()? as usize;
                self.read_str(r, size)
            }
            0xdb => {
                let size = r.u32()? as usize;
                self.read_str(r, size)
            }
            0xdc => {
                let count = r.u16()? as usize;
                self.read_arr(r, count)
            }
            0xdd => {
                let count = r.u32()? as usize;
                self.read_arr(r, count)
            }
            0xde => {
                let count = r.u16()? as usize;
                self.read_map(r, count)
            }
            0xdf => {
                let count = r.u32()? as usize;
                self.read_map(r, count)
            }
            0xe0..=0xff => Ok(Value::Integer(byte as i8 as i64)),
            // The arms above cover 0x00-0xff; this is defensive only.
            #[allow(unreachable_patterns)]
            _ => Err(MsgPackError::InvalidByteValue),
        }
    }

    fn read_str(&mut self, r: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        Ok(Value::Str(r.utf8(size)?.to_owned()))
    }

    fn read_bin(&mut self, r: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        Ok(Value::Bytes(r.buf(size)?.to_vec()))
    }

    fn read_arr(&mut self, r: &mut Reader<'_>, count: usize) -> Result<Value, MsgPackError> {
        // Each element is at least one byte, so the remaining input bounds
        // the allocation even for hostile length prefixes.
        let mut values = Vec::with_capacity(count.min(r.size()));
        for _ in 0..count {
            values.push(self.read_any(r)?);
        }
        Ok(Value::Array(values))
    }

    fn read_map(&mut self, r: &mut Reader<'_>, count: usize) -> Result<Value, MsgPackError> {
        let mut entries = Vec::with_capacity(count.min(r.size() / 2));
        for _ in 0..count {
            let key = self.read_any(r)?;
            let val = self.read_any(r)?;
            entries.push((key, val));
        }
        Ok(Value::Map(entries))
    }

    /// Read one extension: a type byte, then `size` payload bytes. Type 255
    /// is reinterpreted as [`Timestamp`] by payload length.
    fn read_ext(&mut self, r: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        let tag = r.u8()?;
        if tag == EXT_TIMESTAMP {
            return self.read_timestamp(r, size);
        }
        Ok(Value::Ext(MsgPackExtension::new(tag, r.buf(size)?.to_vec())))
    }

    fn read_timestamp(&mut self, r: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        let ts = match size {
            4 => Timestamp::from_secs(r.u32()? as i64),
            8 => {
                let packed = r.u64()?;
                Timestamp::new((packed & 0x3_ffff_ffff) as i64, (packed >> 34) as u32)
            }
            12 => {
                let nsec = r.u32()?;
                let sec = r.i64()?;
                Timestamp::new(sec, nsec)
            }
            _ => return Err(MsgPackError::InvalidExtensionLength(size)),
        };
        Ok(Value::Timestamp(ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Value {
        MsgPackDecoder::new().decode(bytes).unwrap()
    }

    #[test]
    fn test_fixint_ranges() {
        assert_eq!(decode(&[0x00]), Value::Integer(0));
        assert_eq!(decode(&[0x7f]), Value::Integer(127));
        assert_eq!(decode(&[0xe0]), Value::Integer(-32));
        assert_eq!(decode(&[0xff]), Value::Integer(-1));
    }

    #[test]
    fn test_signed_reads_sign_extend() {
        assert_eq!(decode(&[0xd0, 0x80]), Value::Integer(-128));
        assert_eq!(decode(&[0xd1, 0xff, 0x00]), Value::Integer(-256));
        assert_eq!(
            decode(&[0xd2, 0xff, 0xff, 0xff, 0xff]),
            Value::Integer(-1)
        );
    }

    #[test]
    fn test_uint64_above_i64_range() {
        let mut bytes = vec![0xcf];
        bytes.extend_from_slice(&u64::MAX.to_be_bytes());
        assert_eq!(decode(&bytes), Value::UInteger(u64::MAX));

        let mut bytes = vec![0xcf];
        bytes.extend_from_slice(&42u64.to_be_bytes());
        assert_eq!(decode(&bytes), Value::Integer(42));
    }

    #[test]
    fn test_reserved_byte_fails() {
        let err = MsgPackDecoder::new().decode(&[0xc1, 0x00]).unwrap_err();
        assert_eq!(err, MsgPackError::InvalidByteCode);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = MsgPackDecoder::new().decode(&[]).unwrap_err();
        assert!(matches!(err, MsgPackError::InvalidArgument(_)));
    }

    #[test]
    fn test_truncated_input_fails() {
        let mut decoder = MsgPackDecoder::new();
        // str8 announcing 5 bytes with only 2 present
        assert_eq!(
            decoder.decode(&[0xd9, 0x05, 0x61, 0x62]).unwrap_err(),
            MsgPackError::TruncatedInput
        );
        // array announcing 2 elements with only 1 present
        assert_eq!(
            decoder.decode(&[0x92, 0x01]).unwrap_err(),
            MsgPackError::TruncatedInput
        );
        // uint32 with a missing payload byte
        assert_eq!(
            decoder.decode(&[0xce, 0x00, 0x00, 0x00]).unwrap_err(),
            MsgPackError::TruncatedInput
        );
    }

    #[test]
    fn test_map_keeps_duplicate_keys() {
        // {"a": 1, "a": 2} stays two entries; no de-duplication pass.
        let bytes = [0x82, 0xa1, 0x61, 0x01, 0xa1, 0x61, 0x02];
        let value = decode(&bytes);
        let entries = value.as_map().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, Value::Integer(1));
        assert_eq!(entries[1].1, Value::Integer(2));
    }

    #[test]
    fn test_consumed_reports_cursor() {
        let mut decoder = MsgPackDecoder::new();
        let (value, consumed) = decoder.decode_with_consumed(&[0x01, 0x02]).unwrap();
        assert_eq!(value, Value::Integer(1));
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_invalid_timestamp_length() {
        // fixext1 with type 255: 1 is not a valid timestamp payload length.
        let err = MsgPackDecoder::new().decode(&[0xd4, 0xff, 0x00]).unwrap_err();
        assert_eq!(err, MsgPackError::InvalidExtensionLength(1));
    }
}
