//! `MsgPackEncoder` — walks a [`Value`] and appends its wire-format bytes to
//! a growable buffer.

use binpack_buffers::Writer;

use super::constants::*;
use super::error::MsgPackError;
use crate::{Timestamp, Value};

/// Forced numeric classification for encode calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeHint {
    /// Default classification: a float with an integral finite value is
    /// encoded as an integer; everything else keeps its kind.
    #[default]
    None,
    /// Force the integer path; fractional parts are truncated toward zero.
    /// Non-finite floats still fall back to float64.
    Int,
    /// Force the 32-bit float form (0xca).
    Float,
    /// Force the 64-bit float form (0xcb).
    Double,
}

/// Substitute for values the encoder does not support.
pub enum Replacement {
    /// Encode this value instead of the offending one.
    Value(Value),
    /// Call the function with the offending value and encode its result.
    Func(Box<dyn Fn(&Value) -> Value>),
}

/// Call-level encode configuration.
///
/// The replacement, when configured, is applied exactly once per offending
/// value: if the substitute is itself unsupported the call fails with
/// [`MsgPackError::UnsupportedType`].
#[derive(Default)]
pub struct EncodeOptions {
    /// Treat the input as a sequence of independent top-level values: the
    /// input must be an array, and each element is encoded on its own and
    /// concatenated.
    pub multiple: bool,
    /// Forced numeric classification.
    pub type_hint: TypeHint,
    /// Fallback for unsupported encode inputs.
    pub invalid_type_replacement: Option<Replacement>,
}

/// MessagePack encoder.
///
/// The encoder owns its scratch [`Writer`]; reuse across calls resets the
/// buffer, and independent instances share no state.
pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self { writer }
    }

    /// Encode a single value with default options.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, MsgPackError> {
        self.encode_with(value, &EncodeOptions::default())
    }

    /// Encode a value under the given options.
    ///
    /// With `multiple` set, `value` must be an array; each element is encoded
    /// as an independent top-level value and the encodings are concatenated.
    pub fn encode_with(
        &mut self,
        value: &Value,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, MsgPackError> {
        self.writer.reset();
        let result = if options.multiple {
            match value {
                Value::Array(items) => {
                    items.iter().try_for_each(|item| self.write_any(item, options))
                }
                _ => Err(MsgPackError::InvalidArgument(
                    "batch encode requires an array input",
                )),
            }
        } else {
            self.write_any(value, options)
        };
        match result {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                // A failed encode never returns partial output.
                self.writer.reset();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value, options: &EncodeOptions) -> Result<(), MsgPackError> {
        match value {
            Value::Undefined => match &options.invalid_type_replacement {
                Some(replacement) => {
                    let substitute = match replacement {
                        Replacement::Value(v) => v.clone(),
                        Replacement::Func(f) => f(value),
                    };
                    // The substitute gets one shot; it is not re-replaced.
                    self.write_supported(&substitute, options)
                }
                None => Err(MsgPackError::UnsupportedType),
            },
            _ => self.write_supported(value, options),
        }
    }

    fn write_supported(
        &mut self,
        value: &Value,
        options: &EncodeOptions,
    ) -> Result<(), MsgPackError> {
        match value {
            Value::Null => self.write_null(),
            Value::Undefined => return Err(MsgPackError::UnsupportedType),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Integer(i) => match options.type_hint {
                TypeHint::Float => self.writer.u8f32(FLOAT32, *i as f32),
                TypeHint::Double => self.writer.u8f64(FLOAT64, *i as f64),
                _ => self.write_integer(*i),
            },
            Value::UInteger(u) => match options.type_hint {
                TypeHint::Float => self.writer.u8f32(FLOAT32, *u as f32),
                TypeHint::Double => self.writer.u8f64(FLOAT64, *u as f64),
                _ => self.write_u_integer(*u),
            },
            Value::Float(f) => self.write_number(*f, options.type_hint),
            Value::Str(s) => self.write_str(s),
            Value::Bytes(b) => self.write_bin(b),
            Value::Array(arr) => {
                self.write_arr_hdr(arr.len());
                for item in arr {
                    self.write_any(item, options)?;
                }
            }
            Value::Map(entries) => {
                let count = entries
                    .iter()
                    .filter(|(_, v)| !v.is_undefined())
                    .count();
                self.write_map_hdr(count);
                for (key, val) in entries {
                    // Absent values drop the whole entry.
                    if val.is_undefined() {
                        continue;
                    }
                    self.write_any(key, options)?;
                    self.write_any(val, options)?;
                }
            }
            Value::Timestamp(ts) => self.write_timestamp(*ts),
            Value::Ext(ext) => self.write_ext(ext.tag, &ext.payload),
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.u8(NIL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { TRUE } else { FALSE });
    }

    /// Classify and encode a float under the given hint.
    ///
    /// Without a hint, an integral finite value takes the integer path;
    /// values beyond the 64-bit integer range are clamped to the nearest
    /// representable boundary rather than erroring.
    pub fn write_number(&mut self, num: f64, hint: TypeHint) {
        match hint {
            TypeHint::Float => self.writer.u8f32(FLOAT32, num as f32),
            TypeHint::Double => self.writer.u8f64(FLOAT64, num),
            TypeHint::Int => {
                if num.is_finite() {
                    self.write_number_as_integer(num.trunc());
                } else {
                    self.writer.u8f64(FLOAT64, num);
                }
            }
            TypeHint::None => {
                if num.is_finite() && num.fract() == 0.0 {
                    self.write_number_as_integer(num);
                } else {
                    self.writer.u8f64(FLOAT64, num);
                }
            }
        }
    }

    /// Integer path for a whole-number float, clamping past the 64-bit
    /// boundaries: overflow-positive becomes the max-uint64 bytes,
    /// overflow-negative the min-int64 bytes.
    fn write_number_as_integer(&mut self, num: f64) {
        if num >= 0.0 {
            // u64::MAX as f64 rounds up to 2^64, which no u64 holds.
            if num >= u64::MAX as f64 {
                self.writer.u8u64(UINT64, u64::MAX);
            } else {
                self.write_u_integer(num as u64);
            }
        } else if num < i64::MIN as f64 {
            self.writer.u8u64(INT64, i64::MIN as u64);
        } else {
            self.write_integer(num as i64);
        }
    }

    /// Encode a signed integer with the smallest fitting tag.
    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
        } else if int >= -32 {
            self.writer.u8(int as u8); // negative fixint, 0xe0-0xff
        } else if int >= i8::MIN as i64 {
            self.writer.u8u8(INT8, int as u8);
        } else if int >= i16::MIN as i64 {
            self.writer.u8u16(INT16, int as u16);
        } else if int >= i32::MIN as i64 {
            self.writer.u8u32(INT32, int as u32);
        } else {
            self.writer.u8u64(INT64, int as u64);
        }
    }

    /// Encode an unsigned integer with the smallest fitting tag.
    pub fn write_u_integer(&mut self, uint: u64) {
        if uint <= 0x7f {
            self.writer.u8(uint as u8); // positive fixint
        } else if uint <= 0xff {
            self.writer.u8u8(UINT8, uint as u8);
        } else if uint <= 0xffff {
            self.writer.u8u16(UINT16, uint as u16);
        } else if uint <= 0xffff_ffff {
            self.writer.u8u32(UINT32, uint as u32);
        } else {
            self.writer.u8u64(UINT64, uint);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_str_hdr(s.len());
        if s.is_ascii() {
            self.writer.ascii(s);
        } else {
            self.writer.utf8(s);
        }
    }

    pub fn write_str_hdr(&mut self, length: usize) {
        let w = &mut self.writer;
        if length <= 0x1f {
            w.u8(OVERLAY_STR | length as u8);
        } else if length <= 0xff {
            w.u8u8(STR8, length as u8);
        } else if length <= 0xffff {
            w.u8u16(STR16, length as u16);
        } else {
            w.u8u32(STR32, length as u32);
        }
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_bin_hdr(buf.len());
        self.writer.buf(buf);
    }

    pub fn write_bin_hdr(&mut self, length: usize) {
        let w = &mut self.writer;
        if length <= 0xff {
            w.u8u8(BIN8, length as u8);
        } else if length <= 0xffff {
            w.u8u16(BIN16, length as u16);
        } else {
            w.u8u32(BIN32, length as u32);
        }
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        let w = &mut self.writer;
        if length <= 0x0f {
            w.u8(OVERLAY_ARR | length as u8);
        } else if length <= 0xffff {
            w.u8u16(ARR16, length as u16);
        } else {
            w.u8u32(ARR32, length as u32);
        }
    }

    pub fn write_map_hdr(&mut self, length: usize) {
        let w = &mut self.writer;
        if length <= 0x0f {
            w.u8(OVERLAY_MAP | length as u8);
        } else if length <= 0xffff {
            w.u8u16(MAP16, length as u16);
        } else {
            w.u8u32(MAP32, length as u32);
        }
    }

    /// Encode the timestamp extension (type 255), preferring the smallest of
    /// its three wire forms. Only the 96-bit form can carry negative
    /// (pre-epoch) seconds.
    pub fn write_timestamp(&mut self, ts: Timestamp) {
        let w = &mut self.writer;
        if ts.fits_32() {
            w.u8u8(FIXEXT4, EXT_TIMESTAMP);
            w.u32(ts.sec as u32);
        } else if ts.fits_64() {
            w.u8u8(FIXEXT8, EXT_TIMESTAMP);
            w.u64(((ts.nsec as u64) << 34) | ts.sec as u64);
        } else {
            w.u8u8(EXT8, 12);
            w.u8(EXT_TIMESTAMP);
            w.u32(ts.nsec);
            w.i64(ts.sec);
        }
    }

    /// Encode a generic extension with the smallest fitting form.
    pub fn write_ext(&mut self, tag: u8, payload: &[u8]) {
        let w = &mut self.writer;
        match payload.len() {
            1 => w.u8(FIXEXT1),
            2 => w.u8(FIXEXT2),
            4 => w.u8(FIXEXT4),
            8 => w.u8(FIXEXT8),
            16 => w.u8(FIXEXT16),
            length if length <= 0xff => w.u8u8(EXT8, length as u8),
            length if length <= 0xffff => w.u8u16(EXT16, length as u16),
            length => w.u8u32(EXT32, length as u32),
        }
        w.u8(tag);
        w.buf(payload);
    }
}
