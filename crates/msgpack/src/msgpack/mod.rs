//! MessagePack encoding/decoding.
//!
//! The encoder walks a [`crate::Value`] and appends wire-format bytes to a
//! growable buffer; the decoder reads a byte sequence back into values.
//! Both are synchronous, allocate per call, and share no state.

mod constants;
mod decoder;
mod encoder;
mod error;

pub use constants::EXT_TIMESTAMP;
pub use decoder::MsgPackDecoder;
pub use encoder::{EncodeOptions, MsgPackEncoder, Replacement, TypeHint};
pub use error::MsgPackError;

use crate::Value;

/// Binary MessagePack payload alias.
pub type MsgPack = Vec<u8>;

/// Encode a single value with default options.
pub fn encode(value: &Value) -> Result<MsgPack, MsgPackError> {
    MsgPackEncoder::new().encode(value)
}

/// Encode a value under the given options.
pub fn encode_with(value: &Value, options: &EncodeOptions) -> Result<MsgPack, MsgPackError> {
    MsgPackEncoder::new().encode_with(value, options)
}

/// Decode exactly one value; trailing bytes are ignored.
pub fn decode(bytes: &[u8]) -> Result<Value, MsgPackError> {
    MsgPackDecoder::new().decode(bytes)
}

/// Decode concatenated top-level values until the input is exhausted.
pub fn decode_multiple(bytes: &[u8]) -> Result<Vec<Value>, MsgPackError> {
    MsgPackDecoder::new().decode_multiple(bytes)
}
