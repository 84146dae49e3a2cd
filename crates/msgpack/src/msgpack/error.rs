//! MessagePack codec error type.

use binpack_buffers::BufferError;
use thiserror::Error;

/// Every way an encode or decode call can fail.
///
/// All failures are fail-fast and non-recoverable within a call: the call
/// aborts on the first error and nothing partial is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    /// Wrong input shape, e.g. batch encode of a non-array value or an
    /// empty byte sequence supplied to decode.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Encode encountered a value outside the supported kinds and no
    /// replacement was configured.
    #[error("unsupported value type")]
    UnsupportedType,
    /// Decode encountered the reserved 0xc1 tag.
    #[error("invalid byte code 0xc1")]
    InvalidByteCode,
    /// Decode encountered a byte outside the dispatch table. The table
    /// covers all of 0x00-0xff, so this is defensive only.
    #[error("invalid byte value")]
    InvalidByteValue,
    /// Fewer bytes were available than the current read required.
    #[error("truncated input")]
    TruncatedInput,
    /// A string payload contained an invalid UTF-8 lead or continuation
    /// byte.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,
    /// A string payload ended in the middle of a multi-byte UTF-8 sequence.
    #[error("truncated UTF-8 sequence in string payload")]
    TruncatedUtf8,
    /// A timestamp extension payload had a length other than 4, 8 or 12
    /// bytes.
    #[error("invalid timestamp extension length {0}")]
    InvalidExtensionLength(usize),
}

impl From<BufferError> for MsgPackError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => MsgPackError::TruncatedInput,
            BufferError::InvalidUtf8 => MsgPackError::InvalidUtf8,
            BufferError::TruncatedUtf8 => MsgPackError::TruncatedUtf8,
        }
    }
}
