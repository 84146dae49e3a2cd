//! [`MsgPackExtension`] — wrapper for MessagePack extension values.

/// A MessagePack extension: an application-defined type tag paired with a
/// raw payload.
///
/// When the encoder encounters a [`MsgPackExtension`] it writes the payload
/// verbatim under the smallest fitting extension form. Likewise, the decoder
/// produces a [`MsgPackExtension`] for every extension it reads, except type
/// 255 which is reserved for [`crate::Timestamp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgPackExtension {
    pub tag: u8,
    pub payload: Vec<u8>,
}

impl MsgPackExtension {
    pub fn new(tag: u8, payload: Vec<u8>) -> Self {
        Self { tag, payload }
    }
}
