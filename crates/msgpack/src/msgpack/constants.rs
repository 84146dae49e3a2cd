//! MessagePack wire-format tag bytes.
//!
//! One leading tag byte per value; all length and payload fields are
//! big-endian. Tags 0x00-0x7f, 0x80-0x8f, 0x90-0x9f, 0xa0-0xbf and
//! 0xe0-0xff are the "fix" ranges that pack the value or length into the
//! tag byte itself.

pub const NIL: u8 = 0xc0;
/// Reserved, never written by any encoder; decoding it always fails.
pub const NEVER_USED: u8 = 0xc1;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

pub const EXT8: u8 = 0xc7;
pub const EXT16: u8 = 0xc8;
pub const EXT32: u8 = 0xc9;

pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const FIXEXT1: u8 = 0xd4;
pub const FIXEXT2: u8 = 0xd5;
pub const FIXEXT4: u8 = 0xd6;
pub const FIXEXT8: u8 = 0xd7;
pub const FIXEXT16: u8 = 0xd8;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARR16: u8 = 0xdc;
pub const ARR32: u8 = 0xdd;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// Overlay for fixmap (0x80 | entry count, up to 15).
pub const OVERLAY_MAP: u8 = 0x80;
/// Overlay for fixarray (0x90 | element count, up to 15).
pub const OVERLAY_ARR: u8 = 0x90;
/// Overlay for fixstr (0xa0 | byte length, up to 31).
pub const OVERLAY_STR: u8 = 0xa0;

/// Extension type reserved for the timestamp extension (-1 on the wire).
pub const EXT_TIMESTAMP: u8 = 0xff;
