//! Binary buffer writer with amortized-doubling growth.

/// An append-only binary buffer writer.
///
/// The writer owns a byte buffer and a cursor. Appends past the allocated
/// size double the allocation (repeatedly, until sufficient) and copy the
/// existing content forward. [`Writer::flush`] hands back the valid prefix
/// only, never the full allocation.
///
/// The `uint8` and `x` fields are public so that encoders can reserve header
/// space with [`Writer::ensure_capacity`] and patch it after the fact.
///
/// # Example
///
/// ```
/// use binpack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0xc0);
/// writer.u32(0xdeadbeef);
/// assert_eq!(writer.flush(), vec![0xc0, 0xde, 0xad, 0xbe, 0xef]);
/// ```
pub struct Writer {
    /// The underlying allocation. Length equals the allocated size, not the
    /// number of bytes written.
    pub uint8: Vec<u8>,
    /// Current cursor position (logical length).
    pub x: usize,
}

const DEFAULT_CAPACITY: usize = 64;

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with the default initial allocation.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a writer with the given initial allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0; capacity.max(1)],
            x: 0,
        }
    }

    /// Number of bytes written so far.
    pub fn size(&self) -> usize {
        self.x
    }

    /// Resets the cursor, keeping the allocation.
    pub fn reset(&mut self) {
        self.x = 0;
    }

    /// Grows the allocation until at least `length` more bytes fit.
    pub fn ensure_capacity(&mut self, length: usize) {
        let required = self.x + length;
        if required <= self.uint8.len() {
            return;
        }
        let mut capacity = self.uint8.len();
        while capacity < required {
            capacity *= 2;
        }
        self.uint8.resize(capacity, 0);
    }

    /// Returns the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[..self.x].to_vec();
        self.x = 0;
        out
    }

    /// Appends a single byte.
    #[inline]
    pub fn u8(&mut self, value: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = value;
        self.x += 1;
    }

    /// Appends an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, value: u16) {
        self.ensure_capacity(2);
        self.uint8[self.x..self.x + 2].copy_from_slice(&value.to_be_bytes());
        self.x += 2;
    }

    /// Appends an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, value: u32) {
        self.ensure_capacity(4);
        self.uint8[self.x..self.x + 4].copy_from_slice(&value.to_be_bytes());
        self.x += 4;
    }

    /// Appends an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, value: u64) {
        self.ensure_capacity(8);
        self.uint8[self.x..self.x + 8].copy_from_slice(&value.to_be_bytes());
        self.x += 8;
    }

    /// Appends a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, value: i8) {
        self.u8(value as u8);
    }

    /// Appends a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, value: i16) {
        self.u16(value as u16);
    }

    /// Appends a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, value: i32) {
        self.u32(value as u32);
    }

    /// Appends a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, value: i64) {
        self.u64(value as u64);
    }

    /// Appends a 32-bit float (big-endian).
    #[inline]
    pub fn f32(&mut self, value: f32) {
        self.u32(value.to_bits());
    }

    /// Appends a 64-bit float (big-endian).
    #[inline]
    pub fn f64(&mut self, value: f64) {
        self.u64(value.to_bits());
    }

    /// Appends a tag byte followed by an unsigned 8-bit integer.
    #[inline]
    pub fn u8u8(&mut self, tag: u8, value: u8) {
        self.ensure_capacity(2);
        self.uint8[self.x] = tag;
        self.uint8[self.x + 1] = value;
        self.x += 2;
    }

    /// Appends a tag byte followed by an unsigned 16-bit integer.
    #[inline]
    pub fn u8u16(&mut self, tag: u8, value: u16) {
        self.ensure_capacity(3);
        self.uint8[self.x] = tag;
        self.uint8[self.x + 1..self.x + 3].copy_from_slice(&value.to_be_bytes());
        self.x += 3;
    }

    /// Appends a tag byte followed by an unsigned 32-bit integer.
    #[inline]
    pub fn u8u32(&mut self, tag: u8, value: u32) {
        self.ensure_capacity(5);
        self.uint8[self.x] = tag;
        self.uint8[self.x + 1..self.x + 5].copy_from_slice(&value.to_be_bytes());
        self.x += 5;
    }

    /// Appends a tag byte followed by an unsigned 64-bit integer.
    #[inline]
    pub fn u8u64(&mut self, tag: u8, value: u64) {
        self.ensure_capacity(9);
        self.uint8[self.x] = tag;
        self.uint8[self.x + 1..self.x + 9].copy_from_slice(&value.to_be_bytes());
        self.x += 9;
    }

    /// Appends a tag byte followed by a 32-bit float.
    #[inline]
    pub fn u8f32(&mut self, tag: u8, value: f32) {
        self.u8u32(tag, value.to_bits());
    }

    /// Appends a tag byte followed by a 64-bit float.
    #[inline]
    pub fn u8f64(&mut self, tag: u8, value: f64) {
        self.u8u64(tag, value.to_bits());
    }

    /// Appends raw bytes verbatim.
    pub fn buf(&mut self, data: &[u8]) {
        self.ensure_capacity(data.len());
        self.uint8[self.x..self.x + data.len()].copy_from_slice(data);
        self.x += data.len();
    }

    /// Appends an ASCII string, one byte per character.
    ///
    /// Fast path for text known to contain no multi-byte code points; the
    /// caller is responsible for that invariant.
    pub fn ascii(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }

    /// Appends the UTF-8 bytes of a string.
    pub fn utf8(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }
}
