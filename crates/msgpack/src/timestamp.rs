//! [`Timestamp`] — the MessagePack timestamp extension value (type 255).

/// Seconds and nanoseconds since the Unix epoch. Negative seconds (pre-epoch
/// instants) are allowed; on the wire they require the 96-bit extension form.
///
/// The codec does not normalize `nsec`; callers are expected to keep it below
/// one billion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Whole seconds since the epoch, signed.
    pub sec: i64,
    /// Nanoseconds within the second.
    pub nsec: u32,
}

impl Timestamp {
    pub fn new(sec: i64, nsec: u32) -> Self {
        Self { sec, nsec }
    }

    /// A timestamp on a whole-second boundary.
    pub fn from_secs(sec: i64) -> Self {
        Self { sec, nsec: 0 }
    }

    /// True when the 32-bit-seconds wire form can represent this timestamp.
    pub fn fits_32(&self) -> bool {
        self.nsec == 0 && self.sec >= 0 && self.sec <= u32::MAX as i64
    }

    /// True when the packed 64-bit wire form (34-bit seconds, 30-bit
    /// nanoseconds) can represent this timestamp.
    pub fn fits_64(&self) -> bool {
        self.sec >= 0 && (self.sec >> 34) == 0
    }
}
