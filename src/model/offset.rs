// Mon Feb 9 2026 - Alex

use std::fmt;

/// A field position in bits from the start of its immediate containing
/// aggregate, or an accumulated position from the top-level aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitOffset {
    value: u64,
}

impl BitOffset {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    /// Combines a pre-resolved byte offset and a residual bit offset.
    pub fn from_parts(bytes: u64, bits: u64) -> Self {
        Self {
            value: bytes * 8 + bits,
        }
    }

    pub fn as_bits(&self) -> u64 {
        self.value
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.value % 8 == 0
    }

    pub fn as_bytes(&self) -> Option<u64> {
        if self.is_byte_aligned() {
            Some(self.value / 8)
        } else {
            None
        }
    }

    /// Shifts a parent-relative offset by this accumulated base.
    pub fn offset_by(&self, relative: BitOffset) -> BitOffset {
        BitOffset::new(self.value + relative.value)
    }
}

impl fmt::Display for BitOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<u64> for BitOffset {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
