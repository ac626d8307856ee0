//! The carry register shared by `BitReader` and `BitWriter`.
//!
//! Bits are held left-justified: the next bit to leave the register (towards
//! the sink on the write side, towards the caller on the read side) is always
//! bit 63. `count` is the number of valid bits starting from the top.
//!
//! Both wrappers restore `count < 64` before returning from any public call,
//! so a full register never survives between calls.

/// A 64-bit carry register plus its valid-bit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Accumulator {
    bits: u64,
    count: u8,
}

impl Accumulator {
    pub const CAPACITY: u32 = u64::BITS;

    /// Creates an empty accumulator.
    pub const fn new() -> Self {
        Self { bits: 0, count: 0 }
    }

    /// Number of valid bits currently held.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count as u32
    }

    /// Free space in bits.
    #[inline]
    pub fn room(&self) -> u32 {
        Self::CAPACITY - self.count as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends the low `n` bits of `value` below the bits already held.
    /// The caller guarantees `1 <= n <= room()`; bits of `value` above `n`
    /// must be zero.
    #[inline]
    pub fn push(&mut self, value: u64, n: u32) {
        debug_assert!(n >= 1 && n <= self.room());
        debug_assert!(n == 64 || value >> n == 0);
        let shift = Self::CAPACITY - self.count as u32 - n;
        self.bits |= value << shift;
        self.count += n as u8;
    }

    /// Removes and returns the top `n` bits, right-justified.
    /// The caller guarantees `1 <= n <= count()`.
    #[inline]
    pub fn take(&mut self, n: u32) -> u64 {
        debug_assert!(n >= 1 && n <= self.count());
        let out = self.bits >> (Self::CAPACITY - n);
        // `checked_shl` keeps the n == 64 case from overflowing the shift.
        self.bits = self.bits.checked_shl(n).unwrap_or(0);
        self.count -= n as u8;
        out
    }

    /// Returns the top bit without consuming it. The caller guarantees a
    /// non-empty register.
    #[inline]
    pub fn peek(&self) -> bool {
        debug_assert!(!self.is_empty());
        self.bits >> (Self::CAPACITY - 1) == 1
    }

    /// Appends one whole byte. Requires at least 8 bits of room.
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.push(byte as u64, 8);
    }

    /// Removes the top byte. Requires at least 8 valid bits.
    #[inline]
    pub fn take_byte(&mut self) -> u8 {
        self.take(8) as u8
    }

    /// Number of bits left over past the last byte boundary.
    #[inline]
    pub fn partial_bits(&self) -> u32 {
        self.count as u32 % 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_take_order_is_msb_first() {
        let mut acc = Accumulator::new();
        acc.push(0b101, 3);
        acc.push(0b01, 2);
        assert_eq!(acc.count(), 5);
        assert!(acc.peek());
        assert_eq!(acc.take(4), 0b1010);
        assert_eq!(acc.take(1), 0b1);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_full_width_push_and_take() {
        let mut acc = Accumulator::new();
        acc.push(0xDEAD_BEEF_CAFE_BABE, 64);
        assert_eq!(acc.room(), 0);
        assert_eq!(acc.take(64), 0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(acc.count(), 0);
    }

    #[test]
    fn test_byte_helpers_and_partial_bits() {
        let mut acc = Accumulator::new();
        acc.push_byte(0xA5);
        acc.push(0b11, 2);
        assert_eq!(acc.partial_bits(), 2);
        assert_eq!(acc.take_byte(), 0xA5);
        assert_eq!(acc.take(2), 0b11);
    }
}
