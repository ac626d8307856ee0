//! This module provides a set of shared, low-level bit arithmetic helpers used
//! throughout the codecs.
//!
//! Its primary responsibilities include:
//! 1.  Measuring the significant width of a symbol (`bits_used`).
//! 2.  Building low-bit masks without tripping the shift-by-64 overflow.
//! 3.  Holding the precomputed Fibonacci table used by the Fibonacci codec.

//==================================================================================
// 1. Bit Width Helpers
//==================================================================================

/// Number of bits in the binary representation of `x`, i.e. `floor(log2 x) + 1`.
/// Returns 0 only for `x == 0`.
#[inline]
pub fn bits_used(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

/// A mask with the low `n` bits set. `n` may be anywhere in `0..=64`.
#[inline]
pub fn low_mask(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

//==================================================================================
// 2. Fibonacci Table
//==================================================================================

/// Number of Fibonacci terms (starting `1, 2, 3, 5, ...`) that fit in a `u64`.
pub const FIBONACCI_TERMS: usize = 92;

/// `FIBONACCI[i]` is the Fibonacci number `F(i + 2)`: `1, 2, 3, 5, 8, ...`.
/// The last entry is the largest Fibonacci number representable in 64 bits.
pub static FIBONACCI: [u64; FIBONACCI_TERMS] = build_fibonacci_table();

const fn build_fibonacci_table() -> [u64; FIBONACCI_TERMS] {
    let mut table = [0u64; FIBONACCI_TERMS];
    table[0] = 1;
    table[1] = 2;
    let mut i = 2;
    while i < FIBONACCI_TERMS {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// Index of the largest Fibonacci term `<= x`. `x` must be non-zero.
#[inline]
pub fn highest_fibonacci_index(x: u64) -> usize {
    debug_assert!(x > 0);
    // `partition_point` returns the count of terms <= x, which is at least 1.
    FIBONACCI.partition_point(|&f| f <= x) - 1
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_used() {
        assert_eq!(bits_used(0), 0);
        assert_eq!(bits_used(1), 1);
        assert_eq!(bits_used(2), 2);
        assert_eq!(bits_used(3), 2);
        assert_eq!(bits_used(255), 8);
        assert_eq!(bits_used(256), 9);
        assert_eq!(bits_used(u64::MAX), 64);
    }

    #[test]
    fn test_low_mask_edges() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(1), 1);
        assert_eq!(low_mask(63), u64::MAX >> 1);
        assert_eq!(low_mask(64), u64::MAX);
    }

    #[test]
    fn test_fibonacci_table() {
        assert_eq!(&FIBONACCI[..6], &[1, 2, 3, 5, 8, 13]);
        assert_eq!(FIBONACCI[FIBONACCI_TERMS - 1], 12_200_160_415_121_876_738);
        // The next term would not fit.
        let next = FIBONACCI[FIBONACCI_TERMS - 1].checked_add(FIBONACCI[FIBONACCI_TERMS - 2]);
        assert!(next.is_none());
    }

    #[test]
    fn test_highest_fibonacci_index() {
        assert_eq!(highest_fibonacci_index(1), 0);
        assert_eq!(highest_fibonacci_index(2), 1);
        assert_eq!(highest_fibonacci_index(4), 2);
        assert_eq!(highest_fibonacci_index(5), 3);
        assert_eq!(highest_fibonacci_index(u64::MAX), FIBONACCI_TERMS - 1);
    }
}
