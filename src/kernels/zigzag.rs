//! This module contains the pure, stateless kernels for performing Zig-zag
//! encoding and decoding.
//!
//! It is a lossless, bitwise bijection between signed and unsigned integers of
//! the same width that maps small magnitudes to small unsigned values
//! (`0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...`). Every signed helper on every codec
//! routes through this module; it is the sole signed/unsigned bridge.

use num_traits::{One, PrimInt, Zero};

use crate::traits::{bit_width, HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic (The "Engine")
//==================================================================================

/// Encodes a single signed integer using the Zig-zag algorithm.
#[inline]
pub fn encode_val<T: HasUnsigned>(n: T) -> T::Unsigned {
    // The right shift on a signed primitive is arithmetic, which smears the
    // sign bit across the whole word.
    let shifted = PrimInt::unsigned_shl(n, 1) ^ PrimInt::signed_shr(n, bit_width::<T>() - 1);
    bytemuck::cast(shifted)
}

/// Decodes a single unsigned integer back to its signed representation.
#[inline]
pub fn decode_val<U: HasSigned>(n: U) -> U::Signed {
    let magnitude: U::Signed = bytemuck::cast(PrimInt::unsigned_shr(n, 1));
    let lsb: U::Signed = bytemuck::cast(n & <U as One>::one());
    // -(n & 1) is either all zeros or all ones.
    magnitude ^ (<U::Signed as Zero>::zero() - lsb)
}

//==================================================================================
// 2. Public API (64-bit symbols)
//==================================================================================

/// `(v << 1) ^ (v >> 63)`, reinterpreted as unsigned.
#[inline]
pub fn encode(v: i64) -> u64 {
    encode_val(v)
}

/// `(v >> 1) ^ -(v & 1)`, reinterpreted as signed.
#[inline]
pub fn decode(v: u64) -> i64 {
    decode_val(v)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
