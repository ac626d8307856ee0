//! This module defines shared traits used across the kernels and codecs.

use bytemuck::Pod;
use num_traits::{PrimInt, Signed, Unsigned};

/// A trait that maps a signed integer type to its unsigned counterpart.
pub trait HasUnsigned: PrimInt + Signed + Pod {
    type Unsigned: PrimInt + Unsigned + Pod;
}

/// A trait that maps an unsigned integer type to its signed counterpart.
pub trait HasSigned: PrimInt + Unsigned + Pod {
    type Signed: PrimInt + Signed + Pod;
}

// Implement the traits for the primitive widths a codec symbol can carry.
macro_rules! impl_signed_unsigned_pair {
    ($S:ty, $U:ty) => {
        impl HasUnsigned for $S {
            type Unsigned = $U;
        }
        impl HasSigned for $U {
            type Signed = $S;
        }
    };
}

impl_signed_unsigned_pair!(i8, u8);
impl_signed_unsigned_pair!(i16, u16);
impl_signed_unsigned_pair!(i32, u32);
impl_signed_unsigned_pair!(i64, u64);

/// Width of `T` in bits.
#[inline]
pub fn bit_width<T>() -> u32 {
    (std::mem::size_of::<T>() * 8) as u32
}
