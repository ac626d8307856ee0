// In: src/codecs/mod.rs

//! The universal integer codecs and the contract they share.
//!
//! Every codec is a pure `u64 <-> bits` translator implementing
//! [`IntegerCodec`]: no codec writes a length, magic number or header of its
//! own, and every encoding is self-delimiting, so symbols can be concatenated
//! into one stream and decoded back one call at a time. The caller decides how
//! many symbols to decode.
//!
//! Typed 8/16/32/64-bit helpers (signed ones routed through ZigZag) come for
//! free from the blanket [`IntegerCodecExt`] impl.
//!
//! # Range checks
//! `encode` rejects symbols outside `[min_value(), max_value()]` with
//! [`CodecError::ValueOutOfRange`]. Building with the `unchecked` feature compiles
//! those checks out and the caller owns pre-validation. Encoding never panics
//! either way; with `unchecked` an out-of-range symbol behaves as follows:
//! - `u64::MAX` on a codec that shifts symbols by one (Elias Gamma, Delta and
//!   Omega, Fibonacci, Thompson-Alpha) still fails with `ValueOutOfRange`,
//!   because `value + 1` has no 64-bit form. Nothing is written.
//! - `u64::MAX` on VLQ is written; decoding it fails with `SymbolOverflow`.
//! - Thompson-Alpha with `length_bits < 6` writes a wrong but bounded codeword
//!   for symbols above its range: the length prefix keeps only its low
//!   `length_bits` bits.

use std::io::{Read, Write};

use num_traits::{PrimInt, Signed, Unsigned};

use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::kernels::zigzag;
use crate::traits::bit_width;

pub mod elias_delta;
pub mod elias_gamma;
pub mod elias_omega;
pub mod fibonacci;
pub mod raw;
pub mod thompson_alpha;
pub mod vlq;

pub use elias_delta::EliasDeltaCodec;
pub use elias_gamma::EliasGammaCodec;
pub use elias_omega::EliasOmegaCodec;
pub use fibonacci::FibonacciCodec;
pub use raw::RawCodec;
pub use thompson_alpha::ThompsonAlphaCodec;
pub use vlq::VlqCodec;

//==================================================================================
// 1. The Codec Contract
//==================================================================================

/// A self-delimiting bit-level encoding of `u64` symbols.
pub trait IntegerCodec {
    /// Short, stable name used in logs and configuration.
    fn name(&self) -> &'static str;

    fn min_value(&self) -> u64 {
        0
    }

    fn max_value(&self) -> u64;

    /// Writes one symbol.
    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError>;

    /// Consumes exactly one symbol.
    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError>;

    /// Exact number of bits `encode(value)` writes, or `None` when the value
    /// is not representable. Never touches a stream.
    fn predict_bits(&self, value: u64) -> Option<u32>;

    /// Fails with `ValueOutOfRange` unless `value` is inside the codec's range.
    #[inline]
    fn check_range(&self, value: u64) -> Result<(), CodecError> {
        if cfg!(feature = "unchecked") {
            return Ok(());
        }
        let (min, max) = (self.min_value(), self.max_value());
        if value < min || value > max {
            return Err(CodecError::ValueOutOfRange { value, min, max });
        }
        Ok(())
    }

    /// `value + 1`, for codecs that reserve zero. Runs with or without
    /// `unchecked`: `u64::MAX` has no successor and is always `ValueOutOfRange`.
    #[inline]
    fn offset_by_one(&self, value: u64) -> Result<u64, CodecError> {
        value.checked_add(1).ok_or(CodecError::ValueOutOfRange {
            value,
            min: self.min_value(),
            max: self.max_value(),
        })
    }
}

//==================================================================================
// 2. Typed Helpers (Generic over Width)
//==================================================================================

macro_rules! typed_helpers {
    ($( $enc:ident, $dec:ident, $t:ty, $via_enc:ident, $via_dec:ident );+ $(;)?) => {
        $(
            #[inline]
            fn $enc<W: Write>(&self, value: $t, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
                self.$via_enc(value, writer)
            }

            #[inline]
            fn $dec<R: Read>(&self, reader: &mut BitReader<R>) -> Result<$t, CodecError> {
                self.$via_dec(reader)
            }
        )+
    };
}

/// Width-specific wrappers over the single `u64` primitive. Implemented for
/// every [`IntegerCodec`].
pub trait IntegerCodecExt: IntegerCodec {
    /// Accepts any unsigned primitive that widens losslessly into `u64`;
    /// wider types are rejected at compile time.
    ///
    /// ```compile_fail
    /// use bitcodec::{BitWriter, IntegerCodecExt, RawCodec};
    /// let mut writer = BitWriter::new(Vec::new());
    /// RawCodec::new().encode_unsigned(1u128, &mut writer).unwrap();
    /// ```
    fn encode_unsigned<T, W>(&self, value: T, writer: &mut BitWriter<W>) -> Result<(), CodecError>
    where
        T: PrimInt + Unsigned + Into<u64>,
        W: Write,
    {
        self.encode(value.into(), writer)
    }

    fn decode_unsigned<T, R>(&self, reader: &mut BitReader<R>) -> Result<T, CodecError>
    where
        T: PrimInt + Unsigned,
        R: Read,
    {
        let wide = self.decode(reader)?;
        T::from(wide).ok_or(CodecError::WidthOverflow {
            value: wide,
            bits: bit_width::<T>(),
        })
    }

    /// Accepts any signed primitive that widens losslessly into `i64`.
    fn encode_signed<T, W>(&self, value: T, writer: &mut BitWriter<W>) -> Result<(), CodecError>
    where
        T: PrimInt + Signed + Into<i64>,
        W: Write,
    {
        self.encode(zigzag::encode(value.into()), writer)
    }

    fn decode_signed<T, R>(&self, reader: &mut BitReader<R>) -> Result<T, CodecError>
    where
        T: PrimInt + Signed,
        R: Read,
    {
        let wide = self.decode(reader)?;
        T::from(zigzag::decode(wide)).ok_or(CodecError::WidthOverflow {
            value: wide,
            bits: bit_width::<T>(),
        })
    }

    typed_helpers! {
        encode_u8, decode_u8, u8, encode_unsigned, decode_unsigned;
        encode_u16, decode_u16, u16, encode_unsigned, decode_unsigned;
        encode_u32, decode_u32, u32, encode_unsigned, decode_unsigned;
        encode_u64, decode_u64, u64, encode_unsigned, decode_unsigned;
        encode_i8, decode_i8, i8, encode_signed, decode_signed;
        encode_i16, decode_i16, i16, encode_signed, decode_signed;
        encode_i32, decode_i32, i32, encode_signed, decode_signed;
        encode_i64, decode_i64, i64, encode_signed, decode_signed;
    }
}

impl<C: IntegerCodec + ?Sized> IntegerCodecExt for C {}

//==================================================================================
// 3. Slice Helpers
//==================================================================================

/// Encodes every value back to back into a fresh, byte-aligned buffer.
pub fn encode_all<C: IntegerCodec + ?Sized>(codec: &C, values: &[u64]) -> Result<Vec<u8>, CodecError> {
    let mut writer = BitWriter::new(Vec::new());
    for &value in values {
        codec.encode(value, &mut writer)?;
    }
    let bits = writer.bits_written();
    let bytes = writer.finish()?;
    crate::log_metric!(
        "event" = "encode_all",
        "codec" = codec.name(),
        "symbols" = values.len(),
        "bits" = bits,
        "bytes" = bytes.len()
    );
    Ok(bytes)
}

/// Decodes exactly `count` symbols from `bytes`. Trailing padding is ignored.
pub fn decode_all<C: IntegerCodec + ?Sized>(
    codec: &C,
    bytes: &[u8],
    count: usize,
) -> Result<Vec<u64>, CodecError> {
    let mut reader = BitReader::new(bytes);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(codec.decode(&mut reader)?);
    }
    Ok(out)
}

//==================================================================================
// 4. Runtime-Selected Codec
//==================================================================================

/// Any one of the codecs, chosen at runtime (e.g. from a [`crate::config::CodecConfig`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCodec {
    Vlq(VlqCodec),
    EliasGamma(EliasGammaCodec),
    EliasDelta(EliasDeltaCodec),
    EliasOmega(EliasOmegaCodec),
    Fibonacci(FibonacciCodec),
    ThompsonAlpha(ThompsonAlphaCodec),
    Raw(RawCodec),
}

macro_rules! dispatch {
    ($self:ident, $c:ident => $body:expr) => {
        match $self {
            AnyCodec::Vlq($c) => $body,
            AnyCodec::EliasGamma($c) => $body,
            AnyCodec::EliasDelta($c) => $body,
            AnyCodec::EliasOmega($c) => $body,
            AnyCodec::Fibonacci($c) => $body,
            AnyCodec::ThompsonAlpha($c) => $body,
            AnyCodec::Raw($c) => $body,
        }
    };
}

impl IntegerCodec for AnyCodec {
    fn name(&self) -> &'static str {
        dispatch!(self, c => c.name())
    }

    fn min_value(&self) -> u64 {
        dispatch!(self, c => c.min_value())
    }

    fn max_value(&self) -> u64 {
        dispatch!(self, c => c.max_value())
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        dispatch!(self, c => c.encode(value, writer))
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        dispatch!(self, c => c.decode(reader))
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        dispatch!(self, c => c.predict_bits(value))
    }
}

macro_rules! impl_from_codec {
    ($($variant:ident($t:ty)),+ $(,)?) => {
        $(
            impl From<$t> for AnyCodec {
                fn from(codec: $t) -> Self {
                    AnyCodec::$variant(codec)
                }
            }
        )+
    };
}

impl_from_codec!(
    Vlq(VlqCodec),
    EliasGamma(EliasGammaCodec),
    EliasDelta(EliasDeltaCodec),
    EliasOmega(EliasOmegaCodec),
    Fibonacci(FibonacciCodec),
    ThompsonAlpha(ThompsonAlphaCodec),
    Raw(RawCodec),
);
