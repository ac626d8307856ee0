//! Elias Gamma, offset by one so that zero is encodable.
//!
//! `x = value + 1` is written as `len - 1` zero bits followed by the `len`-bit
//! binary form of `x` (whose leading bit is always 1), where `len = bits_used(x)`.

use std::io::{Read, Write};

use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::utils::bits_used;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasGammaCodec;

impl EliasGammaCodec {
    pub const fn new() -> Self {
        Self
    }
}

//==================================================================================
// 1. Raw Gamma (positive integers, no offset)
//==================================================================================

/// Writes the Gamma code of `x`. `x` must be non-zero.
pub(crate) fn write_gamma<W: Write>(x: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
    debug_assert!(x > 0);
    let len = bits_used(x);
    writer.write_zeros(len - 1)?;
    writer.write_bits(x, len)
}

/// Reads one Gamma code and returns the positive integer it carries.
pub(crate) fn read_gamma<R: Read>(reader: &mut BitReader<R>) -> Result<u64, CodecError> {
    let mut zeros: u32 = 0;
    while !reader.peek_bit()? {
        reader.read_bit()?;
        zeros += 1;
        if zeros >= u64::BITS {
            return Err(CodecError::SymbolOverflow(format!(
                "gamma prefix of {} zero bits exceeds 64-bit symbol width",
                zeros
            )));
        }
    }
    reader.read_bits(zeros + 1)
}

/// Length in bits of the Gamma code of `x` (non-zero).
#[inline]
pub(crate) fn gamma_len(x: u64) -> u32 {
    2 * bits_used(x) - 1
}

//==================================================================================
// 2. Codec
//==================================================================================

impl IntegerCodec for EliasGammaCodec {
    fn name(&self) -> &'static str {
        "elias_gamma"
    }

    fn max_value(&self) -> u64 {
        u64::MAX - 1
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        self.check_range(value)?;
        write_gamma(self.offset_by_one(value)?, writer)
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        Ok(read_gamma(reader)? - 1)
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        value.checked_add(1).map(gamma_len)
    }
}
