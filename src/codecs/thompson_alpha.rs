//! Thompson-Alpha: a fixed-width length prefix followed by the significant
//! bits of `value + 1`, with the leading 1 implied.
//!
//! `len = bits_used(value + 1) - 1` is written in `length_bits` bits, then the
//! low `len` bits of `value + 1`. The configured prefix width bounds `len` to
//! `2^length_bits - 1` (and 63 in any case), which in turn bounds the range:
//! `max_value = 2^(max_len + 1) - 2`.

use std::io::{Read, Write};

use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::utils::{bits_used, low_mask};

pub const MIN_LENGTH_BITS: u8 = 1;
pub const MAX_LENGTH_BITS: u8 = 6;
pub const DEFAULT_LENGTH_BITS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThompsonAlphaCodec {
    length_bits: u8,
    max_len: u32,
}

impl ThompsonAlphaCodec {
    /// Creates a codec with a `length_bits`-wide prefix. Must be in `1..=6`.
    pub fn new(length_bits: u8) -> Result<Self, CodecError> {
        if !(MIN_LENGTH_BITS..=MAX_LENGTH_BITS).contains(&length_bits) {
            return Err(CodecError::ConfigurationInvalid(format!(
                "Thompson-Alpha length_bits must be in [{}, {}], got {}",
                MIN_LENGTH_BITS, MAX_LENGTH_BITS, length_bits
            )));
        }
        let max_len = (low_mask(length_bits as u32) as u32).min(u64::BITS - 1);
        Ok(Self {
            length_bits,
            max_len,
        })
    }

    pub fn length_bits(&self) -> u8 {
        self.length_bits
    }
}

impl Default for ThompsonAlphaCodec {
    fn default() -> Self {
        Self {
            length_bits: DEFAULT_LENGTH_BITS,
            max_len: u64::BITS - 1,
        }
    }
}

impl IntegerCodec for ThompsonAlphaCodec {
    fn name(&self) -> &'static str {
        "thompson_alpha"
    }

    fn max_value(&self) -> u64 {
        // 2^(max_len + 1) - 2, computed without overflowing at max_len = 63.
        low_mask(self.max_len + 1) - 1
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        self.check_range(value)?;
        let x = self.offset_by_one(value)?;
        let len = bits_used(x) - 1;
        writer.write_bits(len as u64, self.length_bits as u32)?;
        if len > 0 {
            writer.write_bits(x & low_mask(len), len)?;
        }
        Ok(())
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        let len = reader.read_bits(self.length_bits as u32)? as u32;
        if len > self.max_len {
            return Err(CodecError::SymbolOverflow(format!(
                "thompson_alpha length {} exceeds {}",
                len, self.max_len
            )));
        }
        let rest = if len > 0 { reader.read_bits(len)? } else { 0 };
        Ok((rest | (1u64 << len)) - 1)
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        let x = value.checked_add(1)?;
        let len = bits_used(x) - 1;
        if len > self.max_len {
            return None;
        }
        Some(self.length_bits as u32 + len)
    }
}
