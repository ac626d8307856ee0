//! This module contains the VLQ (variable-length quantity) codec and its
//! inverted-polarity twin.
//!
//! A symbol is split into groups of `group_bits` payload bits, least significant
//! group first. Each group is written as one flag bit followed by the payload,
//! so with the default `group_bits = 7` every group is exactly one byte with the
//! flag in its MSB.
//!
//! Flag polarity:
//! - [`VlqCodec::new`]: the flag is set on the final group only.
//! - [`VlqCodec::inverted`]: the flag is set on every group except the final one.
//!
//! The two polarities produce the same number of bits but are not compatible
//! with each other; persisted data must be read back with the polarity it was
//! written with.
//!
//! Redundancy removal: every non-final group stands for `chunk + 1`, because a
//! non-final group can never carry the all-zero remainder a final group could.
//! Decoding sums `(chunk + 1) << offset` over all groups and subtracts 1, so
//! each group width gains one extra representable value and the encoding is
//! a bijection (no value has two encodings).

use std::io::{Read, Write};

use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::utils::low_mask;

/// Payload bits per group when none are configured.
pub const DEFAULT_GROUP_BITS: u8 = 7;
pub const MIN_GROUP_BITS: u8 = 1;
pub const MAX_GROUP_BITS: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlqCodec {
    group_bits: u8,
    /// Value of the flag bit on the final group.
    final_flag: bool,
}

impl VlqCodec {
    /// Byte-oriented VLQ with the flag set on the final byte.
    pub const fn new() -> Self {
        Self {
            group_bits: DEFAULT_GROUP_BITS,
            final_flag: true,
        }
    }

    /// Byte-oriented VLQ with the flag set on every non-final byte.
    pub const fn inverted() -> Self {
        Self {
            group_bits: DEFAULT_GROUP_BITS,
            final_flag: false,
        }
    }

    /// Changes the payload width of each group. Must be in `1..=32`.
    pub fn with_group_bits(self, group_bits: u8) -> Result<Self, CodecError> {
        if !(MIN_GROUP_BITS..=MAX_GROUP_BITS).contains(&group_bits) {
            return Err(CodecError::ConfigurationInvalid(format!(
                "VLQ group_bits must be in [{}, {}], got {}",
                MIN_GROUP_BITS, MAX_GROUP_BITS, group_bits
            )));
        }
        Ok(Self { group_bits, ..self })
    }

    pub fn group_bits(&self) -> u8 {
        self.group_bits
    }

    pub fn is_inverted(&self) -> bool {
        !self.final_flag
    }

    /// Number of groups `value` occupies.
    fn group_count(&self, mut value: u64) -> u32 {
        let shift = self.group_bits as u32;
        let mut groups = 1;
        loop {
            value >>= shift;
            if value == 0 {
                return groups;
            }
            value -= 1;
            groups += 1;
        }
    }
}

impl Default for VlqCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerCodec for VlqCodec {
    fn name(&self) -> &'static str {
        if self.final_flag {
            "vlq"
        } else {
            "inverted_vlq"
        }
    }

    fn max_value(&self) -> u64 {
        u64::MAX - 1
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        self.check_range(value)?;

        let shift = self.group_bits as u32;
        let mask = low_mask(shift);
        let group_width = shift + 1;
        let flag_bit = 1u64 << shift;

        let mut remaining = value;
        loop {
            let chunk = remaining & mask;
            remaining >>= shift;
            if remaining == 0 {
                let flag = if self.final_flag { flag_bit } else { 0 };
                return writer.write_bits(flag | chunk, group_width);
            }
            let flag = if self.final_flag { 0 } else { flag_bit };
            writer.write_bits(flag | chunk, group_width)?;
            // The next group is stored one lower; the decoder adds it back.
            remaining -= 1;
        }
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        let shift = self.group_bits as u32;
        let mask = low_mask(shift);
        let group_width = shift + 1;

        let mut acc: u64 = 0;
        let mut offset: u32 = 0;
        loop {
            let group = reader.read_bits(group_width)?;
            let is_final = ((group >> shift) == 1) == self.final_flag;
            let term = (group & mask) + 1;

            if offset >= u64::BITS || term > (u64::MAX >> offset) {
                return Err(CodecError::SymbolOverflow(format!(
                    "{} group at bit offset {} exceeds 64 bits",
                    self.name(),
                    offset
                )));
            }
            acc = acc.checked_add(term << offset).ok_or_else(|| {
                CodecError::SymbolOverflow(format!("{} accumulator wrapped", self.name()))
            })?;

            if is_final {
                return Ok(acc - 1);
            }
            offset += shift;
        }
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        if value > self.max_value() {
            return None;
        }
        Some(self.group_count(value) * (self.group_bits as u32 + 1))
    }
}
