//! Elias Omega (recursive Elias), offset by one so that zero is encodable.
//!
//! For `N = value + 1` the code is a chain of length groups followed by a
//! single terminating `0` bit. Building from the inside out: while `N > 1`,
//! prepend the `bits_used(N)`-bit binary form of `N` and continue with
//! `N = bits_used(N) - 1`. Every group starts with a 1 bit, which is how the
//! decoder tells a group from the terminator.

use std::io::{Read, Write};

use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::utils::bits_used;

/// A 64-bit symbol needs at most 4 groups (64, 6, 3 and 2 bits wide).
const MAX_GROUPS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasOmegaCodec;

impl EliasOmegaCodec {
    pub const fn new() -> Self {
        Self
    }
}

/// Collects the groups innermost-first. Returns the group array and its length.
fn groups(mut n: u64) -> ([(u64, u32); MAX_GROUPS], usize) {
    let mut out = [(0u64, 0u32); MAX_GROUPS];
    let mut len = 0;
    while n > 1 {
        let width = bits_used(n);
        out[len] = (n, width);
        len += 1;
        n = (width - 1) as u64;
    }
    (out, len)
}

impl IntegerCodec for EliasOmegaCodec {
    fn name(&self) -> &'static str {
        "elias_omega"
    }

    fn max_value(&self) -> u64 {
        u64::MAX - 1
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        self.check_range(value)?;
        let (groups, len) = groups(self.offset_by_one(value)?);
        // Outermost (shortest) group goes out first.
        for &(n, width) in groups[..len].iter().rev() {
            writer.write_bits(n, width)?;
        }
        writer.write_bit(false)
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        let mut n: u64 = 1;
        while reader.peek_bit()? {
            // The group is the peeked 1 bit plus `n` more bits.
            if n >= u64::BITS as u64 {
                return Err(CodecError::SymbolOverflow(format!(
                    "elias_omega group of {} bits exceeds 64-bit symbol width",
                    n + 1
                )));
            }
            n = reader.read_bits(n as u32 + 1)?;
        }
        reader.read_bit()?;
        Ok(n - 1)
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        let (groups, len) = groups(value.checked_add(1)?);
        Some(1 + groups[..len].iter().map(|&(_, width)| width).sum::<u32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::{decode_all, encode_all};

    #[test]
    fn test_known_codes() {
        let codec = EliasOmegaCodec::new();
        // N = 1 -> "0"; N = 2 -> "10 0"; N = 16 -> "10 100 10000 0"
        assert_eq!(codec.predict_bits(0), Some(1));
        assert_eq!(codec.predict_bits(1), Some(3));
        assert_eq!(codec.predict_bits(15), Some(11));
        let bytes = encode_all(&codec, &[0, 1, 15]).unwrap();
        assert_eq!(bytes, vec![0b0100_1010, 0b0100_0000]);
        assert_eq!(decode_all(&codec, &bytes, 3).unwrap(), vec![0, 1, 15]);
    }

    #[test]
    fn test_largest_symbol() {
        let codec = EliasOmegaCodec::new();
        // Groups: 2 (2 bits), 5 (3 bits), 63 (6 bits), 2^64 - 1 (64 bits), then 0.
        assert_eq!(codec.predict_bits(u64::MAX - 1), Some(76));
        assert_eq!(codec.predict_bits(u64::MAX), None);
        let bytes = encode_all(&codec, &[u64::MAX - 1]).unwrap();
        assert_eq!(decode_all(&codec, &bytes, 1).unwrap(), vec![u64::MAX - 1]);
    }

    #[test]
    fn test_group_wider_than_64_bits_is_overflow() {
        // 11 -> n = 3; 1111 -> n = 15; 1 followed by 15 ones -> n = 65535,
        // which would demand a 65536-bit group.
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b11, 2).unwrap();
        writer.write_bits(0b1111, 4).unwrap();
        writer.write_bits(0xFFFF, 16).unwrap();
        writer.write_bit(true).unwrap();
        let bytes = writer.finish().unwrap();
        let result = decode_all(&EliasOmegaCodec, &bytes, 1);
        assert!(matches!(result, Err(CodecError::SymbolOverflow(_))));
    }

    #[test]
    fn test_truncated_stream() {
        let bytes = encode_all(&EliasOmegaCodec, &[1 << 40]).unwrap();
        let result = decode_all(&EliasOmegaCodec, &bytes[..3], 1);
        assert!(matches!(result, Err(CodecError::StreamTruncated)));
    }
}
