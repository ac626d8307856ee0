//! Elias Delta, offset by one so that zero is encodable.
//!
//! With `x = value + 1` and `n = bits_used(x) - 1`, the code is the Gamma code
//! of `n + 1` followed by the `n` bits of `x` below its (implied) leading 1.

use std::io::{Read, Write};

use super::elias_gamma::{gamma_len, read_gamma, write_gamma};
use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::utils::{bits_used, low_mask};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasDeltaCodec;

impl EliasDeltaCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl IntegerCodec for EliasDeltaCodec {
    fn name(&self) -> &'static str {
        "elias_delta"
    }

    fn max_value(&self) -> u64 {
        u64::MAX - 1
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        self.check_range(value)?;
        let x = self.offset_by_one(value)?;
        let n = bits_used(x) - 1;
        write_gamma(n as u64 + 1, writer)?;
        if n > 0 {
            writer.write_bits(x & low_mask(n), n)?;
        }
        Ok(())
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        let n = read_gamma(reader)? - 1;
        if n >= u64::BITS as u64 {
            return Err(CodecError::SymbolOverflow(format!(
                "elias_delta length prefix {} exceeds 63",
                n
            )));
        }
        let n = n as u32;
        let rest = if n > 0 { reader.read_bits(n)? } else { 0 };
        Ok((rest | (1u64 << n)) - 1)
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        let x = value.checked_add(1)?;
        let n = bits_used(x) - 1;
        Some(gamma_len(n as u64 + 1) + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::{decode_all, encode_all};

    #[test]
    fn test_known_codes() {
        let codec = EliasDeltaCodec::new();
        // value 0 -> x = 1 -> n = 0 -> gamma(1) = "1"
        assert_eq!(codec.predict_bits(0), Some(1));
        // value 1 -> x = 2 -> n = 1 -> gamma(2) = "010", then "0"
        // value 16 -> x = 17 -> n = 4 -> gamma(5) = "00101", then "0001"
        let bytes = encode_all(&codec, &[0, 1, 16]).unwrap();
        assert_eq!(bytes, vec![0b1010_0001, 0b0100_0100]);
        assert_eq!(decode_all(&codec, &bytes, 3).unwrap(), vec![0, 1, 16]);
    }

    #[test]
    fn test_largest_symbol() {
        let codec = EliasDeltaCodec::new();
        // n = 63 -> gamma(64) is 13 bits, plus 63 raw bits.
        assert_eq!(codec.predict_bits(u64::MAX - 1), Some(76));
        let bytes = encode_all(&codec, &[u64::MAX - 1, 0]).unwrap();
        assert_eq!(decode_all(&codec, &bytes, 2).unwrap(), vec![u64::MAX - 1, 0]);
    }

    #[test]
    fn test_length_prefix_beyond_63_is_overflow() {
        // gamma(65) = 6 zeros then 1000001, declaring n = 64.
        let mut writer = BitWriter::new(Vec::new());
        write_gamma(65, &mut writer).unwrap();
        writer.write_zeros(64).unwrap();
        let bytes = writer.finish().unwrap();
        let result = decode_all(&EliasDeltaCodec, &bytes, 1);
        assert!(matches!(result, Err(CodecError::SymbolOverflow(_))));
    }

    #[test]
    fn test_truncated_stream() {
        let bytes = encode_all(&EliasDeltaCodec, &[1 << 50]).unwrap();
        let result = decode_all(&EliasDeltaCodec, &bytes[..4], 1);
        assert!(matches!(result, Err(CodecError::StreamTruncated)));
    }
}
