//! Fixed-width 64-bit codec. Symbols are written big-endian (most significant
//! bit first) regardless of the host's byte order, and the full `u64` range is
//! representable.

use std::io::{Read, Write};

use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;

pub const RAW_BITS: u32 = u64::BITS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodec;

impl RawCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl IntegerCodec for RawCodec {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn max_value(&self) -> u64 {
        u64::MAX
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        writer.write_bits(value, RAW_BITS)
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        reader.read_bits(RAW_BITS)
    }

    fn predict_bits(&self, _value: u64) -> Option<u32> {
        Some(RAW_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::{decode_all, encode_all};

    #[test]
    fn test_big_endian_layout() {
        let bytes = encode_all(&RawCodec, &[0x0102_0304_0506_0708]).unwrap();
        assert_eq!(bytes, 0x0102_0304_0506_0708u64.to_be_bytes().to_vec());
    }

    #[test]
    fn test_full_range() {
        let values = [0, 1, u64::MAX - 1, u64::MAX];
        let bytes = encode_all(&RawCodec, &values).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(decode_all(&RawCodec, &bytes, 4).unwrap(), values.to_vec());
    }

    #[test]
    fn test_truncated_stream() {
        let result = decode_all(&RawCodec, &[0xFF; 7], 1);
        assert!(matches!(result, Err(CodecError::StreamTruncated)));
    }
}
