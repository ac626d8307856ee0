// In: src/bitio/reader.rs

//! MSB-first bit reader over any `std::io::Read` source.
//!
//! Bytes are pulled into the `Accumulator` one at a time and only when the
//! current request cannot be served from bits already buffered, so the reader
//! never consumes more of the source than the symbols it decodes (plus the
//! remainder of the last partial byte).

use std::io::Read;

use super::accumulator::Accumulator;
use crate::error::CodecError;

pub struct BitReader<R: Read> {
    inner: R,
    acc: Accumulator,
    bits_read: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            acc: Accumulator::new(),
            bits_read: 0,
        }
    }

    /// Total number of bits consumed by `read_bits`, excluding bits dropped by `align`.
    #[inline]
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Bits already pulled from the source but not yet consumed.
    #[inline]
    pub fn buffered_bits(&self) -> u32 {
        self.acc.count()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the source. Buffered bits are discarded.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads `n` bits (`1..=64`) and returns them right-justified.
    pub fn read_bits(&mut self, n: u32) -> Result<u64, CodecError> {
        if n == 0 || n > 64 {
            return Err(CodecError::InvalidBitCount(n));
        }

        let mut result = 0u64;
        let mut remaining = n;
        while remaining > 0 {
            if self.acc.count() < remaining {
                self.fill(remaining)?;
            }
            let take = remaining.min(self.acc.count());
            let chunk = self.acc.take(take);
            // `take` is 64 only when `result` is still empty.
            result = result.checked_shl(take).unwrap_or(0) | chunk;
            remaining -= take;
        }
        self.bits_read += n as u64;
        Ok(result)
    }

    /// Reads a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool, CodecError> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Returns the next bit without consuming it.
    pub fn peek_bit(&mut self) -> Result<bool, CodecError> {
        if self.acc.is_empty() {
            self.fill(1)?;
        }
        Ok(self.acc.peek())
    }

    /// Discards the rest of the current partial byte.
    pub fn align(&mut self) {
        let partial = self.acc.partial_bits();
        if partial > 0 {
            self.acc.take(partial);
        }
    }

    /// Pulls whole bytes until `wanted` bits are buffered or the register
    /// has no room for another byte.
    fn fill(&mut self, wanted: u32) -> Result<(), CodecError> {
        while self.acc.count() < wanted && self.acc.room() >= 8 {
            let mut byte = [0u8; 1];
            self.inner.read_exact(&mut byte)?;
            self.acc.push_byte(byte[0]);
        }
        Ok(())
    }
}

impl<R: Read> std::fmt::Debug for BitReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitReader")
            .field("acc", &self.acc)
            .field("bits_read", &self.bits_read)
            .finish()
    }
}
