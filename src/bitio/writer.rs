// In: src/bitio/writer.rs

//! MSB-first bit writer over any `std::io::Write` sink.
//!
//! Bits are merged into an `Accumulator` and every completed byte is pushed
//! to the sink before the call returns, so at most 7 bits are ever pending.
//! The pending partial byte only reaches the sink through [`BitWriter::align`],
//! [`BitWriter::close`], [`BitWriter::finish`] or the `Drop` impl.
//!
//! Passing an owned sink makes the writer responsible for it (it is dropped,
//! and therefore closed, with the writer). Passing `&mut W` borrows it.

use std::io::Write;

use super::accumulator::Accumulator;
use crate::error::CodecError;
use crate::utils::low_mask;

pub struct BitWriter<W: Write> {
    inner: Option<W>,
    acc: Accumulator,
    bits_written: u64,
    closed: bool,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Some(inner),
            acc: Accumulator::new(),
            bits_written: 0,
            closed: false,
        }
    }

    /// Total number of bits accepted by `write_bits`, excluding alignment padding.
    #[inline]
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Bits waiting for the current byte to fill up (always `< 8`).
    #[inline]
    pub fn pending_bits(&self) -> u32 {
        self.acc.count()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    /// Writes the low `n` bits of `value`, most significant first.
    /// `n` must be in `1..=64`; bits of `value` above `n` are ignored.
    pub fn write_bits(&mut self, value: u64, n: u32) -> Result<(), CodecError> {
        if n == 0 || n > 64 {
            return Err(CodecError::InvalidBitCount(n));
        }
        if self.closed {
            return Err(CodecError::Closed);
        }

        let value = value & low_mask(n);
        let mut remaining = n;
        // A count wider than the free room is split across the flush loop.
        while remaining > 0 {
            let take = remaining.min(self.acc.room());
            let chunk = (value >> (remaining - take)) & low_mask(take);
            self.acc.push(chunk, take);
            remaining -= take;
            self.flush_full_bytes()?;
        }
        self.bits_written += n as u64;
        Ok(())
    }

    /// Writes a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<(), CodecError> {
        self.write_bits(bit as u64, 1)
    }

    /// Writes `n` zero bits. `n` may be 0 and may exceed 64.
    pub fn write_zeros(&mut self, mut n: u32) -> Result<(), CodecError> {
        while n > 0 {
            let take = n.min(64);
            self.write_bits(0, take)?;
            n -= take;
        }
        Ok(())
    }

    /// Zero-pads the current partial byte and pushes it to the sink.
    /// A no-op when already on a byte boundary.
    pub fn align(&mut self) -> Result<(), CodecError> {
        if self.closed {
            return Err(CodecError::Closed);
        }
        self.pad_partial_byte()
    }

    /// Flushes the partial byte (zero-padded) and the sink itself. Further
    /// writes fail with [`CodecError::Closed`]. Calling it again is a no-op.
    pub fn close(&mut self) -> Result<(), CodecError> {
        if self.closed {
            return Ok(());
        }
        self.pad_partial_byte()?;
        if let Some(inner) = self.inner.as_mut() {
            inner.flush()?;
        }
        self.closed = true;
        crate::log_metric!("event" = "bit_writer_close", "bits_written" = self.bits_written);
        Ok(())
    }

    /// Closes the writer and hands the sink back.
    pub fn finish(mut self) -> Result<W, CodecError> {
        self.close()?;
        self.inner.take().ok_or(CodecError::Closed)
    }

    fn sink(&mut self) -> Result<&mut W, CodecError> {
        self.inner.as_mut().ok_or(CodecError::Closed)
    }

    fn flush_full_bytes(&mut self) -> Result<(), CodecError> {
        if self.acc.count() < 8 {
            return Ok(());
        }
        let mut out = [0u8; 8];
        let mut len = 0;
        while self.acc.count() >= 8 {
            out[len] = self.acc.take_byte();
            len += 1;
        }
        self.sink()?.write_all(&out[..len])?;
        Ok(())
    }

    fn pad_partial_byte(&mut self) -> Result<(), CodecError> {
        let pending = self.acc.count();
        if pending == 0 {
            return Ok(());
        }
        self.acc.push(0, 8 - pending);
        let byte = self.acc.take_byte();
        self.sink()?.write_all(&[byte])?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            if let Err(e) = self.close() {
                log::warn!("BitWriter dropped with unflushed bits: {}", e);
            }
        }
    }
}

impl<W: Write> std::fmt::Debug for BitWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitWriter")
            .field("acc", &self.acc)
            .field("bits_written", &self.bits_written)
            .field("closed", &self.closed)
            .finish()
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_msb_first() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b1, 1).unwrap();
        writer.write_bits(0b0110, 4).unwrap();
        writer.write_bits(0b101, 3).unwrap();
        assert_eq!(writer.pending_bits(), 0);
        assert_eq!(writer.finish().unwrap(), vec![0b1011_0101]);
    }

    #[test]
    fn test_partial_byte_is_zero_padded_on_finish() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b111, 3).unwrap();
        assert_eq!(writer.pending_bits(), 3);
        assert_eq!(writer.finish().unwrap(), vec![0b1110_0000]);
    }

    #[test]
    fn test_upper_bits_of_value_are_ignored() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0xFF0F, 4).unwrap();
        writer.write_bits(0, 4).unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0xF0]);
    }

    #[test]
    fn test_64_bit_write_spanning_partial_byte() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b1, 1).unwrap();
        writer.write_bits(u64::MAX, 64).unwrap();
        assert_eq!(writer.bits_written(), 65);
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes.len(), 9);
        assert!(bytes[..8].iter().all(|&b| b == 0xFF));
        assert_eq!(bytes[8], 0b1000_0000);
    }

    #[test]
    fn test_invalid_bit_counts_rejected() {
        let mut writer = BitWriter::new(Vec::new());
        assert!(matches!(writer.write_bits(0, 0), Err(CodecError::InvalidBitCount(0))));
        assert!(matches!(writer.write_bits(0, 65), Err(CodecError::InvalidBitCount(65))));
    }

    #[test]
    fn test_close_is_idempotent_and_blocks_writes() {
        let mut sink = Vec::new();
        {
            let mut writer = BitWriter::new(&mut sink);
            writer.write_bits(0b1, 1).unwrap();
            writer.close().unwrap();
            writer.close().unwrap();
            assert!(writer.is_closed());
            assert_eq!(writer.get_ref().map(|s| s.len()), Some(1));
            assert!(matches!(writer.write_bit(true), Err(CodecError::Closed)));
        }
        assert_eq!(sink, vec![0x80]);
    }

    #[test]
    fn test_drop_flushes_partial_byte_into_borrowed_sink() {
        let mut sink = Vec::new();
        {
            let mut writer = BitWriter::new(&mut sink);
            writer.write_bits(0b1010_1010_1, 9).unwrap();
        }
        assert_eq!(sink, vec![0b1010_1010, 0b1000_0000]);
    }

    #[test]
    fn test_write_zeros_beyond_64() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_zeros(70).unwrap();
        writer.write_bit(true).unwrap();
        assert_eq!(writer.bits_written(), 71);
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[8], 0b0000_0010);
    }
}
