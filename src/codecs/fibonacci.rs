//! Fibonacci coding, offset by one so that zero is encodable.
//!
//! `x = value + 1` is decomposed into non-consecutive Fibonacci terms
//! (Zeckendorf's theorem). Stream bit `i` is 1 when term `F(i + 2)` is used,
//! smallest term first, and an extra 1 bit follows the highest used term.
//! Zeckendorf representations never contain two adjacent 1 bits, so the first
//! `11` in the stream always marks the end of a symbol.

use std::io::{Read, Write};

use super::IntegerCodec;
use crate::bitio::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::utils::{highest_fibonacci_index, FIBONACCI, FIBONACCI_TERMS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibonacciCodec;

impl FibonacciCodec {
    pub const fn new() -> Self {
        Self
    }
}

/// Builds the codeword of `x` (non-zero) with stream bit `i` stored at bit `i`.
/// Returns the codeword and its length including the terminator.
fn codeword(mut x: u64) -> (u128, u32) {
    let top = highest_fibonacci_index(x);
    let mut word: u128 = 1 << (top + 1);
    let mut i = top + 1;
    while x > 0 && i > 0 {
        i -= 1;
        if FIBONACCI[i] <= x {
            word |= 1 << i;
            x -= FIBONACCI[i];
            // The next smaller term can never fit after a greedy pick.
            i = i.saturating_sub(1);
        }
    }
    (word, top as u32 + 2)
}

impl IntegerCodec for FibonacciCodec {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn max_value(&self) -> u64 {
        u64::MAX - 1
    }

    fn encode<W: Write>(&self, value: u64, writer: &mut BitWriter<W>) -> Result<(), CodecError> {
        self.check_range(value)?;
        let (word, len) = codeword(self.offset_by_one(value)?);
        // The writer is MSB-first, so reverse the word to put stream bit 0 on top.
        let ordered = word.reverse_bits() >> (u128::BITS - len);
        if len > 64 {
            writer.write_bits((ordered >> 64) as u64, len - 64)?;
            writer.write_bits(ordered as u64, 64)
        } else {
            writer.write_bits(ordered as u64, len)
        }
    }

    fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u64, CodecError> {
        let mut acc: u64 = 0;
        let mut previous = false;
        let mut index = 0usize;
        loop {
            let bit = reader.read_bit()?;
            if bit && previous {
                break;
            }
            // Only the terminator may follow the last term.
            if index >= FIBONACCI_TERMS {
                return Err(CodecError::SymbolOverflow(format!(
                    "fibonacci codeword longer than {} terms",
                    FIBONACCI_TERMS
                )));
            }
            if bit {
                acc = acc.checked_add(FIBONACCI[index]).ok_or_else(|| {
                    CodecError::SymbolOverflow("fibonacci accumulator wrapped".to_string())
                })?;
            }
            previous = bit;
            index += 1;
        }
        // A codeword always has at least one term before its terminator, so
        // `acc` is non-zero here.
        Ok(acc - 1)
    }

    fn predict_bits(&self, value: u64) -> Option<u32> {
        let x = value.checked_add(1)?;
        Some(highest_fibonacci_index(x) as u32 + 2)
    }
}
