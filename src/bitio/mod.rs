// In: src/bitio/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bit I/O Layer
// ====================================================================================
//
// Every codec speaks to a byte stream through exactly one of these two wrappers.
// Both own a single `Accumulator` (a left-justified 64-bit carry register plus a
// valid-bit count) and one stream handle.
//
//   Encode:  codec --write_bits(v, n)--> [BitWriter | Accumulator] --bytes--> io::Write
//   Decode:  codec <--read_bits(n)----- [BitReader | Accumulator] <--bytes-- io::Read
//                  <--peek_bit()-------
//
// Bit order is MSB-first within each byte. Neither wrapper locks internally;
// concurrent callers use independent instances.
// ====================================================================================

//! MSB-first bit I/O. The carry register behind both wrappers stays internal:
//!
//! ```compile_fail
//! use bitcodec::bitio::Accumulator;
//! ```

pub(crate) mod accumulator;
pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

#[cfg(test)]
mod tests;
