use super::*;
use crate::error::CodecError;
use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Packs `(value, n)` pairs through a `BitWriter` and aligns at the end.
fn pack(fields: &[(u64, u32)]) -> Vec<u8> {
    let mut writer = BitWriter::new(Vec::new());
    for &(value, n) in fields {
        writer.write_bits(value, n).unwrap();
    }
    writer.align().unwrap();
    writer.finish().unwrap()
}

/// Independent MSB-first packing oracle built on `bitvec`.
fn pack_with_bitvec(fields: &[(u64, u32)]) -> Vec<u8> {
    let mut bits: BitVec<u8, Msb0> = BitVec::new();
    for &(value, n) in fields {
        for i in (0..n).rev() {
            bits.push((value >> i) & 1 == 1);
        }
    }
    bits.set_uninitialized(false);
    bits.into_vec()
}

#[test]
fn test_split_writes_match_single_write() {
    // 3 + 5 + 13 + 1 = 22 bits, a non-multiple of 8.
    let pattern: u64 = 0b101_10011_1100101011110_1;
    let split = pack(&[(0b101, 3), (0b10011, 5), (0b1100101011110, 13), (0b1, 1)]);
    let single = pack(&[(pattern, 22)]);
    assert_eq!(split, single);
    assert_eq!(split, vec![0b1011_0011, 0b1100_1010, 0b1111_0100]);
}

#[test]
fn test_random_splits_match_bitvec_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5EED_B175);
    for _ in 0..200 {
        let fields: Vec<(u64, u32)> = (0..rng.random_range(1..40))
            .map(|_| {
                let n = rng.random_range(1..=64u32);
                (rng.random::<u64>() & crate::utils::low_mask(n), n)
            })
            .collect();
        assert_eq!(pack(&fields), pack_with_bitvec(&fields));
    }
}

#[test]
fn test_any_split_of_same_bits_is_byte_identical() {
    let mut rng = StdRng::seed_from_u64(42);
    let total: u32 = 61;
    let pattern = rng.random::<u64>() & crate::utils::low_mask(total);
    let reference = pack(&[(pattern, total)]);

    for _ in 0..100 {
        let mut fields = Vec::new();
        let mut left = total;
        while left > 0 {
            let n = rng.random_range(1..=left);
            let shift = left - n;
            fields.push(((pattern >> shift) & crate::utils::low_mask(n), n));
            left -= n;
        }
        assert_eq!(pack(&fields), reference);
    }
}

#[test]
fn test_writer_reader_round_trip_mixed_widths() {
    let mut rng = StdRng::seed_from_u64(7);
    let fields: Vec<(u64, u32)> = (0..500)
        .map(|_| {
            let n = rng.random_range(1..=64u32);
            (rng.random::<u64>() & crate::utils::low_mask(n), n)
        })
        .collect();
    let bytes = pack(&fields);

    let mut reader = BitReader::new(&bytes[..]);
    for &(value, n) in &fields {
        assert_eq!(reader.read_bits(n).unwrap(), value);
    }
    let total: u64 = fields.iter().map(|&(_, n)| n as u64).sum();
    assert_eq!(reader.bits_read(), total);
    assert!(reader.buffered_bits() < 8);
}

#[test]
fn test_align_between_groups_round_trips() {
    let mut writer = BitWriter::new(Vec::new());
    writer.write_bits(0b11, 2).unwrap();
    writer.align().unwrap();
    writer.write_bits(0b1, 1).unwrap();
    let bytes = writer.finish().unwrap();
    assert_eq!(bytes, vec![0b1100_0000, 0b1000_0000]);

    let mut reader = BitReader::new(&bytes[..]);
    assert_eq!(reader.read_bits(2).unwrap(), 0b11);
    reader.align();
    assert!(reader.read_bit().unwrap());
}

#[test]
fn test_align_after_close_is_rejected() {
    let mut writer = BitWriter::new(Vec::new());
    writer.close().unwrap();
    assert!(matches!(writer.align(), Err(CodecError::Closed)));
}
