//! komihash 64-bit hash (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the v5 algorithm. Produces identical
//! hashes on little- and big-endian hosts. The `FastHash` seed is an
//! additional entropy source and may be any 64-bit value of any statistical
//! quality; it is treated as opaque bits.

#![allow(clippy::indexing_slicing)] // Tight block parsing

use traits::FastHash;

mod stream;

pub use stream::{DEFAULT_BUF_SIZE, KomiHashStream};

/// komihash 64-bit hash.
///
/// # Example
///
/// ```
/// use hashes::{FastHash, KomiHash64};
///
/// assert_eq!(KomiHash64::hash_with_seed(0, b"A 16-byte string"), 0x467c_aa28_ea3d_a7a6);
/// ```
#[derive(Clone, Default)]
pub struct KomiHash64;

// First mantissa bits of pi. The output contract is defined in terms of
// these exact constants; changing any of them changes every hash value.
const SEED1: u64 = 0x243f_6a88_85a3_08d3;
const SEED2: u64 = 0x1319_8a2e_0370_7344;
const SEED3: u64 = 0xa409_3822_299f_31d0;
const SEED4: u64 = 0x082e_fa98_ec4e_6c89;
const SEED5: u64 = 0x4528_21e6_38d0_1377;
const SEED6: u64 = 0xbe54_66cf_34e9_0c6c;
const SEED7: u64 = 0xc0ac_29b7_c97c_50dd;
const SEED8: u64 = 0x3f84_d5b5_b547_0917;

// The user seed is split into disjoint bit halves, one per primary lane, so
// every seed bit enters exactly one multiply input.
const SEED_MASK_EVEN: u64 = 0x5555_5555_5555_5555;
const SEED_MASK_ODD: u64 = 0xaaaa_aaaa_aaaa_aaaa;

#[inline(always)]
fn read_u32_le(input: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= input.len());
  // SAFETY: caller ensures `offset + 4 <= input.len()`, and `read_unaligned`
  // supports unaligned loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u32) };
  u32::from_le(v)
}

#[inline(always)]
fn read_u64_le(input: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 8 <= input.len());
  // SAFETY: caller ensures `offset + 8 <= input.len()`, and `read_unaligned`
  // supports unaligned loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u64) };
  u64::from_le(v)
}

/// Builds a 64-bit word from the 0..=7 remaining message bytes, marking the
/// position one past the end with a 1 bit. The mark encodes the residual
/// length into the mixed value, so messages differing only in trailing zero
/// bytes keep distinct hashes.
#[inline(always)]
fn read_tail_padded(tail: &[u8]) -> u64 {
  debug_assert!(tail.len() < 8);
  let n = tail.len();
  let mark = 1u64 << (8 * n);

  if n < 4 {
    let mut m = 0u64;
    if n > 0 {
      m |= tail[0] as u64;
      if n > 1 {
        m |= (tail[1] as u64) << 8;
        if n > 2 {
          m |= (tail[2] as u64) << 16;
        }
      }
    }
    return mark | m;
  }

  let ml = read_u32_le(tail, 0) as u64;
  let mh = read_u32_le(tail, n - 4) as u64;
  mark | ml | ((mh >> (64 - 8 * n)) << 32)
}

/// Full 64x64 -> 128 unsigned product. Returns the low half, and the high
/// half added into `acc`.
#[inline(always)]
pub(crate) const fn mul128_acc(u: u64, v: u64, acc: u64) -> (u64, u64) {
  let r = (u as u128).wrapping_mul(v as u128);
  (r as u64, acc.wrapping_add((r >> 64) as u64))
}

/// Hashing round without input: the simplest constantless PRNG step over the
/// primary pair.
#[inline(always)]
fn hash_round(s1: &mut u64, s5: &mut u64) {
  let (lo, hi) = mul128_acc(*s1, *s5, *s5);
  *s5 = hi;
  *s1 = lo ^ hi;
}

/// Hashing round with a 16-byte input block.
#[inline(always)]
fn hash16(s1: &mut u64, s5: &mut u64, m: &[u8]) {
  debug_assert!(m.len() >= 16);
  let (lo, hi) = mul128_acc(*s1 ^ read_u64_le(m, 0), *s5 ^ read_u64_le(m, 8), *s5);
  *s5 = hi;
  *s1 = lo ^ hi;
}

/// Finalization: mixes the last input pair, then one more plain round.
#[inline(always)]
fn hash_finish(r1: u64, r2: u64, s5: u64) -> u64 {
  let (lo, hi) = mul128_acc(r1, r2, s5);
  let mut s1 = lo ^ hi;
  let mut s5 = hi;
  hash_round(&mut s1, &mut s5);
  s1
}

/// Mixes the user seed into the primary pair and pre-diffuses it through one
/// round. The round runs even for empty input; patterned inputs
/// (Perlin-Noise-style grids) need the seed diffused before the first byte
/// is absorbed.
#[inline(always)]
fn seed_state(seed: u64) -> (u64, u64) {
  let mut s1 = SEED1 ^ (seed & SEED_MASK_EVEN);
  let mut s5 = SEED5 ^ (seed & SEED_MASK_ODD);
  hash_round(&mut s1, &mut s5);
  (s1, s5)
}

/// Derives the six auxiliary lanes from the pre-mixed primary pair.
#[inline(always)]
fn derive_lanes(s1: u64, s5: u64) -> [u64; 8] {
  [
    s1,
    SEED2 ^ s1,
    SEED3 ^ s1,
    SEED4 ^ s1,
    s5,
    SEED6 ^ s5,
    SEED7 ^ s5,
    SEED8 ^ s5,
  ]
}

/// 64-byte 8-lane bulk loop. Consumes every complete 64-byte block of `data`
/// and returns the remaining tail (0..=63 bytes).
#[inline]
fn hash_loop64<'a>(lanes: &mut [u64; 8], data: &'a [u8]) -> &'a [u8] {
  let [mut s1, mut s2, mut s3, mut s4, mut s5, mut s6, mut s7, mut s8] = *lanes;

  let (blocks, tail) = data.as_chunks::<64>();
  for m in blocks {
    let (lo, hi) = mul128_acc(s1 ^ read_u64_le(m, 0), s5 ^ read_u64_le(m, 32), s5);
    s1 = lo;
    s5 = hi;
    let (lo, hi) = mul128_acc(s2 ^ read_u64_le(m, 8), s6 ^ read_u64_le(m, 40), s6);
    s2 = lo;
    s6 = hi;
    let (lo, hi) = mul128_acc(s3 ^ read_u64_le(m, 16), s7 ^ read_u64_le(m, 48), s7);
    s3 = lo;
    s7 = hi;
    let (lo, hi) = mul128_acc(s4 ^ read_u64_le(m, 24), s8 ^ read_u64_le(m, 56), s8);
    s4 = lo;
    s8 = hi;

    // The shifting cross-lane XOR fuses the four multiply lanes into a
    // single 256-bit state; lanes must not run independent of each other.
    s2 ^= s5;
    s3 ^= s6;
    s4 ^= s7;
    s1 ^= s8;
  }

  *lanes = [s1, s2, s3, s4, s5, s6, s7, s8];
  tail
}

/// Collapses the eight lanes back to the primary pair.
#[inline(always)]
fn fold_lanes(lanes: &[u64; 8]) -> (u64, u64) {
  let [s1, s2, s3, s4, s5, s6, s7, s8] = *lanes;
  (s1 ^ s2 ^ s3 ^ s4, s5 ^ s6 ^ s7 ^ s8)
}

/// Hashing epilogue over the 0..=63 bytes left after bulk processing.
#[inline]
fn epilogue(mut m: &[u8], mut s1: u64, mut s5: u64) -> u64 {
  debug_assert!(m.len() < 64);

  if m.len() > 31 {
    hash16(&mut s1, &mut s5, m);
    hash16(&mut s1, &mut s5, &m[16..]);
    m = &m[32..];
  }

  if m.len() > 15 {
    hash16(&mut s1, &mut s5, m);
    m = &m[16..];
  }

  let (r1, r2) = if m.len() > 7 {
    (s1 ^ read_u64_le(m, 0), s5 ^ read_tail_padded(&m[8..]))
  } else {
    (s1 ^ read_tail_padded(m), s5)
  };

  hash_finish(r1, r2, s5)
}

/// One-shot komihash of `data` with `seed`.
#[inline]
fn hash_oneshot(data: &[u8], seed: u64) -> u64 {
  let (mut s1, mut s5) = seed_state(seed);

  if data.len() < 16 {
    let mut r1 = s1;
    let mut r2 = s5;

    if data.len() > 7 {
      // XORing the message into the pre-mixed state is one-time-pad
      // mixing; the input's statistics and distribution are unimportant.
      r2 ^= read_tail_padded(&data[8..]);
      r1 ^= read_u64_le(data, 0);
    } else if !data.is_empty() {
      r1 ^= read_tail_padded(data);
    }

    return hash_finish(r1, r2, s5);
  }

  if data.len() < 32 {
    hash16(&mut s1, &mut s5, data);

    let (r1, r2) = if data.len() > 23 {
      (s1 ^ read_u64_le(data, 16), s5 ^ read_tail_padded(&data[24..]))
    } else {
      (s1 ^ read_tail_padded(&data[16..]), s5)
    };

    return hash_finish(r1, r2, s5);
  }

  let mut m = data;
  if m.len() > 63 {
    let mut lanes = derive_lanes(s1, s5);
    m = hash_loop64(&mut lanes, m);
    (s1, s5) = fold_lanes(&lanes);
  }

  epilogue(m, s1, s5)
}

impl FastHash for KomiHash64 {
  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    hash_oneshot(data, seed)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unaligned_le_reads_match_byte_composition() {
    let data: [u8; 16] = [
      0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc, 0xfe,
    ];
    for off in 0..=8 {
      let mut b = [0u8; 8];
      b.copy_from_slice(&data[off..off + 8]);
      assert_eq!(read_u64_le(&data, off), u64::from_le_bytes(b), "u64 at {off}");
    }
    for off in 0..=12 {
      let mut b = [0u8; 4];
      b.copy_from_slice(&data[off..off + 4]);
      assert_eq!(read_u32_le(&data, off), u32::from_le_bytes(b), "u32 at {off}");
    }
  }

  #[test]
  fn tail_mark_encodes_length() {
    assert_eq!(read_tail_padded(&[]), 1);
    assert_eq!(read_tail_padded(&[0xab]), (1 << 8) | 0xab);
    assert_eq!(read_tail_padded(&[0x00]), 1 << 8);
    assert_eq!(read_tail_padded(&[0x00, 0x00]), 1 << 16);
  }

  #[test]
  fn tail_word_matches_byte_composition() {
    let bytes: [u8; 7] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
    for n in 0..=7 {
      let mut expect = 1u64 << (8 * n);
      for (i, &b) in bytes[..n].iter().enumerate() {
        expect |= (b as u64) << (8 * i);
      }
      assert_eq!(read_tail_padded(&bytes[..n]), expect, "length {n}");
    }
  }

  #[test]
  fn mul128_acc_accumulates_the_high_half() {
    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    let (lo, hi) = mul128_acc(u64::MAX, u64::MAX, 5);
    assert_eq!(lo, 1);
    assert_eq!(hi, (u64::MAX - 1).wrapping_add(5));

    let (lo, hi) = mul128_acc(3, 5, 0);
    assert_eq!((lo, hi), (15, 0));
  }

  #[test]
  fn published_vectors_seed_zero() {
    assert_eq!(hash_oneshot(b"This is a 32-byte testing string", 0), 0x05ad_9608_0290_3a9d);
    assert_eq!(hash_oneshot(b"The cat is out of the bag", 0), 0xd157_2352_1d3c_37b1);
    assert_eq!(hash_oneshot(b"A 16-byte string", 0), 0x467c_aa28_ea3d_a7a6);
    assert_eq!(hash_oneshot(b"7 chars", 0), 0x2c51_4f6e_5dcb_11cb);
  }

  #[test]
  fn zero_length_input_is_defined_by_the_seed_alone() {
    assert_eq!(hash_oneshot(&[], 7), hash_oneshot(&[], 7));
    assert_ne!(hash_oneshot(&[], 0), hash_oneshot(&[], 1));
  }

  #[test]
  fn trailing_zero_bytes_change_the_hash() {
    let zeroes = [0u8; 24];
    for n in 0..24 {
      for m in 0..24 {
        if n != m {
          assert_ne!(hash_oneshot(&zeroes[..n], 0), hash_oneshot(&zeroes[..m], 0), "{n} vs {m}");
        }
      }
    }
  }
}
