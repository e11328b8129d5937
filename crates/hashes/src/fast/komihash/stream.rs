//! Streamed komihash hashing.
//!
//! The streamed hasher buffers input in a fixed-size block and produces the
//! same value as the one-shot hash for every partitioning of the input
//! across `update` calls. `finalize` leaves the state untouched, so
//! intermediate digests of a growing stream are cheap and hashing can
//! resume afterwards.

use traits::StreamHash;

use super::{derive_lanes, epilogue, fold_lanes, hash_loop64, hash_oneshot, seed_state};

/// Default streamed-hashing buffer size, in bytes.
///
/// Any multiple of 64 that is at least 128 works. The size trades stack
/// footprint against how often short updates reach the bulk loop; the hash
/// value never depends on it.
pub const DEFAULT_BUF_SIZE: usize = 768;

/// Streamed komihash hasher.
///
/// The buffer size `B` is a compile-time parameter validated at
/// construction; see [`DEFAULT_BUF_SIZE`].
///
/// A hasher is a plain value with no interior synchronization: clone it to
/// fork a stream, give each thread its own instance for concurrent hashing.
///
/// # Example
///
/// ```
/// use hashes::{KomiHashStream, StreamHash};
///
/// let mut hasher: KomiHashStream = StreamHash::with_seed(0);
/// hasher.update(b"7 ch");
/// hasher.update(b"ars");
/// assert_eq!(hasher.finalize(), 0x2c51_4f6e_5dcb_11cb);
/// ```
#[derive(Clone)]
pub struct KomiHashStream<const B: usize = DEFAULT_BUF_SIZE> {
  buf: [u8; B],
  lanes: [u64; 8],
  seed: u64,
  buf_fill: usize,
  is_hashing: bool,
}

impl<const B: usize> Default for KomiHashStream<B> {
  #[inline]
  fn default() -> Self {
    StreamHash::with_seed(0)
  }
}

impl<const B: usize> KomiHashStream<B> {
  /// Loads the eight lanes, initializing them from the stored seed if bulk
  /// hashing has not started yet.
  #[inline]
  fn begin_hashing(&mut self) {
    if !self.is_hashing {
      self.is_hashing = true;
      let (s1, s5) = seed_state(self.seed);
      self.lanes = derive_lanes(s1, s5);
    }
  }
}

impl<const B: usize> StreamHash for KomiHashStream<B> {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn with_seed(seed: u64) -> Self {
    const {
      assert!(B % 64 == 0 && B >= 128, "stream buffer size must be a multiple of 64, at least 128");
    }
    Self {
      buf: [0u8; B],
      lanes: [0u64; 8],
      seed,
      buf_fill: 0,
      is_hashing: false,
    }
  }

  fn update(&mut self, mut data: &[u8]) {
    if self.buf_fill != 0 && self.buf_fill + data.len() >= B {
      let (head, rest) = data.split_at(B - self.buf_fill);
      self.buf[self.buf_fill..].copy_from_slice(head);
      self.buf_fill = 0;
      data = rest;

      self.begin_hashing();
      let mut lanes = self.lanes;
      // B is a multiple of 64, so the full buffer drains with no tail.
      let tail = hash_loop64(&mut lanes, &self.buf);
      debug_assert!(tail.is_empty());
      self.lanes = lanes;
    }

    if self.buf_fill == 0 && data.len() > 127 {
      // Hash the caller's memory directly, leaving at most 63 bytes to
      // buffer. The threshold keeps the bulk loop at least one full block
      // ahead of the finalizer.
      self.begin_hashing();
      let mut lanes = self.lanes;
      data = hash_loop64(&mut lanes, data);
      self.lanes = lanes;
    }

    self.buf[self.buf_fill..self.buf_fill + data.len()].copy_from_slice(data);
    self.buf_fill += data.len();
  }

  fn finalize(&self) -> u64 {
    let residue = &self.buf[..self.buf_fill];

    if !self.is_hashing {
      // Everything seen so far still sits in the buffer.
      return hash_oneshot(residue, self.seed);
    }

    // Work on lane copies; the hasher stays valid for further updates and
    // repeated finalization.
    let mut lanes = self.lanes;
    let residue = if residue.len() > 63 {
      hash_loop64(&mut lanes, residue)
    } else {
      residue
    };
    let (s1, s5) = fold_lanes(&lanes);
    epilogue(residue, s1, s5)
  }

  #[inline]
  fn reset(&mut self) {
    self.buf_fill = 0;
    self.is_hashing = false;
  }
}
