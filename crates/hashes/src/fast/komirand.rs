//! komirand 64-bit PRNG.
//!
//! The companion generator to komihash: the same wide-multiply round with a
//! "register checkerboard" constant added to the high half, which keeps the
//! generator moving from any state, including all zeros.

use super::komihash::mul128_acc;

/// Bit pattern `10` replicated across the word. Not an arbitrary constant:
/// the checkerboard keeps the high-half accumulator advancing when the
/// multiplier words collapse toward zero.
const CHECKERBOARD: u64 = 0xaaaa_aaaa_aaaa_aaaa;

/// komirand pseudo-random generator (**NOT CRYPTO**).
///
/// 128 bits of state, period of at least 2^64, 64 uniformly-distributed
/// output bits per step. Statistical quality only; never use for secrets.
///
/// # Example
///
/// ```
/// use hashes::KomiRand;
///
/// let mut rng = KomiRand::new(0, 0);
/// assert_eq!(rng.next_u64(), 0xaaaa_aaaa_aaaa_aaaa);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KomiRand {
  seed1: u64,
  seed2: u64,
}

impl KomiRand {
  /// Create a generator from raw state words.
  ///
  /// Any values work, including both zero; the generator self-starts within
  /// four steps. The first outputs of a low-entropy state are low-entropy
  /// themselves; see [`from_seed`](Self::from_seed) for a warmed-up start.
  #[inline]
  #[must_use]
  pub const fn new(seed1: u64, seed2: u64) -> Self {
    Self { seed1, seed2 }
  }

  /// Create a generator from a single seed value, warmed up.
  ///
  /// Both state words start at `seed` and the four self-start rounds are
  /// discarded.
  #[inline]
  #[must_use]
  pub fn from_seed(seed: u64) -> Self {
    let mut rng = Self::new(seed, seed);
    for _ in 0..4 {
      rng.next_u64();
    }
    rng
  }

  /// Produce the next uniformly-distributed 64-bit value.
  #[inline]
  pub fn next_u64(&mut self) -> u64 {
    let (lo, hi) = mul128_acc(self.seed1, self.seed2, self.seed2);
    self.seed2 = hi.wrapping_add(CHECKERBOARD);
    self.seed1 = lo ^ self.seed2;
    self.seed1
  }
}
