//! One-shot non-cryptographic hash traits (**NOT CRYPTO**).

/// A fast seeded hash with a 64-bit result.
///
/// Everything in this workspace hashes to `u64` and takes a `u64` seed, so
/// the trait is concrete rather than generic over output and seed types.
/// The seed is an additional entropy source of any statistical quality; it
/// is treated as opaque bits, and `0` is the algorithm's default.
///
/// Implementations are suitable for hash tables, sharding, and
/// fingerprints. They are **not** suitable for signatures, MACs, password
/// hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot and allocation-free: a call is a
/// pure function of `(seed, data)`. Incremental hashing needs
/// algorithm-specific buffering and lives behind
/// [`StreamHash`](crate::StreamHash) on concrete types; the two surfaces of
/// one algorithm must agree on every input.
pub trait FastHash {
  /// Compute the hash of `data` using the algorithm's default seed of `0`.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> u64 {
    Self::hash_with_seed(0, data)
  }

  /// Compute the hash of `data` using `seed`.
  ///
  /// Equal `(seed, data)` pairs hash identically on every platform and
  /// endianness. A zero-length `data` is valid; the result then depends on
  /// `seed` alone.
  #[must_use]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64;
}
