//! Incremental seeded hashing traits.
//!
//! This trait is deliberately shaped like a checksum hasher: streaming
//! updates, a finalize that does not consume the hasher, and reset support.
//! `finalize` may be called at any point to obtain an intermediate digest of
//! the stream so far; hashing continues with further `update` calls as if
//! nothing happened.

use core::fmt::Debug;

/// Incremental seeded hash producing a fixed-size output.
///
/// Implementations must guarantee that any partitioning of the same byte
/// sequence across `update` calls yields the same output, equal to the
/// one-shot [`hash_with_seed`](Self::hash_with_seed) of the concatenation.
///
/// # Usage Pattern
///
/// ```text
/// // One-shot
/// let h = KomiHashStream::hash_with_seed(seed, b"hello world");
///
/// // Streaming
/// let mut hasher: KomiHashStream = StreamHash::with_seed(seed);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), h);
/// ```
pub trait StreamHash: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug;

  /// Seed type (typically `u64`).
  type Seed: Copy + Debug + Default;

  /// Create a hasher seeded with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Create a hasher with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Update the hasher with additional data.
  ///
  /// This method can be called any number of times, with chunks of any
  /// size, including zero.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the hash.
  ///
  /// This method does not consume or disturb the hasher: calling it again
  /// without further updates returns the same value, and further updates
  /// continue the same stream.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial seeded state.
  fn reset(&mut self);

  /// Compute the hash of `data` in one shot using `seed`.
  #[inline]
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize()
  }

  /// Compute the hash of `data` in one shot using the default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Wrap a reader to compute the hash transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::StreamReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::StreamReader::new(inner)
  }

  /// Wrap a writer to compute the hash transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::StreamWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::StreamWriter::new(inner)
  }
}
