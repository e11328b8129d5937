//! I/O adapter support for streamed hashing.
//!
//! [`StreamReader`] and [`StreamWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and feed every transferred byte into a
//! [`StreamHash`](crate::StreamHash) hasher.
//!
//! # Correctness
//!
//! - Short reads hash only the bytes actually transferred.
//! - Writes hash **before** handing bytes to the inner writer, so a failed
//!   write leaves no ambiguity about what was hashed.
//! - The [`hash`](StreamReader::hash) accessor uses the non-destructive
//!   finalizer; further I/O keeps extending the same stream.

use crate::StreamHash;

/// Wraps a [`Read`](std::io::Read) and hashes bytes transparently.
///
/// # Example
///
/// ```rust,ignore
/// use hashes::{KomiHashStream, StreamHash};
/// use std::fs::File;
///
/// let file = File::open("data.bin")?;
/// let mut reader = <KomiHashStream>::reader(file);
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// println!("hash: {:016x}", reader.hash());
/// ```
#[derive(Clone)]
pub struct StreamReader<R, H: StreamHash> {
  inner: R,
  hasher: H,
}

impl<R, H: StreamHash> StreamReader<R, H> {
  /// Create a new reader wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: H::new(),
    }
  }

  /// Create a new reader wrapper seeded with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Current hash of all bytes read so far.
  ///
  /// This does not disturb the hasher; further reads continue updating the
  /// hash.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `StreamReader`, returning the inner reader and the hash of
  /// everything read through it.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let hash = self.hasher.finalize();
    (self.inner, hash)
  }

  /// Unwrap this `StreamReader`, returning the inner reader and discarding
  /// the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, H: StreamHash> std::io::Read for StreamReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      let to_hash = remaining.min(buf.len());
      if to_hash > 0 {
        if let Some(data) = buf.get(..to_hash) {
          self.hasher.update(data);
        }
        remaining -= to_hash;
      } else {
        break;
      }
    }
    Ok(n)
  }
}

/// Wraps a [`Write`](std::io::Write) and hashes bytes transparently.
///
/// # Example
///
/// ```rust,ignore
/// use hashes::{KomiHashStream, StreamHash};
/// use std::fs::File;
///
/// let file = File::create("output.bin")?;
/// let mut writer = <KomiHashStream>::writer(file);
/// writer.write_all(b"hello world")?;
/// let (file, hash) = writer.into_parts();
/// ```
#[derive(Clone)]
pub struct StreamWriter<W, H: StreamHash> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamHash> StreamWriter<W, H> {
  /// Create a new writer wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: H::new(),
    }
  }

  /// Create a new writer wrapper seeded with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self {
      inner,
      hasher: H::with_seed(seed),
    }
  }

  /// Current hash of all bytes written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `StreamWriter`, returning the inner writer and the hash of
  /// everything written through it.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let hash = self.hasher.finalize();
    (self.inner, hash)
  }

  /// Unwrap this `StreamWriter`, returning the inner writer and discarding
  /// the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, H: StreamHash> std::io::Write for StreamWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.hasher.update(buf);
    self.inner.write(buf)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    for buf in bufs {
      self.hasher.update(buf);
    }
    self.inner.write_vectored(bufs)
  }
}
