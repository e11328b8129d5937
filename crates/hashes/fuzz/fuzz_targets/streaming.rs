//! Fuzz target for the streamed hashing API.
//!
//! Arbitrary chunkings of arbitrary data must reproduce the one-shot hash.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::KomiHash64;
use hashes::{FastHash as _, KomiHashStream, StreamHash as _};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let expected = KomiHash64::hash_with_seed(input.seed, &input.data);

  let mut hasher = KomiHashStream::<768>::with_seed(input.seed);
  let mut offset = 0usize;
  let mut chunk_idx = 0usize;

  while offset < input.data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(input.chunk_sizes.len());
      input.chunk_sizes[idx].strict_rem(2048).max(1)
    };

    let end = offset.strict_add(chunk_size).min(input.data.len());
    hasher.update(&input.data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.finalize(), expected, "streamed hash mismatch");
});
