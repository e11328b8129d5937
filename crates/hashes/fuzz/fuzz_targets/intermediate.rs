//! Fuzz target for intermediate digests.
//!
//! Finalizing mid-stream must neither disturb the stream nor depend on
//! earlier finalizations.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::KomiHash64;
use hashes::{FastHash as _, KomiHashStream, StreamHash as _};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u64,
  head: Vec<u8>,
  tail: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let mut hasher = KomiHashStream::<768>::with_seed(input.seed);
  hasher.update(&input.head);

  let mid = hasher.finalize();
  assert_eq!(
    mid,
    KomiHash64::hash_with_seed(input.seed, &input.head),
    "intermediate digest mismatch"
  );
  assert_eq!(hasher.finalize(), mid, "finalize is not repeatable");

  hasher.update(&input.tail);

  let mut whole = input.head.clone();
  whole.extend_from_slice(&input.tail);
  assert_eq!(
    hasher.finalize(),
    KomiHash64::hash_with_seed(input.seed, &whole),
    "resumed stream mismatch"
  );
});
