use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashes::fast::{DEFAULT_BUF_SIZE, KomiHash64};
use hashes::{FastHash as _, KomiHashStream, KomiRand, StreamHash as _};

/// splitmix64-filled benchmark input. Deliberately an unrelated generator:
/// inputs must not come from the code under test, and must not be all-zero
/// or otherwise trivially structured.
fn bench_bytes(len: usize, mut state: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  for chunk in out.chunks_mut(8) {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    let word = (z ^ (z >> 31)).to_le_bytes();
    chunk.copy_from_slice(&word[..chunk.len()]);
  }
  black_box(&out);
  out
}

/// Lengths pinned to the hash's dispatch edges: the small/medium branch
/// boundaries (7/8, 15/16, 23/24, 31/32), the bulk-loop entry (63/64/65),
/// the direct-hashing threshold of the streamed path (127/128), the
/// streaming buffer boundary, and bulk payloads.
fn input_lengths() -> Vec<usize> {
  vec![
    0,
    4,
    7,
    8,
    15,
    16,
    23,
    24,
    31,
    32,
    63,
    64,
    65,
    127,
    128,
    256,
    DEFAULT_BUF_SIZE - 1,
    DEFAULT_BUF_SIZE,
    DEFAULT_BUF_SIZE + 1,
    4 * 1024,
    64 * 1024,
    1024 * 1024,
  ]
}

fn oneshot(c: &mut Criterion) {
  let mut group = c.benchmark_group("komihash/oneshot");

  for len in input_lengths() {
    let data = bench_bytes(len, 0x0123_4567_89ab_cdef);
    if len == 0 {
      group.throughput(Throughput::Elements(1));
    } else {
      group.throughput(Throughput::Bytes(len as u64));
    }

    group.bench_with_input(BenchmarkId::new("komihash64", len), &data, |b, d| {
      b.iter(|| black_box(KomiHash64::hash(black_box(d))))
    });
  }

  group.finish();
}

fn streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("komihash/streaming");
  let data = bench_bytes(1024 * 1024, 0xa11c_e5ed_5eed_0001);
  let data = black_box(data);
  group.throughput(Throughput::Bytes(data.len() as u64));

  // 64-byte chunks keep every update below the direct-hashing threshold, so
  // all input funnels through the buffer.
  group.bench_function("64B-chunks", |b| {
    b.iter(|| {
      let mut h = KomiHashStream::<DEFAULT_BUF_SIZE>::with_seed(0);
      for chunk in data.chunks(64) {
        h.update(chunk);
      }
      black_box(h.finalize())
    })
  });

  // Buffer-sized chunks exercise the exact fill-and-drain boundary.
  group.bench_function("bufsize-chunks", |b| {
    b.iter(|| {
      let mut h = KomiHashStream::<DEFAULT_BUF_SIZE>::with_seed(0);
      for chunk in data.chunks(DEFAULT_BUF_SIZE) {
        h.update(chunk);
      }
      black_box(h.finalize())
    })
  });

  group.bench_function("4KiB-chunks", |b| {
    b.iter(|| {
      let mut h = KomiHashStream::<DEFAULT_BUF_SIZE>::with_seed(0);
      for chunk in data.chunks(4 * 1024) {
        h.update(chunk);
      }
      black_box(h.finalize())
    })
  });

  // One update hashes almost everything straight from the caller's slice.
  group.bench_function("single-update", |b| {
    b.iter(|| {
      let mut h = KomiHashStream::<DEFAULT_BUF_SIZE>::with_seed(0);
      h.update(&data);
      black_box(h.finalize())
    })
  });

  group.finish();
}

fn komirand(c: &mut Criterion) {
  let mut group = c.benchmark_group("komirand");
  group.throughput(Throughput::Bytes(8 * 1024));

  group.bench_function("1024-samples", |b| {
    b.iter(|| {
      let mut rng = KomiRand::new(black_box(1), black_box(2));
      let mut acc = 0u64;
      for _ in 0..1024 {
        acc ^= rng.next_u64();
      }
      black_box(acc)
    })
  });

  group.finish();
}

criterion_group!(benches, oneshot, streaming, komirand);
criterion_main!(benches);
