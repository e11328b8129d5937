//! komihash: a fast 64-bit non-cryptographic hash, its streamed variant, and
//! the komirand PRNG.
//!
//! This crate is `no_std` compatible and has zero library dependencies
//! outside the workspace. Dev-only dependencies are used for property
//! testing and benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod fast;

pub use fast::{KomiHash64, KomiHashStream, KomiRand};
pub use traits::{FastHash, StreamHash};
