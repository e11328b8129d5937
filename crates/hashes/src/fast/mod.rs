//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these
//! hashes for signatures, MACs, key derivation, or anything requiring
//! cryptographic security.

pub mod komihash;
pub mod komirand;

pub use komihash::{DEFAULT_BUF_SIZE, KomiHash64, KomiHashStream};
pub use komirand::KomiRand;
