//! Seeded random number generation.
//!
//! Every stochastic component owns its generator; nothing in this crate
//! draws from thread-local or global randomness once a run has started.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives an independent seed for a sub-component.
///
/// SplitMix64 finalizer, so nearby parent seeds give unrelated streams.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
