//! Deterministic seeding (SplitMix64 mixing + replay tokens).
//!
//! Every pseudorandom draw in the crate (scenario generation and the
//! coincident-position tie-break) funnels through one cheap, stable mixer so
//! results replay exactly from `(seed, index)` pairs and are independent of
//! iteration order.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// SplitMix64 finalizer.
#[inline]
pub(crate) fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub seed: u64,
    pub index: u64,
}

impl Token {
    #[inline]
    pub(crate) fn to_std_rng(self) -> StdRng {
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}
