// src/rng.rs
//! Random Number Generation for Brownian Increments
//!
//! # Design Philosophy
//!
//! The integrator itself is deterministic; randomness enters only when an
//! increment sequence has to be sampled. Two kinds of stream are offered:
//! 1. **Seeded**: same seed → same increments → bit-identical trajectories
//! 2. **Entropy**: a fresh OS-seeded stream per call, for one-off paths
//!
//! Callers that need reproducibility across runs should either seed the
//! stream or supply the increments themselves.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic stream for a given seed
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fresh stream seeded from operating-system entropy
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}
