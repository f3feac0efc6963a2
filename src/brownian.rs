// src/brownian.rs
//! Brownian Increment Source
//!
//! # Mathematical Framework
//!
//! A Wiener process sampled on a uniform grid `t_i = i Δt` has independent
//! increments
//! ```text
//! ΔW_i = W(t_{i+1}) - W(t_i) ~ N(0, Δt)
//! ```
//!
//! The integrators never draw random numbers themselves. They consume a
//! [`BrownianPath`] that was either handed in by the caller (reproducible
//! testing, common random numbers across schemes) or sampled up front here.
//! Both cases are checked against `n_steps` before a single step is taken.

use crate::error::{validation::validate_length, SdeError, SdeResult};
use crate::rng;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Increment sequence driving one simulation.
///
/// Either caller-supplied (borrowed, used exactly as given) or freshly
/// sampled (owned). The integrators only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub enum BrownianPath<'a> {
    Supplied(&'a [f64]),
    Sampled(Vec<f64>),
}

impl<'a> BrownianPath<'a> {
    /// Use `supplied` when present, otherwise sample `n_steps` increments
    /// from a fresh entropy-seeded stream.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `supplied` does not hold exactly `n_steps` values
    /// - `RandomGenerationError` if `dt` is not a valid variance
    pub fn generate_or_validate(
        n_steps: usize,
        dt: f64,
        supplied: Option<&'a [f64]>,
    ) -> SdeResult<Self> {
        match supplied {
            Some(increments) => Self::supplied(n_steps, increments),
            None => Self::sample(n_steps, dt, &mut rng::entropy_rng()),
        }
    }

    /// Validate a caller-supplied sequence. No transformation is applied.
    pub fn supplied(n_steps: usize, increments: &'a [f64]) -> SdeResult<Self> {
        validate_length("increments", n_steps, increments.len())?;
        Ok(BrownianPath::Supplied(increments))
    }

    /// Draw `n_steps` independent `N(0, dt)` increments from `rng`
    pub fn sample<R: Rng + ?Sized>(n_steps: usize, dt: f64, rng: &mut R) -> SdeResult<Self> {
        let normal = Normal::new(0.0, dt.sqrt()).map_err(|e| SdeError::RandomGenerationError {
            reason: format!("cannot build N(0, {}) increment distribution: {}", dt, e),
        })?;
        let increments = (0..n_steps).map(|_| normal.sample(rng)).collect();
        Ok(BrownianPath::Sampled(increments))
    }

    /// Reproducible sampling from a seeded stream
    pub fn seeded(n_steps: usize, dt: f64, seed: u64) -> SdeResult<Self> {
        Self::sample(n_steps, dt, &mut rng::seed_rng_from_u64(seed))
    }

    pub fn increments(&self) -> &[f64] {
        match self {
            BrownianPath::Supplied(increments) => *increments,
            BrownianPath::Sampled(increments) => increments.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.increments().len()
    }

    pub fn is_empty(&self) -> bool {
        self.increments().is_empty()
    }

    pub fn is_supplied(&self) -> bool {
        matches!(self, BrownianPath::Supplied(_))
    }

    /// Short label for log events
    pub fn kind(&self) -> &'static str {
        match self {
            BrownianPath::Supplied(_) => "supplied",
            BrownianPath::Sampled(_) => "sampled",
        }
    }

    /// The Brownian motion itself: `W(t_0) = 0`, `W(t_{i+1}) = W(t_i) + ΔW_i`
    pub fn cumulative(&self) -> Vec<f64> {
        let mut w = Vec::with_capacity(self.len() + 1);
        let mut acc = 0.0;
        w.push(acc);
        for &dw in self.increments() {
            acc += dw;
            w.push(acc);
        }
        w
    }
}
