// src/trajectory.rs
use std::ops::Index;

/// Sample path `X(t_0), X(t_1), …, X(t_n)` on the grid `t_i = i * dt`.
///
/// Non-finite values are kept as produced; use [`Trajectory::first_non_finite`]
/// to detect them after the fact.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    values: Vec<f64>,
    dt: f64,
}

impl Trajectory {
    pub(crate) fn with_capacity(x0: f64, n_steps: usize, dt: f64) -> Self {
        let mut values = Vec::with_capacity(n_steps + 1);
        values.push(x0);
        Trajectory { values, dt }
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.values.push(x);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of steps the path was built from
    pub fn n_steps(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    pub fn terminal(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Grid times matching each value
    pub fn times(&self) -> Vec<f64> {
        (0..self.values.len()).map(|i| i as f64 * self.dt).collect()
    }

    /// Index of the first NaN or infinite value, if any
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|x| !x.is_finite())
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for Trajectory {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl AsRef<[f64]> for Trajectory {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
