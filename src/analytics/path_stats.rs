// src/analytics/path_stats.rs
//! Post-hoc diagnostics for a simulated path.
//!
//! The integrators never check the values they produce. A blown-up path
//! (for instance `b(x) = √x` driven below zero) shows up here as a non-zero
//! `non_finite` count, and the moments are taken over the finite values only.

use crate::trajectory::Trajectory;
use statrs::statistics::Statistics;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub non_finite: usize,
}

impl PathSummary {
    pub fn from_values(values: &[f64]) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        let non_finite = values.len() - finite.len();

        PathSummary {
            mean: finite.iter().mean(),
            std_dev: finite.iter().std_dev(),
            min: Statistics::min(finite.iter()),
            max: Statistics::max(finite.iter()),
            non_finite,
        }
    }
}

impl From<&Trajectory> for PathSummary {
    fn from(trajectory: &Trajectory) -> Self {
        Self::from_values(trajectory.values())
    }
}
