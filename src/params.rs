// src/params.rs
use crate::error::{validation::*, SdeResult};

/// Fixed-step discretisation of `[0, t_end]` into `n_steps` intervals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub x0: f64,        // Initial value X(0)
    pub t_end: f64,     // Simulation horizon T
    pub n_steps: usize, // Number of intervals
}

impl SimulationParameters {
    pub fn new(x0: f64, t_end: f64, n_steps: usize) -> Self {
        SimulationParameters { x0, t_end, n_steps }
    }

    /// Validate the parameters before any step is taken. `x0` is not
    /// checked: a non-finite start propagates through the sweep.
    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("t_end", self.t_end)?;
        validate_positive("t_end", self.t_end)?;
        validate_steps(self.n_steps)?;
        Ok(())
    }

    /// Constant step size `T / n_steps`
    pub fn dt(&self) -> f64 {
        self.t_end / self.n_steps as f64
    }

    /// Grid time `t_i = i * dt`, computed by multiplication so no rounding
    /// error accumulates across the sweep.
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt()
    }

    /// All `n_steps + 1` grid times, `t_0 = 0` through `t_n`
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.dt();
        (0..=self.n_steps).map(|i| i as f64 * dt).collect()
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            x0: 0.0,
            t_end: 1.0,
            n_steps: 252,
        }
    }
}
