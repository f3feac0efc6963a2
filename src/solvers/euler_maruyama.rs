// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `ΔW_n ~ N(0, Δt)` are the increments of the supplied Brownian path
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: Conditionally stable (depends on drift/diffusion)
//!
//! No safeguards are applied: NaN or infinite coefficient values flow into
//! every later point of the trajectory.

use crate::brownian::BrownianPath;
use crate::error::{validation::validate_length, SdeResult};
use crate::models::model::{Diffusion, Drift};
use crate::params::SimulationParameters;
use crate::trajectory::Trajectory;
use tracing::{debug, warn};

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    pub const NAME: &'static str = "Euler-Maruyama";

    /// Single Euler-Maruyama step
    ///
    /// # Parameters
    /// - `a`, `b`: drift and diffusion
    /// - `x`: Current state (modified in-place)
    /// - `t`: Current grid time
    /// - `dt`: Time step size
    /// - `dw`: Brownian increment for this step
    #[inline]
    pub fn step(a: &Drift<'_>, b: &Diffusion<'_>, x: &mut f64, t: f64, dt: f64, dw: f64) {
        let x_n = *x;
        *x = x_n + a.eval(x_n, t) * dt + b.eval(x_n, t) * dw;
    }

    /// Full forward sweep over `path`
    ///
    /// # Errors
    ///
    /// Parameter and shape violations are reported before the first step;
    /// no partial trajectory is ever returned.
    pub fn integrate(
        params: &SimulationParameters,
        a: Drift<'_>,
        b: Diffusion<'_>,
        path: &BrownianPath<'_>,
    ) -> SdeResult<Trajectory> {
        params.validate()?;
        validate_length("increments", params.n_steps, path.len())?;

        let dt = params.dt();
        debug!(
            scheme = Self::NAME,
            n_steps = params.n_steps,
            dt,
            increments = path.kind(),
            "starting sweep"
        );

        let mut trajectory = Trajectory::with_capacity(params.x0, params.n_steps, dt);
        let mut x = params.x0;
        for (i, &dw) in path.increments().iter().enumerate() {
            Self::step(&a, &b, &mut x, params.time_at(i), dt, dw);
            trajectory.push(x);
        }

        if let Some(index) = trajectory.first_non_finite() {
            warn!(scheme = Self::NAME, index, "trajectory contains non-finite values");
        }
        debug!(scheme = Self::NAME, terminal = x, "sweep complete");

        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdeError;

    #[test]
    fn test_single_step() {
        let a = |x: f64, t: f64| x + t;
        let b = |x: f64, _t: f64| 2.0 * x;
        let mut x = 1.0;

        EulerMaruyama::step(
            &Drift::Function(&a),
            &Diffusion::Function(&b),
            &mut x,
            0.5,
            0.1,
            0.2,
        );

        // 1 + (1 + 0.5) * 0.1 + 2 * 0.2
        assert!((x - 1.55).abs() < 1e-15);
    }

    #[test]
    fn test_brownian_motion_is_cumulative_sum() {
        let increments = [0.5, -0.25, 1.0, 0.125];
        let params = SimulationParameters::new(2.0, 1.0, 4);
        let path = BrownianPath::supplied(4, &increments).unwrap();

        let trajectory =
            EulerMaruyama::integrate(&params, Drift::Zero, Diffusion::Unit, &path).unwrap();

        assert_eq!(trajectory.values(), &[2.0, 2.5, 2.25, 3.25, 3.375]);
    }

    #[test]
    fn test_time_dependent_drift_uses_grid_time() {
        // Pure drift a(x, t) = t integrates to the left Riemann sum of t
        let a = |_x: f64, t: f64| t;
        let params = SimulationParameters::new(0.0, 1.0, 4);
        let zeros = [0.0; 4];
        let path = BrownianPath::supplied(4, &zeros).unwrap();

        let trajectory =
            EulerMaruyama::integrate(&params, Drift::Function(&a), Diffusion::Unit, &path)
                .unwrap();

        // 0.25 * (0 + 0.25 + 0.5 + 0.75)
        assert!((trajectory.terminal() - 0.375).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_mismatched_path() {
        let params = SimulationParameters::new(0.0, 1.0, 4);
        let increments = [0.0; 3];
        let path = BrownianPath::Supplied(&increments);

        let err =
            EulerMaruyama::integrate(&params, Drift::Zero, Diffusion::Unit, &path).unwrap_err();
        assert!(matches!(err, SdeError::ShapeMismatch { expected: 4, actual: 3, .. }));
    }
}
