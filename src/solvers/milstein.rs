// src/solvers/milstein.rs
//! Milstein Scheme for Higher-Order SDE Integration
//!
//! # Mathematical Framework
//!
//! For a scalar SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Milstein scheme includes an additional correction term:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n + ½ b(X_n, t_n) b'(X_n, t_n) [(ΔW_n)² - Δt]
//! ```
//!
//! Where:
//! - `b'(x,t) = ∂b/∂x` is the derivative of the diffusion coefficient
//! - `(ΔW_n)² - Δt` is the Itô correction term
//!
//! The correction is built from the same `ΔW_n` as the linear term. Drawing
//! a second, independent variate here would destroy the order-1.0 strong
//! convergence.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 1.0 (vs 0.5 for Euler-Maruyama)
//! - **Weak convergence**: Order 1.0
//! - **Cost**: Requires diffusion derivative calculation

use crate::brownian::BrownianPath;
use crate::error::{validation::validate_length, SdeResult};
use crate::models::model::{Drift, MilsteinCoefficients};
use crate::params::SimulationParameters;
use crate::trajectory::Trajectory;
use tracing::{debug, warn};

/// Milstein numerical scheme for SDE integration
pub struct Milstein;

impl Milstein {
    pub const NAME: &'static str = "Milstein";

    /// Single Milstein step with Itô correction
    ///
    /// # Algorithm
    ///
    /// 1. Evaluate drift: a(X_n, t_n)
    /// 2. Evaluate diffusion: b(X_n, t_n) and b'(X_n, t_n)
    /// 3. Apply Milstein formula with Itô correction term, reusing ΔW_n
    #[inline]
    pub fn step(
        a: &Drift<'_>,
        coefficients: &MilsteinCoefficients<'_>,
        x: &mut f64,
        t: f64,
        dt: f64,
        dw: f64,
    ) {
        let x_n = *x;
        let drift_val = a.eval(x_n, t);
        let diffusion_val = (coefficients.diffusion)(x_n, t);
        let diffusion_derivative_val = (coefficients.diffusion_derivative)(x_n, t);

        *x = x_n
            + drift_val * dt
            + diffusion_val * dw
            + 0.5 * diffusion_val * diffusion_derivative_val * (dw * dw - dt);
    }

    /// Full forward sweep over `path`
    ///
    /// # Errors
    ///
    /// Parameter and shape violations are reported before the first step.
    pub fn integrate(
        params: &SimulationParameters,
        a: Drift<'_>,
        coefficients: MilsteinCoefficients<'_>,
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
            Self::step(&a, &coefficients, &mut x, params.time_at(i), dt, dw);
            trajectory.push(x);
        }

        if let Some(index) = trajectory.first_non_finite() {
            warn!(scheme = Self::NAME, index, "trajectory contains non-finite values");
        }
        debug!(scheme = Self::NAME, terminal = x, "sweep complete");

        Ok(trajectory)
    }
}
