//! # sde-sim: Sample Paths of Scalar Stochastic Differential Equations
//!
//! Simulates one path of
//! ```text
//! dX(t) = a(X(t), t) dt + b(X(t), t) dW(t),    X(0) = x0,  t ∈ [0, T]
//! ```
//! on the uniform grid `t_i = i T / n_steps` with the Euler-Maruyama or the
//! Milstein scheme.
//!
//! ## Key Features
//!
//! - **Two schemes**: Euler-Maruyama (strong order 0.5) and Milstein (strong order 1.0)
//! - **Reproducible**: supply the Brownian increments and the output is bit-identical
//! - **Any coefficients**: drift and diffusion are plain closures `(x, t) -> f64`
//! - **Eager validation**: every precondition is checked before the first step
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_sim::{euler_maruyama, milstein};
//!
//! let a = |x: f64, t: f64| (3.0 - x) * t * t;
//! let b = |x: f64, _t: f64| x.sqrt();
//! let db_dx = |x: f64, _t: f64| 0.5 / x.sqrt();
//!
//! let em = euler_maruyama(3.0, 10.0, 2520, Some(&a), Some(&b), None).expect("valid inputs");
//! let mil = milstein(3.0, 10.0, 2520, Some(&a), Some(&b), Some(&db_dx), None)
//!     .expect("valid inputs");
//!
//! assert_eq!(em.len(), 2521);
//! assert_eq!(mil[0], 3.0);
//! ```
//!
//! ## Failure Model
//!
//! Bad parameters, a wrongly sized increment sequence and a Milstein call
//! without `b` or `db_dx` are rejected up front with an [`SdeError`]. Once the
//! sweep starts nothing is checked: NaN or infinite coefficient values are
//! carried through the rest of the trajectory.

// Module declarations
pub mod analytics;
pub mod brownian;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod params;
pub mod rng;
pub mod solvers;
pub mod trajectory;

// Re-export commonly used types for convenience
pub use brownian::BrownianPath;
pub use error::{SdeError, SdeResult};
pub use models::model::{CoefficientFn, Diffusion, Drift, MilsteinCoefficients, SDEModel};
pub use params::SimulationParameters;
pub use solvers::Scheme;
pub use trajectory::Trajectory;

use solvers::euler_maruyama::EulerMaruyama;
use solvers::milstein::Milstein;

/// Euler-Maruyama path of `dX = a dt + b dW`.
///
/// `a` defaults to zero and `b` to one, so with both omitted the result is
/// Brownian motion started at `x0`. `increments`, when given, must hold
/// exactly `n_steps` values and is used verbatim; otherwise `N(0, T/n_steps)`
/// increments are sampled from a fresh entropy-seeded stream.
pub fn euler_maruyama(
    x0: f64,
    t_end: f64,
    n_steps: usize,
    a: Option<CoefficientFn<'_>>,
    b: Option<CoefficientFn<'_>>,
    increments: Option<&[f64]>,
) -> SdeResult<Trajectory> {
    simulate(Scheme::EulerMaruyama, x0, t_end, n_steps, a, b, None, increments)
}

/// Milstein path of `dX = a dt + b dW`.
///
/// `a` defaults to zero. `b` and `db_dx` are required and their absence is
/// reported as [`SdeError::MissingArgument`].
pub fn milstein(
    x0: f64,
    t_end: f64,
    n_steps: usize,
    a: Option<CoefficientFn<'_>>,
    b: Option<CoefficientFn<'_>>,
    db_dx: Option<CoefficientFn<'_>>,
    increments: Option<&[f64]>,
) -> SdeResult<Trajectory> {
    simulate(Scheme::Milstein, x0, t_end, n_steps, a, b, db_dx, increments)
}

#[allow(clippy::too_many_arguments)]
fn simulate(
    scheme: Scheme,
    x0: f64,
    t_end: f64,
    n_steps: usize,
    a: Option<CoefficientFn<'_>>,
    b: Option<CoefficientFn<'_>>,
    db_dx: Option<CoefficientFn<'_>>,
    increments: Option<&[f64]>,
) -> SdeResult<Trajectory> {
    let params = SimulationParameters::new(x0, t_end, n_steps);
    params.validate()?;
    match scheme {
        Scheme::EulerMaruyama => {
            let path = BrownianPath::generate_or_validate(n_steps, params.dt(), increments)?;
            EulerMaruyama::integrate(&params, Drift::from(a), b.into(), &path)
        }
        Scheme::Milstein => {
            // Fail on missing coefficients before spending entropy on a path
            let coefficients = MilsteinCoefficients::resolve(b, db_dx)?;
            let path = BrownianPath::generate_or_validate(n_steps, params.dt(), increments)?;
            Milstein::integrate(&params, Drift::from(a), coefficients, &path)
        }
    }
}
