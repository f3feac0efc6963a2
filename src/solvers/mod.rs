pub mod euler_maruyama;
pub mod milstein;

use crate::brownian::BrownianPath;
use crate::error::SdeResult;
use crate::models::model::{CoefficientFn, Drift, MilsteinCoefficients};
use crate::params::SimulationParameters;
use crate::trajectory::Trajectory;
use euler_maruyama::EulerMaruyama;
use milstein::Milstein;

/// Discretisation scheme selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    EulerMaruyama,
    Milstein,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::EulerMaruyama => EulerMaruyama::NAME,
            Scheme::Milstein => Milstein::NAME,
        }
    }

    /// Strong order of convergence
    pub fn order(&self) -> f64 {
        match self {
            Scheme::EulerMaruyama => 0.5,
            Scheme::Milstein => 1.0,
        }
    }

    /// Integrate with this scheme. `db_dx` is ignored by Euler-Maruyama;
    /// `b` falls back to the unit diffusion there but is mandatory for
    /// Milstein.
    pub fn integrate(
        &self,
        params: &SimulationParameters,
        a: Option<CoefficientFn<'_>>,
        b: Option<CoefficientFn<'_>>,
        db_dx: Option<CoefficientFn<'_>>,
        path: &BrownianPath<'_>,
    ) -> SdeResult<Trajectory> {
        match self {
            Scheme::EulerMaruyama => {
                EulerMaruyama::integrate(params, Drift::from(a), b.into(), path)
            }
            Scheme::Milstein => {
                let coefficients = MilsteinCoefficients::resolve(b, db_dx)?;
                Milstein::integrate(params, Drift::from(a), coefficients, path)
            }
        }
    }
}
