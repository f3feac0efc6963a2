// src/models/model.rs
use crate::brownian::BrownianPath;
use crate::error::{SdeError, SdeResult};
use crate::params::SimulationParameters;
use crate::solvers::{euler_maruyama::EulerMaruyama, milstein::Milstein};
use crate::trajectory::Trajectory;

/// Any real-valued coefficient `f(x, t)`
pub type CoefficientFn<'a> = &'a dyn Fn(f64, f64) -> f64;

/// Drift `a(x, t)`; `Zero` stands in for an omitted drift
#[derive(Clone, Copy)]
pub enum Drift<'a> {
    Zero,
    Function(CoefficientFn<'a>),
}

impl<'a> Drift<'a> {
    #[inline]
    pub fn eval(&self, x: f64, t: f64) -> f64 {
        match self {
            Drift::Zero => 0.0,
            Drift::Function(a) => a(x, t),
        }
    }
}

impl<'a> From<Option<CoefficientFn<'a>>> for Drift<'a> {
    fn from(a: Option<CoefficientFn<'a>>) -> Self {
        a.map_or(Drift::Zero, Drift::Function)
    }
}

/// Diffusion `b(x, t)`; `Unit` stands in for an omitted diffusion,
/// which makes the degenerate case plain Brownian motion.
#[derive(Clone, Copy)]
pub enum Diffusion<'a> {
    Unit,
    Function(CoefficientFn<'a>),
}

impl<'a> Diffusion<'a> {
    #[inline]
    pub fn eval(&self, x: f64, t: f64) -> f64 {
        match self {
            Diffusion::Unit => 1.0,
            Diffusion::Function(b) => b(x, t),
        }
    }
}

impl<'a> From<Option<CoefficientFn<'a>>> for Diffusion<'a> {
    fn from(b: Option<CoefficientFn<'a>>) -> Self {
        b.map_or(Diffusion::Unit, Diffusion::Function)
    }
}

/// Diffusion and its spatial derivative, both present.
///
/// Unlike the drift there is no neutral default for either: the Milstein
/// correction `½ b ∂b/∂x [(ΔW)² - Δt]` has no meaning without them.
#[derive(Clone, Copy)]
pub struct MilsteinCoefficients<'a> {
    pub diffusion: CoefficientFn<'a>,
    pub diffusion_derivative: CoefficientFn<'a>,
}

impl<'a> MilsteinCoefficients<'a> {
    pub fn new(diffusion: CoefficientFn<'a>, diffusion_derivative: CoefficientFn<'a>) -> Self {
        MilsteinCoefficients {
            diffusion,
            diffusion_derivative,
        }
    }

    /// # Errors
    ///
    /// `MissingArgument` naming the first absent coefficient
    pub fn resolve(
        diffusion: Option<CoefficientFn<'a>>,
        diffusion_derivative: Option<CoefficientFn<'a>>,
    ) -> SdeResult<Self> {
        let missing = |argument: &str| SdeError::MissingArgument {
            scheme: Milstein::NAME.to_string(),
            argument: argument.to_string(),
        };
        let diffusion = diffusion.ok_or_else(|| missing("b"))?;
        let diffusion_derivative = diffusion_derivative.ok_or_else(|| missing("db_dx"))?;
        Ok(Self::new(diffusion, diffusion_derivative))
    }
}

/// A named scalar process with closed-form coefficients.
pub trait SDEModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;
    fn diffusion_derivative(&self, x: f64, t: f64) -> f64;

    fn euler_maruyama(
        &self,
        params: &SimulationParameters,
        path: &BrownianPath<'_>,
    ) -> SdeResult<Trajectory> {
        let a = |x: f64, t: f64| self.drift(x, t);
        let b = |x: f64, t: f64| self.diffusion(x, t);
        EulerMaruyama::integrate(params, Drift::Function(&a), Diffusion::Function(&b), path)
    }

    fn milstein(
        &self,
        params: &SimulationParameters,
        path: &BrownianPath<'_>,
    ) -> SdeResult<Trajectory> {
        let a = |x: f64, t: f64| self.drift(x, t);
        let b = |x: f64, t: f64| self.diffusion(x, t);
        let db_dx = |x: f64, t: f64| self.diffusion_derivative(x, t);
        Milstein::integrate(
            params,
            Drift::Function(&a),
            MilsteinCoefficients::new(&b, &db_dx),
            path,
        )
    }
}
