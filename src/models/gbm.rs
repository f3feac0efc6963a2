// src/models/gbm.rs
use super::model::{Diffusion, Drift, SDEModel};
use crate::brownian::BrownianPath;
use crate::error::{validation::*, SdeResult};
use crate::params::SimulationParameters;
use crate::solvers::euler_maruyama::EulerMaruyama;
use crate::trajectory::Trajectory;

/// Geometric Brownian motion `dS = μ S dt + σ S dW`
#[derive(Clone, Copy, Debug)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Exact solution driven by the same increments:
    /// `S(t_i) = s0 * exp((μ - σ²/2) t_i + σ W(t_i))`
    pub fn exact_path(&self, params: &SimulationParameters, path: &BrownianPath<'_>) -> Vec<f64> {
        let log_drift = self.mu - 0.5 * self.sigma * self.sigma;
        path.cumulative()
            .iter()
            .enumerate()
            .map(|(i, w)| params.x0 * (log_drift * params.time_at(i) + self.sigma * w).exp())
            .collect()
    }
}

impl SDEModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }

    fn diffusion_derivative(&self, _s: f64, _t: f64) -> f64 {
        self.sigma
    }
}

/// Euler-Maruyama path of a geometric Brownian motion started at `s0`.
///
/// Increments are sampled when `increments` is `None`.
pub fn simulate_gbm(
    s0: f64,
    mu: f64,
    sigma: f64,
    t_end: f64,
    n_steps: usize,
    increments: Option<&[f64]>,
) -> SdeResult<Trajectory> {
    validate_finite("mu", mu)?;
    validate_finite("sigma", sigma)?;
    let params = SimulationParameters::new(s0, t_end, n_steps);
    params.validate()?;

    let path = BrownianPath::generate_or_validate(n_steps, params.dt(), increments)?;
    let a = |s: f64, _t: f64| mu * s;
    let b = |s: f64, _t: f64| sigma * s;
    EulerMaruyama::integrate(&params, Drift::Function(&a), Diffusion::Function(&b), &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simulate_gbm_matches_model() {
        let params = SimulationParameters::new(100.0, 1.0, 252);
        let path = BrownianPath::seeded(252, params.dt(), 3).unwrap();
        let gbm = Gbm::new(0.05, 0.2);

        let direct = simulate_gbm(100.0, 0.05, 0.2, 1.0, 252, Some(path.increments())).unwrap();
        let via_model = gbm.euler_maruyama(&params, &path).unwrap();

        assert_eq!(direct, via_model);
    }

    #[test]
    fn test_zero_volatility_is_compound_growth() {
        let params = SimulationParameters::new(100.0, 1.0, 4);
        let zeros = [0.0; 4];
        let path = BrownianPath::supplied(4, &zeros).unwrap();
        let trajectory = Gbm::new(0.1, 0.0).euler_maruyama(&params, &path).unwrap();

        assert_relative_eq!(
            trajectory.terminal(),
            100.0 * 1.025_f64.powi(4),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_exact_path_starts_at_s0() {
        let params = SimulationParameters::new(50.0, 2.0, 10);
        let path = BrownianPath::seeded(10, params.dt(), 5).unwrap();
        let exact = Gbm::new(0.03, 0.25).exact_path(&params, &path);

        assert_eq!(exact.len(), 11);
        assert_eq!(exact[0], 50.0);
        assert!(exact.iter().all(|s| *s > 0.0));
    }

    #[test]
    fn test_rejects_non_finite_sigma() {
        assert!(simulate_gbm(100.0, 0.05, f64::NAN, 1.0, 10, None).is_err());
    }
}
