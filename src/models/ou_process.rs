// src/models/ou_process.rs
use super::model::SDEModel;

/// Ornstein-Uhlenbeck process `dX = θ(μ - X) dt + σ dW`
#[derive(Clone, Copy, Debug)]
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    /// E[X(t) | X(0) = x0]
    pub fn mean_at(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }
}

impl SDEModel for OuProcess {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }

    fn diffusion_derivative(&self, _x: f64, _t: f64) -> f64 {
        0.0 // Derivative of a constant diffusion w.r.t. x is 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brownian::BrownianPath;
    use crate::params::SimulationParameters;

    #[test]
    fn test_mean_at() {
        let ou = OuProcess::new(0.5, 0.1, 0.2);
        assert_eq!(ou.mean_at(100.0, 0.0), 100.0);
        assert!((ou.mean_at(100.0, 1e3) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_schemes_coincide() {
        let ou = OuProcess::new(2.0, 1.0, 0.3);
        let params = SimulationParameters::new(0.0, 5.0, 500);
        let path = BrownianPath::seeded(500, params.dt(), 21).unwrap();

        let em = ou.euler_maruyama(&params, &path).unwrap();
        let mil = ou.milstein(&params, &path).unwrap();

        assert_eq!(em.values(), mil.values());
    }
}
