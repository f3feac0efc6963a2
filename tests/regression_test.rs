//! Stored reference paths for
//! `dX = (3 - X) t² dt + √X dW`, `X(0) = 3`, `T = 10`, 2520 steps,
//! driven by a fixed seeded increment sequence.

use approx::assert_relative_eq;
use sde_sim::output::read_column_csv;
use sde_sim::{euler_maruyama, milstein, BrownianPath, Scheme, SimulationParameters};

const X0: f64 = 3.0;
const T_END: f64 = 10.0;
const N_STEPS: usize = 252 * 10;
const RTOL: f64 = 1e-7;

fn a(x: f64, t: f64) -> f64 {
    (3.0 - x) * (t * t)
}

fn b(x: f64, _t: f64) -> f64 {
    x.sqrt()
}

fn db_dx(x: f64, _t: f64) -> f64 {
    0.5 / x.sqrt()
}

fn fixture(name: &str) -> Vec<f64> {
    let path = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    read_column_csv(&path).expect("fixture should be readable")
}

fn assert_allclose(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (x, y)) in actual.iter().zip(expected).enumerate() {
        assert!(x.is_finite(), "non-finite value at index {}", i);
        assert_relative_eq!(*x, *y, max_relative = RTOL);
    }
}

#[test]
fn test_fixture_shapes() {
    assert_eq!(fixture("brownian_increments.csv").len(), N_STEPS);
    assert_eq!(fixture("euler_maruyama.csv").len(), N_STEPS + 1);
    assert_eq!(fixture("milstein.csv").len(), N_STEPS + 1);
}

#[test]
fn test_seeded_euler_maruyama() {
    let increments = fixture("brownian_increments.csv");
    let expected = fixture("euler_maruyama.csv");

    let trajectory = euler_maruyama(X0, T_END, N_STEPS, Some(&a), Some(&b), Some(&increments))
        .expect("valid inputs");

    assert_eq!(trajectory[0], X0);
    assert_allclose(trajectory.values(), &expected);
}

#[test]
fn test_seeded_milstein() {
    let increments = fixture("brownian_increments.csv");
    let expected = fixture("milstein.csv");

    let trajectory = milstein(
        X0,
        T_END,
        N_STEPS,
        Some(&a),
        Some(&b),
        Some(&db_dx),
        Some(&increments),
    )
    .expect("valid inputs");

    assert_eq!(trajectory[0], X0);
    assert_allclose(trajectory.values(), &expected);
}

#[test]
fn test_scheme_dispatch_matches_entry_points() {
    let increments = fixture("brownian_increments.csv");
    let params = SimulationParameters::new(X0, T_END, N_STEPS);
    let path = BrownianPath::supplied(N_STEPS, &increments).unwrap();

    for (scheme, name) in [
        (Scheme::EulerMaruyama, "euler_maruyama.csv"),
        (Scheme::Milstein, "milstein.csv"),
    ] {
        let trajectory = scheme
            .integrate(&params, Some(&a), Some(&b), Some(&db_dx), &path)
            .expect("valid inputs");
        assert_allclose(trajectory.values(), &fixture(name));
    }
}

#[test]
fn test_supplied_increments_are_not_mutated() {
    let increments = fixture("brownian_increments.csv");
    let before = increments.clone();

    euler_maruyama(X0, T_END, N_STEPS, Some(&a), Some(&b), Some(&increments)).unwrap();
    milstein(X0, T_END, N_STEPS, Some(&a), Some(&b), Some(&db_dx), Some(&increments)).unwrap();

    assert_eq!(increments, before);
}
