// demos/error_handling_demo.rs
use sde_sim::error::SdeError;
use sde_sim::output::read_column_csv;
use sde_sim::{euler_maruyama, milstein};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("Error Handling Demo for sde-sim");
    println!("===============================\n");

    let b = |x: f64, _t: f64| x.sqrt();
    let db_dx = |x: f64, _t: f64| 0.5 / x.sqrt();

    // Test 1: Non-positive horizon
    println!("1. Testing a non-positive horizon...");
    match euler_maruyama(1.0, -1.0, 100, None, None, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Wrong number of increments
    println!("\n2. Testing an increment sequence of the wrong length...");
    let increments = vec![0.0; 101];
    match milstein(1.0, 1.0, 100, None, Some(&b), Some(&db_dx), Some(&increments)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e @ SdeError::ShapeMismatch { .. }) => println!("   ✓ Caught error: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Test 3: Milstein without the diffusion derivative
    println!("\n3. Testing Milstein without db_dx...");
    match milstein(1.0, 1.0, 100, None, Some(&b), None, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e @ SdeError::MissingArgument { .. }) => println!("   ✓ Caught error: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Test 4: A non-numeric increment table
    println!("\n4. Testing a malformed increment table...");
    let filename = std::env::temp_dir().join("sde_sim_malformed_increments.csv");
    let filename = filename.to_string_lossy().to_string();
    if std::fs::write(&filename, "0.01\n-0.02\ninvalid\n").is_ok() {
        match read_column_csv(&filename) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
        let _ = std::fs::remove_file(&filename);
    }

    // Test 5: Non-finite values are not errors
    println!("\n5. Testing √x driven negative (NaN propagates, no error)...");
    let increments = vec![-0.5; 10];
    match euler_maruyama(0.2, 1.0, 10, None, Some(&b), Some(&increments)) {
        Ok(trajectory) => match trajectory.first_non_finite() {
            Some(index) => println!(
                "   ✓ Path returned; first non-finite value at step {} of {}",
                index,
                trajectory.n_steps()
            ),
            None => println!("   Path stayed finite"),
        },
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\nDone.");
}
