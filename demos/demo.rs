// demos/demo.rs
use sde_sim::analytics::path_stats::PathSummary;
use sde_sim::math_utils::{max_abs_difference, Timer};
use sde_sim::output;
use sde_sim::{euler_maruyama, milstein, BrownianPath, SimulationParameters};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .iter()
        .position(|arg| arg == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let params = SimulationParameters::new(3.0, 10.0, 252 * 10);
    let a = |x: f64, t: f64| (3.0 - x) * (t * t);
    let b = |x: f64, _t: f64| x.sqrt();
    let db_dx = |x: f64, _t: f64| 0.5 / x.sqrt();

    println!("sde-sim demo: dX = (3 - X) t² dt + √X dW");
    println!("=========================================\n");
    println!(
        "x0 = {}, T = {}, n_steps = {}, dt = {:.6}, seed = {}",
        params.x0,
        params.t_end,
        params.n_steps,
        params.dt(),
        seed
    );

    let path = match BrownianPath::seeded(params.n_steps, params.dt(), seed) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Could not sample increments: {}", e);
            std::process::exit(1);
        }
    };

    let mut timer = Timer::new();
    timer.start();
    let em = euler_maruyama(
        params.x0,
        params.t_end,
        params.n_steps,
        Some(&a),
        Some(&b),
        Some(path.increments()),
    );
    let em_ms = timer.elapsed_ms();

    timer.start();
    let mil = milstein(
        params.x0,
        params.t_end,
        params.n_steps,
        Some(&a),
        Some(&b),
        Some(&db_dx),
        Some(path.increments()),
    );
    let mil_ms = timer.elapsed_ms();

    let (em, mil) = match (em, mil) {
        (Ok(em), Ok(mil)) => (em, mil),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{:<16} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Scheme", "Time (ms)", "X(T)", "Mean", "Std", "Min", "Max"
    );
    for (name, trajectory, ms) in [("Euler-Maruyama", &em, em_ms), ("Milstein", &mil, mil_ms)] {
        let summary = PathSummary::from(trajectory);
        println!(
            "{:<16} {:>10.3} {:>10.5} {:>10.5} {:>10.5} {:>10.5} {:>10.5}",
            name,
            ms,
            trajectory.terminal(),
            summary.mean,
            summary.std_dev,
            summary.min,
            summary.max
        );
    }
    println!(
        "\nMax |EM - Milstein| over the path: {:.6}",
        max_abs_difference(em.values(), mil.values())
    );

    let times = params.time_grid();
    let filename = "sde_paths.csv";
    match output::write_paths_to_csv(
        filename,
        &times,
        &[("euler_maruyama", em.values()), ("milstein", mil.values())],
    ) {
        Ok(()) => println!("Paths written to {}", filename),
        Err(e) => eprintln!("Could not write {}: {}", filename, e),
    }
}
