// scripts/benchmark.rs
use sde_sim::math_utils::Timer;
use sde_sim::{euler_maruyama, milstein, BrownianPath, Scheme, SimulationParameters};
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    arch: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        let rust_version = Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string());

        Self {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version,
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    n_steps: usize,
    calls: usize,
    mean_ms: f64,
    min_ms: f64,
    steps_per_sec: f64,
    terminal: f64,
}

fn a(x: f64, t: f64) -> f64 {
    (3.0 - x) * (t * t)
}

fn b(x: f64, _t: f64) -> f64 {
    x.sqrt()
}

fn db_dx(x: f64, _t: f64) -> f64 {
    0.5 / x.sqrt()
}

fn run_once(scheme: Scheme, params: &SimulationParameters, increments: Option<&[f64]>) -> f64 {
    let trajectory = match scheme {
        Scheme::EulerMaruyama => euler_maruyama(
            params.x0,
            params.t_end,
            params.n_steps,
            Some(&a),
            Some(&b),
            increments,
        ),
        Scheme::Milstein => milstein(
            params.x0,
            params.t_end,
            params.n_steps,
            Some(&a),
            Some(&b),
            Some(&db_dx),
            increments,
        ),
    };
    trajectory.expect("Valid configuration").terminal()
}

/// Per-call time over `repeats` rounds of `calls` calls each
fn time_scheme(
    scheme: Scheme,
    params: &SimulationParameters,
    increments: Option<&[f64]>,
    repeats: usize,
    calls: usize,
) -> BenchmarkResult {
    let source = if increments.is_some() { "supplied" } else { "sampled" };
    println!("Benchmarking {} ({} increments)...", scheme.name(), source);

    let mut per_call_ms = Vec::with_capacity(repeats);
    let mut terminal = f64::NAN;
    let mut timer = Timer::new();
    for _ in 0..repeats {
        timer.start();
        for _ in 0..calls {
            terminal = run_once(scheme, params, increments);
        }
        per_call_ms.push(timer.elapsed_ms() / calls as f64);
    }

    let mean_ms = per_call_ms.iter().sum::<f64>() / repeats as f64;
    let min_ms = per_call_ms.iter().cloned().fold(f64::INFINITY, f64::min);

    BenchmarkResult {
        name: format!("{} ({})", scheme.name(), source),
        n_steps: params.n_steps,
        calls,
        mean_ms,
        min_ms,
        steps_per_sec: params.n_steps as f64 / (mean_ms / 1000.0),
        terminal,
    }
}

fn run_scheme_benchmarks() -> Vec<BenchmarkResult> {
    let params = SimulationParameters::new(3.0, 10.0, 252 * 10);
    let path = BrownianPath::seeded(params.n_steps, params.dt(), 42).expect("Valid configuration");
    let repeats = 3;
    let calls = 1000;

    let mut results = Vec::new();
    for scheme in [Scheme::EulerMaruyama, Scheme::Milstein] {
        results.push(time_scheme(scheme, &params, None, repeats, calls));
        results.push(time_scheme(
            scheme,
            &params,
            Some(path.increments()),
            repeats,
            calls,
        ));
    }
    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    // Write system information as comments
    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# Arch: {}", system_info.arch).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    writeln!(file, "Benchmark,Steps,Calls,Mean_ms,Min_ms,Steps_per_sec,Terminal").unwrap();
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.6},{:.6},{:.0},{:.6}",
            result.name,
            result.n_steps,
            result.calls,
            result.mean_ms,
            result.min_ms,
            result.steps_per_sec,
            result.terminal
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("sde-sim Scheme Benchmark");
    println!("========================\n");

    println!("Gathering system information...");
    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  Arch: {}", system_info.arch);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!();

    let results = run_scheme_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<32} {:>6} {:>12} {:>12} {:>14}",
        "Method", "Steps", "Mean (ms)", "Min (ms)", "Steps/sec"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<32} {:>6} {:>12.6} {:>12.6} {:>14.0}",
            result.name, result.n_steps, result.mean_ms, result.min_ms, result.steps_per_sec
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
}
