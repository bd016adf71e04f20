// scripts/benchmark.rs
use euro_mc::analytics::bs_analytic::black_scholes_price;
use euro_mc::math_utils::Timer;
use euro_mc::mc::mc_engine::{mc_price_option_gbm, McConfig};
use euro_mc::{MarketParams, OptionKind, PricerResult};
use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    simulations: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    value: f64,
    analytic_value: f64,
    relative_error: f64,
}

fn run_monte_carlo_benchmarks() -> PricerResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();

    let simulation_counts = [10_000, 100_000, 1_000_000];
    let markets = [
        MarketParams::default(),
        MarketParams::default().with_kind(OptionKind::Put),
    ];

    for &simulations in &simulation_counts {
        for market in &markets {
            let analytic = black_scholes_price(market)?;

            for parallel in [false, true] {
                let cfg = McConfig {
                    market: *market,
                    num_simulations: simulations,
                    seed: Some(42),
                    parallel,
                    ..Default::default()
                };

                info!(simulations, kind = %market.kind, parallel, "running benchmark");
                let timer = Timer::start();
                let result = mc_price_option_gbm(&cfg)?;
                let time_ms = timer.elapsed_ms();

                results.push(BenchmarkResult {
                    name: format!(
                        "European {} ({})",
                        market.kind,
                        if parallel { "parallel" } else { "sequential" }
                    ),
                    simulations,
                    time_ms,
                    throughput_paths_per_sec: timer.throughput(simulations),
                    value: result.price,
                    analytic_value: analytic,
                    relative_error: (result.price - analytic).abs() / analytic,
                });
            }
        }
    }

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> PricerResult<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    writer.write_record([
        "benchmark",
        "simulations",
        "time_ms",
        "throughput_paths_per_sec",
        "value",
        "analytic_value",
        "relative_error",
        "os",
        "cpu_cores",
        "rayon_threads",
        "rustflags",
    ])?;

    for result in results {
        writer.write_record(&[
            result.name.clone(),
            result.simulations.to_string(),
            format!("{:.2}", result.time_ms),
            format!("{:.0}", result.throughput_paths_per_sec),
            format!("{:.6}", result.value),
            format!("{:.6}", result.analytic_value),
            format!("{:.6}", result.relative_error),
            system_info.os.clone(),
            system_info.cpu_cores.to_string(),
            system_info.rayon_threads.to_string(),
            system_info.rustc_flags.clone(),
        ])?;
    }
    writer.flush()?;

    info!(filename, "results written");
    Ok(())
}

fn run() -> PricerResult<()> {
    let system_info = SystemInfo::gather();
    info!(?system_info, "system information");

    let results = run_monte_carlo_benchmarks()?;

    println!("{:=<96}", "");
    println!(
        "{:<30} {:>10} {:>12} {:>15} {:>10} {:>10} {:>10}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Value", "Analytic", "Rel Error"
    );
    println!("{:-<96}", "");
    for result in &results {
        println!(
            "{:<30} {:>10} {:>12.2} {:>15.0} {:>10.4} {:>10.4} {:>9.2}%",
            result.name,
            result.simulations,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result.analytic_value,
            result.relative_error * 100.0
        );
    }
    println!("{:=<96}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("benchmark failed: {e}");
            ExitCode::FAILURE
        }
    }
}
