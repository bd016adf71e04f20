//! euro-mc: price a European option by Monte Carlo and compare it with
//! Black-Scholes.
//!
//! ```text
//! euro-mc --spot 100 --strike 110 --volatility 0.1 --rate 0 --expiry 1 \
//!         --simulations 10000 --kind call --seed 42
//! ```

use clap::Parser;
use euro_mc::mc::mc_engine::McConfig;
use euro_mc::models::gbm::TIME_INTERVALS;
use euro_mc::output::{self, Histogram, DEFAULT_BINS};
use euro_mc::report::PricingComparison;
use euro_mc::{MarketParams, OptionKind, PricerError, PricerResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Monte Carlo vs Black-Scholes pricing of a European option
#[derive(Parser, Debug)]
#[command(name = "euro-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spot price of the underlying
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 110.0)]
    strike: f64,

    /// Annualized volatility
    #[arg(long, default_value_t = 0.1)]
    volatility: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rate: f64,

    /// Time to expiration in years
    #[arg(long, default_value_t = 1.0)]
    expiry: f64,

    /// Number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = 10_000)]
    simulations: usize,

    /// Option kind (call or put)
    #[arg(short, long, default_value_t = OptionKind::Call)]
    kind: OptionKind,

    /// Sub-intervals per simulated path
    #[arg(long, default_value_t = TIME_INTERVALS)]
    steps: usize,

    /// Base seed; drawn from OS entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run all trials on the calling thread
    #[arg(long)]
    sequential: bool,

    /// Worker threads (defaults to the number of logical CPUs)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Histogram bins; 0 disables the histogram
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Write every discounted payoff to this CSV file
    #[arg(long)]
    payoffs_csv: Option<PathBuf>,

    /// Print the comparison as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> McConfig {
        McConfig {
            market: MarketParams::new(
                self.spot,
                self.strike,
                self.volatility,
                self.rate,
                self.expiry,
                self.kind,
            ),
            num_simulations: self.simulations,
            steps: self.steps,
            seed: self.seed,
            parallel: !self.sequential,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn configure_threads(threads: Option<usize>) -> PricerResult<()> {
    let threads = threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| PricerError::InvalidConfiguration {
            field: "threads".to_string(),
            reason: e.to_string(),
        })?;
    info!(threads, "rayon pool configured");
    Ok(())
}

fn run(cli: &Cli) -> PricerResult<()> {
    if !cli.sequential {
        configure_threads(cli.threads)?;
    }

    let cfg = cli.to_config();
    let (comparison, simulation) = PricingComparison::compute(&cfg)?;

    if let Some(path) = &cli.payoffs_csv {
        output::write_payoffs_to_csv(path, &simulation.payoffs)?;
        info!(path = %path.display(), "payoffs written");
    }

    if cli.json {
        println!("{}", comparison.to_json()?);
        return Ok(());
    }

    println!("Estimated option price: {}", comparison.mc_price);
    println!("Black-Scholes option price: {}", comparison.analytic_price);
    println!("Difference: {}", comparison.difference);
    println!(
        "Standard error: {} ({:.2}% relative error)",
        comparison.std_error,
        comparison.relative_error() * 100.0
    );
    if let Some(seed) = comparison.seed {
        println!("Seed: {}", seed);
    }

    if cli.bins > 0 {
        let histogram = Histogram::new(&simulation.payoffs, cli.bins)?;
        println!();
        print!("{}", histogram.render(50));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("pricing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
