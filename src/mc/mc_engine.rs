// src/mc/mc_engine.rs
use crate::error::{validation::*, PricerError, PricerResult};
use crate::market::MarketParams;
use crate::math_utils::Timer;
use crate::mc::discount::discount_payoff;
use crate::mc::payoffs::calculate_payoff;
use crate::models::gbm::{Gbm, TIME_INTERVALS};
use crate::rng::RngFactory;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct McConfig {
    pub market: MarketParams,
    pub num_simulations: usize,
    pub steps: usize,
    /// Base seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl McConfig {
    /// Validate the Monte Carlo configuration
    pub fn validate(&self) -> PricerResult<()> {
        validate_simulations(self.num_simulations)?;
        validate_steps(self.steps)?;
        self.market.validate()
    }
}

impl Default for McConfig {
    fn default() -> Self {
        McConfig {
            market: MarketParams::default(),
            num_simulations: 10_000,
            steps: TIME_INTERVALS,
            seed: None,
            parallel: true,
        }
    }
}

/// Outcome of a Monte Carlo run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// Mean of the discounted payoffs
    pub price: f64,
    /// Discounted payoff of every trial, indexed by trial number
    pub payoffs: Vec<f64>,
    /// Base seed the run can be replayed with, when one was used
    pub seed: Option<u64>,
}

impl SimulationResult {
    fn from_payoffs(payoffs: Vec<f64>, seed: Option<u64>) -> PricerResult<Self> {
        let price = payoffs.iter().sum::<f64>() / payoffs.len() as f64;

        if !price.is_finite() {
            return Err(PricerError::NumericalInstability {
                method: "Monte Carlo".to_string(),
                reason: format!("Price estimate is not finite: {}", price),
            });
        }

        Ok(SimulationResult {
            price,
            payoffs,
            seed,
        })
    }

    pub fn num_simulations(&self) -> usize {
        self.payoffs.len()
    }

    /// Unbiased sample variance of the discounted payoffs
    pub fn sample_variance(&self) -> f64 {
        let n = self.payoffs.len();
        if n < 2 {
            return 0.0;
        }
        let sum_sq = self
            .payoffs
            .iter()
            .map(|p| (p - self.price).powi(2))
            .sum::<f64>();
        sum_sq / (n as f64 - 1.0)
    }

    /// Standard error of the price estimate
    pub fn std_error(&self) -> f64 {
        (self.sample_variance() / self.payoffs.len() as f64).sqrt()
    }

    /// Symmetric interval `price ± z * std_error`
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.std_error();
        (self.price - half_width, self.price + half_width)
    }
}

/// One trial: simulate a path, take its payoff at maturity, discount it.
pub fn run_trial<R: Rng + ?Sized>(market: &MarketParams, steps: usize, rng: &mut R) -> f64 {
    let path = Gbm::from_market(market).simulate_path(market.expiry, steps, rng);
    let payoff = calculate_payoff(path.terminal(), market.strike, market.kind);
    discount_payoff(payoff, market.rate, market.expiry)
}

/// Sequential Monte Carlo pricing with a caller-supplied generator.
///
/// All trials draw from `rng` in turn, each path using `TIME_INTERVALS` steps.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    market: &MarketParams,
    num_simulations: usize,
    rng: &mut R,
) -> PricerResult<SimulationResult> {
    validate_simulations(num_simulations)?;
    market.validate()?;

    let mut payoffs = Vec::with_capacity(num_simulations);
    for _ in 0..num_simulations {
        payoffs.push(run_trial(market, TIME_INTERVALS, rng));
    }

    SimulationResult::from_payoffs(payoffs, None)
}

/// Monte Carlo pricing of a European option under Geometric Brownian Motion
///
/// # Math Framework
///
/// Estimates the risk-neutral expectation
/// ```text
/// V = e^(-rT) * E^Q[payoff(S_T)]
/// ```
/// by the arithmetic mean of `num_simulations` independently simulated,
/// discounted payoffs.
///
/// # Reproducibility
///
/// Trial `i` uses its own generator derived from `(seed, i)`, so the payoff
/// collection (and its order) is the same in sequential and parallel mode and
/// for any thread count.
///
/// # Errors
///
/// Returns `PricerError` for:
/// - Invalid configuration parameters
/// - A non-finite price estimate
pub fn mc_price_option_gbm(cfg: &McConfig) -> PricerResult<SimulationResult> {
    cfg.validate()?;

    if cfg.market.volatility == 0.0 {
        warn!("volatility is zero, every simulated path is deterministic");
    }

    let factory = match cfg.seed {
        Some(seed) => RngFactory::new(seed),
        None => RngFactory::from_entropy(),
    };
    let n = cfg.num_simulations;
    let steps = cfg.steps;
    let market = cfg.market;

    debug!(
        simulations = n,
        steps,
        seed = factory.base_seed(),
        parallel = cfg.parallel,
        kind = %market.kind,
        "starting Monte Carlo run"
    );

    let timer = Timer::start();
    let mut payoffs = Vec::with_capacity(n);
    if cfg.parallel {
        (0..n)
            .into_par_iter()
            .map(|i| {
                let mut rng = factory.create_std_rng(i as u64);
                run_trial(&market, steps, &mut rng)
            })
            .collect_into_vec(&mut payoffs);
    } else {
        payoffs.extend((0..n).map(|i| {
            let mut rng = factory.create_std_rng(i as u64);
            run_trial(&market, steps, &mut rng)
        }));
    }

    let result = SimulationResult::from_payoffs(payoffs, Some(factory.base_seed()))?;

    info!(
        price = result.price,
        std_error = result.std_error(),
        elapsed_ms = timer.elapsed_ms(),
        "Monte Carlo run complete"
    );

    Ok(result)
}
