// src/report.rs
//! Side-by-side comparison of the simulated and closed-form prices.

use crate::analytics::bs_analytic::black_scholes_price;
use crate::error::PricerResult;
use crate::market::MarketParams;
use crate::mc::mc_engine::{mc_price_option_gbm, McConfig, SimulationResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PricingComparison {
    pub market: MarketParams,
    pub num_simulations: usize,
    pub seed: Option<u64>,
    pub mc_price: f64,
    pub std_error: f64,
    pub analytic_price: f64,
    /// `mc_price - analytic_price`
    pub difference: f64,
    pub generated_at: DateTime<Utc>,
}

impl PricingComparison {
    /// Run the closed-form pricer and the simulation for `cfg`.
    ///
    /// The closed-form inputs are checked first, so a zero-volatility market
    /// fails before any path is simulated. The simulation result is handed
    /// back as well for inspection of the payoff distribution.
    pub fn compute(cfg: &McConfig) -> PricerResult<(PricingComparison, SimulationResult)> {
        let analytic_price = black_scholes_price(&cfg.market)?;
        let simulation = mc_price_option_gbm(cfg)?;
        Ok((Self::from_parts(&cfg.market, &simulation, analytic_price), simulation))
    }

    pub fn from_parts(
        market: &MarketParams,
        simulation: &SimulationResult,
        analytic_price: f64,
    ) -> PricingComparison {
        PricingComparison {
            market: *market,
            num_simulations: simulation.num_simulations(),
            seed: simulation.seed,
            mc_price: simulation.price,
            std_error: simulation.std_error(),
            analytic_price,
            difference: simulation.price - analytic_price,
            generated_at: Utc::now(),
        }
    }

    /// |difference| / analytic price
    pub fn relative_error(&self) -> f64 {
        (self.difference / self.analytic_price).abs()
    }

    /// Whether the estimate lies within `k` standard errors of the closed form.
    pub fn within_std_errors(&self, k: f64) -> bool {
        self.difference.abs() <= k * self.std_error
    }

    pub fn to_json(&self) -> PricerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricerError;

    #[test]
    fn test_difference_and_errors() {
        let simulation = SimulationResult {
            price: 1.1,
            payoffs: vec![1.0, 1.2],
            seed: Some(4),
        };
        let cmp = PricingComparison::from_parts(&MarketParams::default(), &simulation, 1.0);

        assert!((cmp.difference - 0.1).abs() < 1e-12);
        assert!((cmp.relative_error() - 0.1).abs() < 1e-12);
        assert_eq!(cmp.num_simulations, 2);
        assert_eq!(cmp.seed, Some(4));
        assert!(cmp.within_std_errors(2.0));
        assert!(!cmp.within_std_errors(0.5));
    }

    #[test]
    fn test_json_contains_fields() {
        let cfg = McConfig {
            num_simulations: 200,
            seed: Some(8),
            ..Default::default()
        };
        let (cmp, simulation) = PricingComparison::compute(&cfg).unwrap();
        assert_eq!(simulation.payoffs.len(), 200);

        let json = cmp.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["market"]["kind"], "call");
        assert_eq!(value["num_simulations"], 200);
        assert_eq!(value["seed"], 8);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_zero_volatility_fails_before_simulating() {
        let cfg = McConfig {
            market: MarketParams {
                volatility: 0.0,
                ..MarketParams::default()
            },
            num_simulations: 10,
            ..Default::default()
        };
        assert!(matches!(
            PricingComparison::compute(&cfg),
            Err(PricerError::InvalidParameters { .. })
        ));
    }
}
