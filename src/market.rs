// src/market.rs
//! Market inputs shared by the simulation and the closed-form pricer.

use crate::error::{validation::*, PricerResult};
use crate::mc::payoffs::OptionKind;
use serde::Serialize;

/// Immutable market and contract parameters for one pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketParams {
    /// Spot price of the underlying (S₀)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Annualized volatility (σ)
    pub volatility: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Time to expiration in years (T)
    pub expiry: f64,
    pub kind: OptionKind,
}

impl MarketParams {
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            volatility,
            rate,
            expiry,
            kind,
        }
    }

    /// Same parameters with the other option kind.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Validate inputs for path simulation.
    ///
    /// Zero volatility is accepted here: every path is then deterministic.
    pub fn validate(&self) -> PricerResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("rate", self.rate)?;
        validate_positive("expiry", self.expiry)?;
        Ok(())
    }

    /// Validate inputs for the closed-form formula, which divides by σ√T.
    pub fn validate_analytic(&self) -> PricerResult<()> {
        self.validate()?;
        validate_positive("volatility", self.volatility)?;
        Ok(())
    }
}

impl Default for MarketParams {
    fn default() -> Self {
        MarketParams {
            spot: 100.0,
            strike: 110.0,
            volatility: 0.1,
            rate: 0.0,
            expiry: 1.0,
            kind: OptionKind::Call,
        }
    }
}
