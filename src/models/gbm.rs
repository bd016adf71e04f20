// src/models/gbm.rs
//! Geometric Brownian Motion path generation
//!
//! Under the risk-neutral measure the underlying follows
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//! whose solution over one sub-interval of width dt is
//! ```text
//! S_{t+dt} = S_t * exp((r - σ²/2)dt + σ√dt * Z),   Z ~ N(0,1)
//! ```
//! Paths are built with this exact step, so the discretization adds no bias.

use crate::market::MarketParams;
use crate::rng;
use rand::Rng;

/// Number of sub-intervals each simulated path is partitioned into.
pub const TIME_INTERVALS: usize = 100;

pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    /// Risk-neutral dynamics: the drift is the risk-free rate.
    pub fn from_market(params: &MarketParams) -> Self {
        Gbm::new(params.spot, params.rate, params.volatility)
    }

    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }

    /// Simulate one path over `[0, t]` with `steps` sub-intervals.
    ///
    /// Consumes exactly `steps` normal draws from `rng`.
    pub fn simulate_path<R: Rng + ?Sized>(&self, t: f64, steps: usize, rng: &mut R) -> PricePath {
        let dt = t / steps as f64;

        let mut prices = Vec::with_capacity(steps + 1);
        prices.push(self.s0);

        let mut current_s = self.s0;
        for _ in 0..steps {
            current_s = self.exact_step(current_s, dt, rng::get_normal_draw(rng));
            prices.push(current_s);
        }

        PricePath { prices }
    }
}

/// One simulated trajectory, `prices[0]` being the spot price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    pub fn spot(&self) -> f64 {
        self.prices[0]
    }

    /// Price at expiration (last element).
    pub fn terminal(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }
}

/// Generate a price path of `TIME_INTERVALS + 1` points for the given market.
pub fn generate_price_path<R: Rng + ?Sized>(params: &MarketParams, rng: &mut R) -> PricePath {
    Gbm::from_market(params).simulate_path(params.expiry, TIME_INTERVALS, rng)
}
