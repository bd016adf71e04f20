//! # euro-mc: Monte Carlo Pricing of European Options
//!
//! Estimates the fair value of a European call or put by simulating
//! geometric Brownian motion price paths, and checks the estimate against the
//! closed-form Black-Scholes price.
//!
//! ## Quick Start
//!
//! ```rust
//! use euro_mc::analytics::bs_analytic::black_scholes_price;
//! use euro_mc::mc::mc_engine::{mc_price_option_gbm, McConfig};
//!
//! // S0 = 100, K = 110, σ = 0.1, r = 0, T = 1, call
//! let config = McConfig {
//!     num_simulations: 10_000,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let result = mc_price_option_gbm(&config).expect("Valid configuration");
//! let analytic = black_scholes_price(&config.market).expect("Valid parameters");
//! println!("MC {:.4} ± {:.4}, Black-Scholes {:.4}", result.price, result.std_error(), analytic);
//! assert_eq!(result.payoffs.len(), 10_000);
//! ```
//!
//! ## Pipeline
//!
//! Each trial threads path generation ([`models::gbm`]), payoff evaluation
//! ([`mc::payoffs`]) and discounting ([`mc::discount`]); the engine
//! ([`mc::mc_engine`]) averages the discounted payoffs and keeps all of them
//! for inspection.

pub mod analytics;
pub mod error;
pub mod market;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod report;
pub mod rng;

pub use error::{PricerError, PricerResult};
pub use market::MarketParams;
pub use mc::payoffs::OptionKind;
