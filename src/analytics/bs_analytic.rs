// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! For European options the risk-neutral expectation has a closed form
//! involving the cumulative normal distribution function Φ(x).

use crate::error::PricerResult;
use crate::market::MarketParams;
use crate::math_utils::norm_cdf;
use crate::mc::payoffs::OptionKind;

/// The `d₁` and `d₂` terms shared by the call and put formulas
///
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
pub fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
///
/// Inputs are not checked; see [`black_scholes_price`].
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

/// Closed-form price for the given market.
///
/// # Errors
///
/// `InvalidParameters` when σ or T is zero (the formula divides by σ√T) or
/// any other input is out of range.
pub fn black_scholes_price(params: &MarketParams) -> PricerResult<f64> {
    params.validate_analytic()?;
    let MarketParams {
        spot,
        strike,
        volatility,
        rate,
        expiry,
        kind,
    } = *params;

    Ok(match kind {
        OptionKind::Call => bs_call_price(spot, strike, rate, volatility, expiry),
        OptionKind::Put => bs_put_price(spot, strike, rate, volatility, expiry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricerError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_scenario() {
        let call = black_scholes_price(&MarketParams::default()).unwrap();
        assert_abs_diff_eq!(call, 0.953_947_391_857, epsilon = 1e-9);
    }

    #[test]
    fn test_textbook_values() {
        assert_abs_diff_eq!(
            bs_call_price(100.0, 100.0, 0.05, 0.2, 1.0),
            10.450_583_572_185,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            bs_put_price(100.0, 100.0, 0.05, 0.2, 1.0),
            5.573_526_022_257,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_d1_d2_spread() {
        let (d1, d2) = d1_d2(100.0, 110.0, 0.0, 0.1, 1.0);
        assert_abs_diff_eq!(d1 - d2, 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_volatility_rejected() {
        let params = MarketParams {
            volatility: 0.0,
            ..MarketParams::default()
        };
        match black_scholes_price(&params) {
            Err(PricerError::InvalidParameters { parameter, .. }) => {
                assert_eq!(parameter, "volatility")
            }
            other => panic!("expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_expiry_rejected() {
        let params = MarketParams {
            expiry: 0.0,
            ..MarketParams::default()
        };
        match black_scholes_price(&params) {
            Err(PricerError::InvalidParameters { parameter, .. }) => {
                assert_eq!(parameter, "expiry")
            }
            other => panic!("expected InvalidParameters, got {other:?}"),
        }
    }
}
