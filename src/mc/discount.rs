//! Present-valuing of payoffs realized at maturity.
//!
//! ```text
//! PV = payoff * e^(-rT)
//! ```
//! The full time to expiration is always used since European options pay
//! only at maturity.

/// Continuous-compounding discount factor e^(-rT)
#[inline]
pub fn discount_factor(rate: f64, expiry: f64) -> f64 {
    (-rate * expiry).exp()
}

#[inline]
pub fn discount_payoff(payoff: f64, rate: f64, expiry: f64) -> f64 {
    payoff * discount_factor(rate, expiry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_identity() {
        for &t in &[0.25, 1.0, 7.5] {
            assert_eq!(discount_payoff(12.34, 0.0, t), 12.34);
        }
    }

    #[test]
    fn test_discounting_positive_rate() {
        assert_relative_eq!(
            discount_payoff(100.0, 0.05, 1.0),
            95.122_942_450_071_4,
            max_relative = 1e-12
        );
        assert!(discount_factor(0.05, 2.0) < discount_factor(0.05, 1.0));
    }

    #[test]
    fn test_negative_rate_grows_value() {
        assert!(discount_payoff(10.0, -0.01, 1.0) > 10.0);
    }
}
