//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! European options are exercised only at maturity, so the payoff depends on
//! the terminal price S_T alone:
//! - **Call**: max(S_T - K, 0), the right to buy at strike K
//! - **Put**: max(K - S_T, 0), the right to sell at strike K

use crate::error::PricerError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Option exercise direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Intrinsic value at expiration. Never negative.
    #[inline]
    pub fn intrinsic(self, terminal_price: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (terminal_price - strike).max(0.0),
            OptionKind::Put => (strike - terminal_price).max(0.0),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(PricerError::InvalidConfiguration {
                field: "kind".to_string(),
                reason: format!("unknown option kind '{}', expected 'call' or 'put'", other),
            }),
        }
    }
}

/// Payoff of a European option given the path's terminal price.
///
/// The option kind is always passed in explicitly.
#[inline]
pub fn calculate_payoff(terminal_price: f64, strike: f64, kind: OptionKind) -> f64 {
    kind.intrinsic(terminal_price, strike)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        assert_eq!(calculate_payoff(120.0, 110.0, OptionKind::Call), 10.0);
        assert_eq!(calculate_payoff(100.0, 110.0, OptionKind::Call), 0.0);
        assert_eq!(calculate_payoff(110.0, 110.0, OptionKind::Call), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(calculate_payoff(100.0, 110.0, OptionKind::Put), 10.0);
        assert_eq!(calculate_payoff(120.0, 110.0, OptionKind::Put), 0.0);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" PUT ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("c".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert!("straddle".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            assert_eq!(kind.to_string().parse::<OptionKind>().unwrap(), kind);
        }
    }
}
