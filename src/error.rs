// src/error.rs
use thiserror::Error;

/// Error types for the euro-mc library
#[derive(Debug, Error)]
pub enum PricerError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid run configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Numerical instability in an estimate
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for euro-mc operations
pub type PricerResult<T> = Result<T, PricerError>;

/// Validation utilities
pub mod validation {
    use super::{PricerError, PricerResult};

    pub const MAX_SIMULATIONS: usize = 1_000_000_000;
    pub const MAX_STEPS: usize = 100_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricerResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricerError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricerResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(PricerError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricerResult<()> {
        if !value.is_finite() {
            Err(PricerError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of Monte Carlo trials
    pub fn validate_simulations(num_simulations: usize) -> PricerResult<()> {
        if num_simulations == 0 {
            Err(PricerError::InvalidConfiguration {
                field: "num_simulations".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if num_simulations > MAX_SIMULATIONS {
            Err(PricerError::InvalidConfiguration {
                field: "num_simulations".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> PricerResult<()> {
        if steps == 0 {
            Err(PricerError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > MAX_STEPS {
            Err(PricerError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", 0.3).is_ok());
        assert!(validate_non_negative("sigma", -1e-12).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert!(validate_simulations(1).is_ok());
        assert!(validate_simulations(0).is_err());
        assert!(validate_simulations(MAX_SIMULATIONS + 1).is_err());
        assert!(validate_steps(100).is_ok());
        assert!(validate_steps(0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = PricerError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = validate_simulations(0).unwrap_err();
        let display = error.to_string();
        assert!(display.contains("num_simulations"));
        assert!(display.contains("greater than 0"));
    }
}
