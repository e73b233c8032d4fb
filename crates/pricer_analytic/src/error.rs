//! Error types for pricing operations.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant carries the offending value so callers can report the
/// precise parameter that failed validation.
///
/// # Examples
/// ```
/// use pricer_analytic::PricingError;
///
/// let err = PricingError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Underlying price must be strictly positive.
    #[error("Invalid underlying price: S = {spot}")]
    InvalidSpot {
        /// The invalid underlying price value
        spot: f64,
    },

    /// Strike must be strictly positive.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Time to maturity must be non-negative.
    #[error("Invalid time to maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value, in years
        maturity: f64,
    },

    /// Volatility must be strictly positive.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A price grid was given a degenerate shape.
    #[error("Invalid grid: {message}")]
    InvalidGrid {
        /// Description of the degenerate shape
        message: String,
    },

    /// A computation produced a non-finite intermediate value.
    #[error("Non-finite value in {context}")]
    NonFinite {
        /// Description of where the non-finite value appeared
        context: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_offending_value() {
        let err = PricingError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid underlying price: S = -100");

        let err = PricingError::InvalidVolatility { volatility: 0.0 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = 0");

        let err = PricingError::InvalidMaturity { maturity: -0.5 };
        assert_eq!(format!("{}", err), "Invalid time to maturity: T = -0.5");

        let err = PricingError::InvalidGrid {
            message: "1 points requested, a grid needs at least 2".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid grid: 1 points requested, a grid needs at least 2"
        );
    }

    #[test]
    fn error_trait_implementation() {
        let err = PricingError::InvalidStrike { strike: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn clone_and_equality() {
        let err1 = PricingError::NonFinite { context: "ln(S/K)" };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
