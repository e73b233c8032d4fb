//! Pricing input definitions.
//!
//! The option type is a closed enumeration dispatched via `match`, never a
//! string comparison, so an invalid type is unrepresentable. Numeric
//! parameters are validated once at construction; a [`PricingInput`] that
//! exists is well-formed.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::error::PricingError;

/// Type of European option.
///
/// # Examples
/// ```
/// use pricer_analytic::OptionType;
///
/// let parsed: OptionType = "call".parse().unwrap();
/// assert_eq!(parsed, OptionType::Call);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike: payoff max(S - K, 0)
    Call,
    /// Right to sell at the strike: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Intrinsic (exercise-now) value of the option.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        let diff = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        if diff > zero {
            diff
        } else {
            zero
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(format!("Unknown option type: {}. Expected call or put", other)),
        }
    }
}

/// Validated pricing parameters for a European option.
///
/// Immutable value object with no identity beyond its field values. The
/// underlying price is not part of the input; it is supplied per pricing
/// call so one input can be evaluated over a whole grid of underlyings.
///
/// # Validation
/// - `strike` strictly positive
/// - `maturity` non-negative (years); zero is valid and prices at intrinsic
/// - `volatility` strictly positive
/// - `rate` and `dividend_yield` unrestricted finite reals
///
/// # Examples
/// ```
/// use pricer_analytic::{OptionType, PricingInput};
///
/// let input = PricingInput::new(OptionType::Put, 100.0_f64, 0.5, 0.03, 0.01, 0.2).unwrap();
/// assert_eq!(input.strike(), 100.0);
///
/// assert!(PricingInput::new(OptionType::Put, -1.0_f64, 0.5, 0.03, 0.0, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInput<T: Float> {
    option_type: OptionType,
    strike: T,
    maturity: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
}

impl<T: Float> PricingInput<T> {
    /// Creates a validated pricing input.
    ///
    /// Non-finite values (NaN, ±∞) are rejected everywhere: they would
    /// otherwise slip through ordering comparisons and surface later as a
    /// silent NaN price.
    ///
    /// # Errors
    /// - [`PricingError::InvalidStrike`] if `strike <= 0` or non-finite
    /// - [`PricingError::InvalidMaturity`] if `maturity < 0` or non-finite
    /// - [`PricingError::InvalidVolatility`] if `volatility <= 0` or non-finite
    /// - [`PricingError::NonFinite`] if `rate` or `dividend_yield` is non-finite
    pub fn new(
        option_type: OptionType,
        strike: T,
        maturity: T,
        rate: T,
        dividend_yield: T,
        volatility: T,
    ) -> Result<Self, PricingError> {
        let zero = T::zero();

        if !strike.is_finite() || strike <= zero {
            return Err(PricingError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !maturity.is_finite() || maturity < zero {
            return Err(PricingError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility <= zero {
            return Err(PricingError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !rate.is_finite() {
            return Err(PricingError::NonFinite { context: "rate" });
        }

        if !dividend_yield.is_finite() {
            return Err(PricingError::NonFinite {
                context: "dividend yield",
            });
        }

        Ok(Self {
            option_type,
            strike,
            maturity,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike (K).
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield (q).
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_type_parse() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("butterfly".parse::<OptionType>().is_err());
    }

    #[test]
    fn option_type_display_round_trips() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert_eq!(ty.to_string().parse::<OptionType>().unwrap(), ty);
        }
    }

    #[test]
    fn intrinsic_values() {
        assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(90.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn new_valid_parameters() {
        let input = PricingInput::new(OptionType::Call, 100.0_f64, 1.0, 0.03, 0.0, 0.2).unwrap();
        assert_eq!(input.option_type(), OptionType::Call);
        assert_eq!(input.strike(), 100.0);
        assert_eq!(input.maturity(), 1.0);
        assert_eq!(input.rate(), 0.03);
        assert_eq!(input.dividend_yield(), 0.0);
        assert_eq!(input.volatility(), 0.2);
    }

    #[test]
    fn new_rejects_non_positive_strike() {
        for strike in [0.0_f64, -100.0] {
            let result = PricingInput::new(OptionType::Call, strike, 1.0, 0.03, 0.0, 0.2);
            match result.unwrap_err() {
                PricingError::InvalidStrike { strike: k } => assert_eq!(k, strike),
                other => panic!("Expected InvalidStrike, got {:?}", other),
            }
        }
    }

    #[test]
    fn new_rejects_negative_maturity() {
        let result = PricingInput::new(OptionType::Put, 100.0_f64, -0.1, 0.03, 0.0, 0.2);
        assert!(matches!(
            result.unwrap_err(),
            PricingError::InvalidMaturity { .. }
        ));
    }

    #[test]
    fn new_accepts_zero_maturity() {
        assert!(PricingInput::new(OptionType::Call, 100.0_f64, 0.0, 0.03, 0.0, 0.2).is_ok());
    }

    #[test]
    fn new_rejects_non_positive_volatility() {
        for vol in [0.0_f64, -0.2] {
            let result = PricingInput::new(OptionType::Call, 100.0_f64, 1.0, 0.03, 0.0, vol);
            assert!(matches!(
                result.unwrap_err(),
                PricingError::InvalidVolatility { .. }
            ));
        }
    }

    #[test]
    fn new_accepts_negative_rate_and_yield() {
        assert!(PricingInput::new(OptionType::Call, 100.0_f64, 1.0, -0.02, -0.01, 0.2).is_ok());
    }

    #[test]
    fn new_rejects_nan_strike() {
        let result = PricingInput::new(OptionType::Call, f64::NAN, 1.0, 0.03, 0.0, 0.2);
        assert!(matches!(
            result.unwrap_err(),
            PricingError::InvalidStrike { .. }
        ));
    }

    #[test]
    fn new_rejects_nan_volatility() {
        let result = PricingInput::new(OptionType::Call, 100.0_f64, 1.0, 0.03, 0.0, f64::NAN);
        assert!(matches!(
            result.unwrap_err(),
            PricingError::InvalidVolatility { .. }
        ));
    }

    #[test]
    fn new_rejects_non_finite_parameters() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                PricingInput::new(OptionType::Call, bad, 1.0, 0.03, 0.0, 0.2).unwrap_err(),
                PricingError::InvalidStrike { .. }
            ));
            assert!(matches!(
                PricingInput::new(OptionType::Call, 100.0, bad, 0.03, 0.0, 0.2).unwrap_err(),
                PricingError::InvalidMaturity { .. }
            ));
            assert!(matches!(
                PricingInput::new(OptionType::Call, 100.0, 1.0, 0.03, 0.0, bad).unwrap_err(),
                PricingError::InvalidVolatility { .. }
            ));
            assert!(matches!(
                PricingInput::new(OptionType::Call, 100.0, 1.0, bad, 0.0, 0.2).unwrap_err(),
                PricingError::NonFinite { context: "rate" }
            ));
            assert!(matches!(
                PricingInput::new(OptionType::Call, 100.0, 1.0, 0.03, bad, 0.2).unwrap_err(),
                PricingError::NonFinite {
                    context: "dividend yield"
                }
            ));
        }
    }
}
