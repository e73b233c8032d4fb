//! Black-Scholes-Merton pricing model for European options.
//!
//! Closed form with a continuous dividend yield:
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use crate::distributions::norm_cdf;
use crate::error::PricingError;
use crate::inputs::{OptionType, PricingInput};

/// Expiries at or below this threshold price at intrinsic value.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes-Merton model for European option pricing.
///
/// Wraps a validated [`PricingInput`] and prices it against one underlying
/// price or element-wise against a slice of underlying prices. The model is
/// stateless beyond its parameters: identical inputs always produce
/// identical outputs, and there is no shared mutable state, so values may be
/// priced concurrently without coordination.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_analytic::{BlackScholesMerton, OptionType, PricingInput};
///
/// let input = PricingInput::new(OptionType::Call, 100.0_f64, 1.0, 0.05, 0.0, 0.2).unwrap();
/// let model = BlackScholesMerton::new(input);
///
/// // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → C ≈ 10.4506
/// let price = model.price(100.0).unwrap();
/// assert!((price - 10.4506).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesMerton<T: Float> {
    input: PricingInput<T>,
}

impl<T: Float> BlackScholesMerton<T> {
    /// Creates a model from a validated pricing input.
    pub fn new(input: PricingInput<T>) -> Self {
        Self { input }
    }

    /// Returns the pricing input.
    #[inline]
    pub fn input(&self) -> &PricingInput<T> {
        &self.input
    }

    /// Computes the d1 term for the given underlying price.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// At expiry the term degenerates; a large positive or negative value is
    /// returned depending on moneyness so the CDF saturates to 0 or 1.
    #[inline]
    pub fn d1(&self, spot: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(EXPIRY_EPSILON).unwrap();

        let strike = self.input.strike();
        let maturity = self.input.maturity();
        let sigma = self.input.volatility();

        if maturity <= epsilon {
            let large = T::from(100.0).unwrap();
            return if spot > strike {
                large
            } else if spot < strike {
                -large
            } else {
                zero
            };
        }

        let vol_sqrt_t = sigma * maturity.sqrt();
        let log_moneyness = (spot / strike).ln();
        let drift =
            (self.input.rate() - self.input.dividend_yield() + half * sigma * sigma) * maturity;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term for the given underlying price.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, spot: T) -> T {
        let epsilon = T::from(EXPIRY_EPSILON).unwrap();
        let maturity = self.input.maturity();

        if maturity <= epsilon {
            return self.d1(spot);
        }

        self.d1(spot) - self.input.volatility() * maturity.sqrt()
    }

    /// Computes the theoretical option price for one underlying price.
    ///
    /// At `maturity == 0` the intrinsic value is returned (the T → 0⁺ limit
    /// of the closed form) instead of the degenerate formula.
    ///
    /// # Errors
    /// - [`PricingError::InvalidSpot`] if `spot <= 0` or non-finite
    /// - [`PricingError::NonFinite`] if ln(S/K) is not finite
    pub fn price(&self, spot: T) -> Result<T, PricingError> {
        let zero = T::zero();
        let epsilon = T::from(EXPIRY_EPSILON).unwrap();

        if !spot.is_finite() || spot <= zero {
            return Err(PricingError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        let strike = self.input.strike();
        let maturity = self.input.maturity();

        if maturity <= epsilon {
            return Ok(self.input.option_type().intrinsic(spot, strike));
        }

        if !(spot / strike).ln().is_finite() {
            return Err(PricingError::NonFinite { context: "ln(S/K)" });
        }

        let d1 = self.d1(spot);
        let d2 = self.d2(spot);

        let carry = (-self.input.dividend_yield() * maturity).exp();
        let discount = (-self.input.rate() * maturity).exp();

        let price = match self.input.option_type() {
            // C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
            OptionType::Call => spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2),
            // P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
            OptionType::Put => strike * discount * norm_cdf(-d2) - spot * carry * norm_cdf(-d1),
        };

        Ok(price)
    }

    /// Prices each underlying in the slice, preserving order.
    ///
    /// Equivalent to calling [`price`](Self::price) on every element; there
    /// is no cross-element coupling. The first invalid element aborts the
    /// whole call.
    #[cfg(not(feature = "parallel"))]
    pub fn price_many(&self, spots: &[T]) -> Result<Vec<T>, PricingError> {
        spots.iter().map(|&spot| self.price(spot)).collect()
    }

    /// Prices each underlying in the slice, preserving order.
    ///
    /// Element-wise evaluation runs on the rayon thread pool; results are
    /// identical to the sequential version, in the same order. The first
    /// invalid element aborts the whole call.
    #[cfg(feature = "parallel")]
    pub fn price_many(&self, spots: &[T]) -> Result<Vec<T>, PricingError>
    where
        T: Send + Sync,
    {
        use rayon::prelude::*;

        spots.par_iter().map(|&spot| self.price(spot)).collect()
    }
}
