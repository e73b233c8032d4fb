//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use pricer_analytic::{BlackScholesMerton, OptionType, PricingInput};

use crate::Result;

pub mod curve;
pub mod price;

/// Fully resolved pricing parameters, after merging flags with the
/// configuration defaults.
#[derive(Debug, Clone, Copy)]
pub struct PriceRequest {
    /// Option type (call or put)
    pub option_type: OptionType,
    /// Reference underlying price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
    /// Volatility
    pub volatility: f64,
}

impl PriceRequest {
    /// Builds the pricing model for this request.
    pub fn model(&self) -> Result<BlackScholesMerton<f64>> {
        let input = PricingInput::new(
            self.option_type,
            self.strike,
            self.maturity,
            self.rate,
            self.dividend_yield,
            self.volatility,
        )?;
        Ok(BlackScholesMerton::new(input))
    }
}
