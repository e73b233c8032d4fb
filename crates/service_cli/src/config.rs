//! CLI configuration.
//!
//! All defaults that the original interactive surface computed at startup
//! (reference spot, rate, dividend yield, display grid, parameter defaults
//! and their controllable ranges) live in one explicit [`MarketConfig`]
//! object. It is loaded once in `main` and passed down to the commands;
//! nothing here is process-wide mutable state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

fn default_rate() -> f64 {
    0.03
}

fn default_grid_span() -> f64 {
    0.25
}

fn default_grid_points() -> usize {
    20
}

fn default_maturity() -> f64 {
    0.5
}

fn default_volatility() -> f64 {
    0.05
}

/// Bounds for the strike control, expressed as fractions of the reference
/// spot (the control pane's slider spans 50%..150% of the last price).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrikeRange {
    /// Lower bound as a fraction of spot.
    pub min_frac: f64,
    /// Upper bound as a fraction of spot.
    pub max_frac: f64,
    /// Control step, in price units.
    pub step: f64,
}

impl Default for StrikeRange {
    fn default() -> Self {
        Self {
            min_frac: 0.5,
            max_frac: 1.5,
            step: 0.5,
        }
    }
}

/// Bounds for the maturity control, in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaturityRange {
    /// Maximum maturity. The minimum is zero.
    pub max: f64,
    /// Control step, in years.
    pub step: f64,
}

impl Default for MaturityRange {
    fn default() -> Self {
        Self { max: 1.0, step: 0.05 }
    }
}

/// Bounds for the volatility control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VolatilityRange {
    /// Minimum volatility.
    pub min: f64,
    /// Maximum volatility.
    pub max: f64,
    /// Control step.
    pub step: f64,
}

impl Default for VolatilityRange {
    fn default() -> Self {
        Self {
            min: 0.01,
            max: 1.0,
            step: 0.01,
        }
    }
}

/// Market defaults for pricing commands, loadable from a TOML file.
///
/// Every field has a sensible default, so a missing configuration file is
/// not an error; an unreadable or unparsable file is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Reference price of the underlying; used for the curve grid and as
    /// the default strike. Commands require it from either the flag or the
    /// config file.
    pub spot: Option<f64>,

    /// Annualised continuously compounded risk-free rate.
    pub rate: f64,

    /// Continuous dividend yield of the underlying.
    pub dividend_yield: f64,

    /// Fraction of the reference spot spanned on each side of the curve
    /// grid: 0.25 gives 75%..125% of spot.
    pub grid_span: f64,

    /// Number of points in the curve grid.
    pub grid_points: usize,

    /// Default time to maturity in years when no flag is given.
    pub default_maturity: f64,

    /// Default volatility when no flag is given.
    pub default_volatility: f64,

    /// Controllable bounds for the strike parameter, relative to spot.
    pub strike_range: StrikeRange,

    /// Controllable bounds for the maturity parameter.
    pub maturity_range: MaturityRange,

    /// Controllable bounds for the volatility parameter.
    pub volatility_range: VolatilityRange,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: None,
            rate: default_rate(),
            dividend_yield: 0.0,
            grid_span: default_grid_span(),
            grid_points: default_grid_points(),
            default_maturity: default_maturity(),
            default_volatility: default_volatility(),
            strike_range: StrikeRange::default(),
            maturity_range: MaturityRange::default(),
            volatility_range: VolatilityRange::default(),
        }
    }
}

impl MarketConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a file that exists but cannot be
    /// read or parsed is a [`CliError::Config`].
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {}", path, e)))?;
        toml::from_str(&raw).map_err(|e| CliError::Config(format!("cannot parse {}: {}", path, e)))
    }

    /// Resolves the reference spot from an explicit flag or the config.
    pub fn resolve_spot(&self, flag: Option<f64>) -> Result<f64> {
        flag.or(self.spot).ok_or_else(|| {
            CliError::InvalidArgument(
                "no underlying price: pass --spot or set `spot` in the config file".to_string(),
            )
        })
    }

    /// Checks resolved parameters against the controllable ranges.
    ///
    /// The strike bounds scale with the reference spot; maturity and
    /// volatility bounds are absolute.
    pub fn validate_params(
        &self,
        spot: f64,
        strike: f64,
        maturity: f64,
        volatility: f64,
    ) -> Result<()> {
        let strike_lo = spot * self.strike_range.min_frac;
        let strike_hi = spot * self.strike_range.max_frac;
        if strike < strike_lo || strike > strike_hi {
            return Err(CliError::InvalidArgument(format!(
                "strike {} outside the configured range {:.2}..{:.2}",
                strike, strike_lo, strike_hi
            )));
        }

        if maturity < 0.0 || maturity > self.maturity_range.max {
            return Err(CliError::InvalidArgument(format!(
                "maturity {} outside the configured range 0..{}",
                maturity, self.maturity_range.max
            )));
        }

        if volatility < self.volatility_range.min || volatility > self.volatility_range.max {
            return Err(CliError::InvalidArgument(format!(
                "volatility {} outside the configured range {}..{}",
                volatility, self.volatility_range.min, self.volatility_range.max
            )));
        }

        Ok(())
    }
}
