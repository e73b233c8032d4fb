//! # Pricer Analytic
//!
//! Closed-form pricing for European options under Black-Scholes-Merton
//! dynamics with a continuous dividend yield.
//!
//! This crate provides:
//! - Validated pricing inputs (`OptionType`, `PricingInput`)
//! - Standard normal distribution functions (`norm_cdf`, `norm_pdf`)
//! - The Black-Scholes-Merton closed form, scalar and element-wise over a
//!   vector of underlying prices
//! - Evenly spaced underlying-price grids for curve evaluation
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f32` and `f64`
//! - **Validation at construction**: invalid parameters are rejected with a
//!   typed [`PricingError`], never silently defaulted
//! - **Pure functions**: no shared state, identical inputs give identical
//!   outputs, safe to call concurrently without coordination
//!
//! ## Example
//!
//! ```
//! use pricer_analytic::{BlackScholesMerton, OptionType, PricingInput};
//!
//! let input = PricingInput::new(OptionType::Call, 100.0_f64, 1.0, 0.03, 0.0, 0.2).unwrap();
//! let model = BlackScholesMerton::new(input);
//!
//! let price = model.price(100.0).unwrap();
//! assert!((price - 9.41).abs() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod grid;
pub mod inputs;

pub use black_scholes::BlackScholesMerton;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::PricingError;
pub use grid::PriceGrid;
pub use inputs::{OptionType, PricingInput};
