//! Evenly spaced underlying-price grids.
//!
//! A pricing curve is evaluated over an ordered grid of underlying prices,
//! typically centred on a reference spot (e.g. 75%..125% of the last traded
//! price). The grid is built once by the caller and passed down; there is no
//! process-wide default grid.

use num_traits::Float;

use crate::error::PricingError;

/// Ordered, evenly spaced grid of strictly positive underlying prices.
///
/// # Examples
/// ```
/// use pricer_analytic::PriceGrid;
///
/// let grid = PriceGrid::linear(75.0_f64, 125.0, 20).unwrap();
/// assert_eq!(grid.len(), 20);
/// assert_eq!(grid.spots()[0], 75.0);
/// assert_eq!(*grid.spots().last().unwrap(), 125.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGrid<T: Float> {
    spots: Vec<T>,
}

impl<T: Float> PriceGrid<T> {
    /// Builds an inclusive evenly spaced grid from `lo` to `hi`.
    ///
    /// # Errors
    /// - [`PricingError::InvalidSpot`] if `lo <= 0`
    /// - [`PricingError::InvalidGrid`] if `hi <= lo` or fewer than two
    ///   points are requested
    pub fn linear(lo: T, hi: T, points: usize) -> Result<Self, PricingError> {
        let zero = T::zero();

        if !lo.is_finite() || lo <= zero {
            return Err(PricingError::InvalidSpot {
                spot: lo.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !hi.is_finite() || hi <= lo {
            return Err(PricingError::InvalidGrid {
                message: format!(
                    "upper bound {} must exceed lower bound {}",
                    hi.to_f64().unwrap_or(f64::NAN),
                    lo.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }

        if points < 2 {
            return Err(PricingError::InvalidGrid {
                message: format!("{} points requested, a grid needs at least 2", points),
            });
        }

        let n = T::from(points - 1).unwrap();
        let step = (hi - lo) / n;

        let spots = (0..points)
            .map(|i| {
                if i == points - 1 {
                    hi
                } else {
                    lo + step * T::from(i).unwrap()
                }
            })
            .collect();

        Ok(Self { spots })
    }

    /// Builds a grid centred on `spot`, spanning `spot·(1-span)..spot·(1+span)`.
    ///
    /// With `span = 0.25` and `points = 20` this reproduces the conventional
    /// display range of 75%..125% of the reference price.
    ///
    /// # Errors
    /// - [`PricingError::InvalidSpot`] if the resulting bounds are invalid
    ///   (e.g. non-positive spot or `span >= 1`)
    pub fn centered(spot: T, span: T, points: usize) -> Result<Self, PricingError> {
        let one = T::one();
        Self::linear(spot * (one - span), spot * (one + span), points)
    }

    /// Returns the grid points, ordered ascending.
    #[inline]
    pub fn spots(&self) -> &[T] {
        &self.spots
    }

    /// Returns the number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Returns whether the grid is empty. Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Consumes the grid, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.spots
    }
}
