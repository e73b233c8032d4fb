//! Standard normal distribution functions.
//!
//! Provides the cumulative distribution function (`norm_cdf`) and the
//! probability density function (`norm_pdf`) of the standard normal
//! distribution, generic over `T: Float` so both `f32` and `f64` work.
//!
//! The CDF is evaluated through the complementary error function using the
//! Abramowitz & Stegun 7.1.26 rational approximation, which bounds the
//! absolute error by 1.5e-7 for all inputs.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// polynomial, evaluated with Horner's method.
///
/// Maximum absolute error 1.5e-7 over the whole real line.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as Φ(x) = erfc(-x/√2) / 2.
///
/// # Accuracy
/// Absolute error at most 1.5e-7 for all finite x.
///
/// # Examples
/// ```
/// use pricer_analytic::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// Computes φ(x) = exp(-x²/2) / √(2π).
///
/// # Examples
/// ```
/// use pricer_analytic::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cdf_at_zero_is_half() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn cdf_reference_values() {
        // Standard normal table values
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-7);
    }

    #[test]
    fn cdf_symmetry() {
        // Φ(x) + Φ(-x) = 1
        for x in [-3.0, -1.5, -0.25, 0.5, 1.0, 2.5] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn cdf_monotone_and_bounded() {
        let mut prev = norm_cdf(-8.0_f64);
        for i in -79..=80 {
            let x = i as f64 * 0.1;
            let cdf = norm_cdf(x);
            assert!(cdf >= 0.0 && cdf <= 1.0, "CDF out of [0, 1] at x = {}", x);
            assert!(cdf >= prev, "CDF not monotone at x = {}", x);
            prev = cdf;
        }
    }

    #[test]
    fn cdf_tails() {
        assert!(norm_cdf(8.0_f64) > 0.999999);
        assert!(norm_cdf(-8.0_f64) < 0.000001);
    }

    #[test]
    fn pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-10);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-7);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-7);
    }

    #[test]
    fn pdf_symmetric() {
        for x in [0.5, 1.0, 2.0, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-12);
        }
    }

    #[test]
    fn cdf_derivative_matches_pdf() {
        // Central difference of the CDF should approximate the PDF
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let fd = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(fd, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
        assert!((norm_pdf(0.0_f32) - 0.3989423).abs() < 1e-5);
    }
}
