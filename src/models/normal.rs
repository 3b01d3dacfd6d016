//! Standard normal density and cumulative distribution.
//!
//! The CDF uses the Abramowitz-Stegun 7.1.26 rational approximation of the
//! error function. Its maximum absolute error is about 1.5e-7, so callers must
//! not rely on more precision than that.

use std::f64::consts::{PI, SQRT_2};

const P: f64 = 0.3275911;
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;

/// Standard normal density φ(x)
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution Φ(x)
///
/// Symmetric by construction: `norm_cdf(x) + norm_cdf(-x) == 1` up to
/// rounding, and `norm_cdf(0.0)` is exactly 0.5.
pub fn norm_cdf(x: f64) -> f64 {
    // The polynomial coefficients sum to 1 - 1e-9, so the origin is pinned.
    if x == 0.0 {
        return 0.5;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    0.5 * (1.0 + sign * erf_abs(x.abs() / SQRT_2))
}

/// erf(x) for x >= 0
fn erf_abs(x: f64) -> f64 {
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    1.0 - poly * (-x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_at_origin_is_exactly_half() {
        assert_eq!(norm_cdf(0.0), 0.5);
        assert_eq!(norm_cdf(-0.0), 0.5);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[1e-8, 0.1, 0.5, 1.0, 1.96, 3.0, 6.5, 12.0] {
            let sum = norm_cdf(x) + norm_cdf(-x);
            assert!((sum - 1.0).abs() < 1e-15, "x={} sum={}", x, sum);
        }
    }

    #[test]
    fn test_cdf_known_quantiles() {
        // Φ(1.96) ≈ 0.9750021, Φ(-1) ≈ 0.1586553
        assert!((norm_cdf(1.96) - 0.9750021).abs() < 2e-7);
        assert!((norm_cdf(-1.0) - 0.1586553).abs() < 2e-7);
    }

    #[test]
    fn test_cdf_stays_in_unit_interval() {
        for &x in &[-1e300, -40.0, -8.0, 8.0, 40.0, 1e300] {
            let p = norm_cdf(x);
            assert!((0.0..=1.0).contains(&p), "x={} p={}", x, p);
        }
        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
    }

    #[test]
    fn test_pdf_peak_and_decay() {
        assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert_eq!(norm_pdf(1.5), norm_pdf(-1.5));
        assert!(norm_pdf(50.0) >= 0.0);
        assert!(norm_pdf(50.0) < 1e-300);
    }
}
