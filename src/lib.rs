//! # Parity-Lib: Black-Scholes Pricing with a Put-Call Parity Self-Check
//!
//! `parity-lib` prices European options under the textbook Black-Scholes-Merton
//! model (constant volatility, constant rate, no dividends) and returns the
//! price together with delta, gamma, vega, theta and rho. Every computation
//! also prices the opposite side twice, once through put-call parity and once
//! through the formula, so callers can see that the two agree.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: price and five Greeks from one d1/d2 evaluation
//! - **Parity reconciliation**: algebraic and direct estimates of the opposite side
//! - **Typed failures**: invalid or non-finite inputs are errors, never NaN prices
//! - **Text boundary**: [`RawInputs`] parses calculator form fields safely
//! - **TOML configuration**: tolerance, strictness and default inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use parity_lib::{default_configs, price_with_parity, OptionType, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
//! let report = price_with_parity(&inputs, &default_configs::standard())?;
//!
//! assert!((report.greeks.price - 10.4506).abs() < 1e-4);
//! assert_eq!(report.parity.implied_label, "Put (via parity)");
//! assert!(report.parity.discrepancy() < 1e-4);
//! # Ok::<(), parity_lib::PricingError>(())
//! ```
//!
//! ## Output Conventions
//!
//! - Theta is per calendar day (annual theta / 365)
//! - Vega is per one volatility point (per 0.01 of sigma)
//! - Rho is per one percentage point of rate
//!
//! The standard normal CDF is the Abramowitz-Stegun rational approximation,
//! accurate to about 1.5e-7. Do not compare results at tighter tolerances.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::bs::BlackScholes;
use pricing::pipeline::{run_batch, run_pricing};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, PricingResult};

// Pricing core
pub use models::{
    bs::{bs_call_price, bs_greeks, bs_put_price, d1_d2},
    normal::{norm_cdf, norm_pdf},
    parity::{parity_implied_price, reconcile, ParityCheck},
    traits::OptionPricer,
};

// Value types, boundary parsing and configuration
pub use pricing::{
    config::PricingConfig,
    input::RawInputs,
    types::{Greeks, OptionType, PricingInputs, PricingReport},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricing settings.
///
/// - [`standard()`]: 1e-4 parity tolerance, breaches are logged
/// - [`strict()`]: 1e-4 parity tolerance, breaches are errors
/// - [`relaxed()`]: 1e-2 parity tolerance, breaches are logged
pub mod default_configs {
    use crate::pricing::config::PricingConfig;

    /// Standard settings for interactive use.
    ///
    /// ```rust
    /// use parity_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert!(!config.strict_parity);
    /// ```
    pub fn standard() -> PricingConfig {
        PricingConfig::standard()
    }

    /// Parity disagreement beyond tolerance fails the computation.
    pub fn strict() -> PricingConfig {
        PricingConfig::strict()
    }

    /// Wider tolerance for callers that only want gross parity breaches reported.
    pub fn relaxed() -> PricingConfig {
        PricingConfig::relaxed()
    }
}

/// Price one option and cross-check the opposite side through put-call parity.
///
/// This is the calculator's "Calculate" action: one Black-Scholes evaluation
/// for the requested side, then a [`ParityCheck`] holding the opposite side's
/// price derived from `C - P = S - K e^(-rT)` next to a second, direct
/// Black-Scholes evaluation.
///
/// # Errors
///
/// * [`PricingError::NonFiniteInput`] if any input is NaN or infinite
/// * [`PricingError::InvalidDomain`] if S, K, T or sigma is not strictly positive
/// * [`PricingError::NonFiniteOutput`] if the evaluation overflowed
/// * [`PricingError::ParityMismatch`] if `config.strict_parity` is set and the
///   two estimates differ by more than `config.parity_tolerance`
///
/// # Example
///
/// ```rust
/// use parity_lib::{default_configs, price_with_parity, OptionType, PricingError, PricingInputs};
///
/// let put = PricingInputs { option_type: OptionType::Put, ..PricingInputs::default() };
/// let report = price_with_parity(&put, &default_configs::standard()).unwrap();
/// assert!((report.greeks.delta + 0.3632).abs() < 1e-4);
///
/// let expired = PricingInputs { time_to_expiry: 0.0, ..PricingInputs::default() };
/// assert!(matches!(
///     price_with_parity(&expired, &default_configs::standard()),
///     Err(PricingError::InvalidDomain { field: "T", .. })
/// ));
/// ```
pub fn price_with_parity(
    inputs: &PricingInputs,
    config: &PricingConfig,
) -> PricingResult<PricingReport> {
    run_pricing(&BlackScholes, inputs, config)
}

/// Price a list of inputs, returning one result per input in the same order.
///
/// Rejected inputs are reported in place and logged; they do not stop the
/// remaining rows from being priced.
pub fn price_batch(
    inputs: Vec<PricingInputs>,
    config: &PricingConfig,
) -> Vec<PricingResult<PricingReport>> {
    run_batch(&BlackScholes, inputs, config)
}
