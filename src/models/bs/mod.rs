// Closed-form Black-Scholes-Merton pricing for European options on a
// non-dividend-paying underlying. Price and the five first-order Greeks are
// produced together from a single d1/d2 evaluation.

use tracing::debug;

use crate::error::PricingResult;
use crate::models::normal::{norm_cdf, norm_pdf};
use crate::models::traits::OptionPricer;
use crate::pricing::types::{Greeks, OptionType, PricingInputs};

/// Calendar days used to express theta per day
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Vega and rho are quoted per one percentage point
pub const PERCENT: f64 = 100.0;

/// The textbook constant-volatility, constant-rate pricer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl OptionPricer for BlackScholes {
    fn price(&self, inputs: &PricingInputs) -> PricingResult<Greeks> {
        inputs.validate()?;
        greeks_unchecked(inputs).ensure_finite()
    }
}

/// Returns `(d1, d2)` for already-validated inputs.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Evaluate price and Greeks without validating the inputs first.
#[allow(non_snake_case)]
fn greeks_unchecked(inputs: &PricingInputs) -> Greeks {
    let PricingInputs {
        spot: S,
        strike: K,
        time_to_expiry: T,
        rate: r,
        volatility: sigma,
        option_type,
    } = *inputs;

    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    let sqrt_t = T.sqrt();
    let df = (-r * T).exp();
    let pdf_d1 = norm_pdf(d1);
    let decay = -S * pdf_d1 * sigma / (2.0 * sqrt_t);

    let (price, delta, theta, rho) = match option_type {
        OptionType::Call => {
            let nd1 = norm_cdf(d1);
            let nd2 = norm_cdf(d2);
            (
                S * nd1 - K * df * nd2,
                nd1,
                (decay - r * K * df * nd2) / DAYS_PER_YEAR,
                K * T * df * nd2 / PERCENT,
            )
        }
        OptionType::Put => {
            let n_minus_d1 = norm_cdf(-d1);
            let n_minus_d2 = norm_cdf(-d2);
            (
                K * df * n_minus_d2 - S * n_minus_d1,
                norm_cdf(d1) - 1.0,
                (decay + r * K * df * n_minus_d2) / DAYS_PER_YEAR,
                -K * T * df * n_minus_d2 / PERCENT,
            )
        }
    };

    // Side-independent
    let gamma = pdf_d1 / (S * sigma * sqrt_t);
    let vega = S * pdf_d1 * sqrt_t / PERCENT;

    debug!(
        %option_type, d1, d2, price, delta, gamma, vega, theta, rho,
        "black-scholes evaluation"
    );

    Greeks {
        price,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// Price and Greeks for one set of inputs.
///
/// Inputs are validated first: NaN or infinite fields give
/// [`PricingError::NonFiniteInput`](crate::PricingError::NonFiniteInput) and
/// non-positive S, K, T or sigma give
/// [`PricingError::InvalidDomain`](crate::PricingError::InvalidDomain).
///
/// ```
/// use parity_lib::{bs_greeks, PricingInputs};
///
/// let g = bs_greeks(&PricingInputs::default()).unwrap();
/// assert!((g.price - 10.4506).abs() < 1e-4);
/// ```
pub fn bs_greeks(inputs: &PricingInputs) -> PricingResult<Greeks> {
    BlackScholes.price(inputs)
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    let inputs = PricingInputs::new(S, K, T, r, sigma, OptionType::Call)?;
    Ok(bs_greeks(&inputs)?.price)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    let inputs = PricingInputs::new(S, K, T, r, sigma, OptionType::Put)?;
    Ok(bs_greeks(&inputs)?.price)
}
