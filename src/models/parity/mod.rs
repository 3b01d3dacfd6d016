//! Put-call parity reconciliation.
//!
//! Given the priced side, the opposite side's price is produced twice: once
//! algebraically from `C - P = S - K e^(-rT)` and once by running the pricer
//! again. Both values are kept so callers can compare them; the duplicate
//! evaluation is the point of the check.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PricingResult;
use crate::models::traits::OptionPricer;
use crate::pricing::types::{Greeks, OptionType, PricingInputs};

/// Two independent estimates of the opposite side's price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParityCheck {
    /// e.g. "Put (via parity)"
    pub implied_label: String,
    pub implied_value: f64,
    /// e.g. "Put (via Black-Scholes)"
    pub direct_label: String,
    pub direct_value: f64,
}

impl ParityCheck {
    /// Absolute difference between the two estimates
    pub fn discrepancy(&self) -> f64 {
        (self.implied_value - self.direct_value).abs()
    }

    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.discrepancy() <= tolerance
    }
}

impl fmt::Display for ParityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:.4}", self.implied_label, self.implied_value)?;
        writeln!(f, "{}: {:.4}", self.direct_label, self.direct_value)
    }
}

/// Opposite-side price from parity alone, without evaluating Φ again.
pub fn parity_implied_price(priced: &Greeks, inputs: &PricingInputs) -> f64 {
    let forward_gap = inputs.spot - inputs.discounted_strike();
    match inputs.option_type {
        OptionType::Call => priced.price - forward_gap,
        OptionType::Put => priced.price + forward_gap,
    }
}

/// Build both estimates of the opposite side's price.
///
/// `priced` must be the pricer's output for `inputs`; the direct route calls
/// `pricer` a second time with the side flipped.
pub fn reconcile<P: OptionPricer>(
    pricer: &P,
    priced: &Greeks,
    inputs: &PricingInputs,
) -> PricingResult<ParityCheck> {
    let opposite = inputs.option_type.opposite();
    let implied_value = parity_implied_price(priced, inputs);
    let direct_value = pricer.price(&inputs.with_option_type(opposite))?.price;

    Ok(ParityCheck {
        implied_label: format!("{} (via parity)", opposite.label()),
        implied_value,
        direct_label: format!("{} (via {})", opposite.label(), pricer.name()),
        direct_value,
    })
}
