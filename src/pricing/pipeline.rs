use tracing::{info, warn};

use crate::error::{PricingError, PricingResult};
use crate::models::parity::reconcile;
use crate::models::traits::OptionPricer;
use crate::pricing::config::PricingConfig;
use crate::pricing::types::{PricingInputs, PricingReport};

/// Validate, price the requested side, then reconcile the opposite side.
///
/// The pricer is invoked twice: once for `inputs.option_type` and once, inside
/// the parity check, for the opposite side. A parity discrepancy above
/// `config.parity_tolerance` is logged, or returned as
/// [`PricingError::ParityMismatch`] when `config.strict_parity` is set.
pub fn run_pricing<P: OptionPricer>(
    pricer: &P,
    inputs: &PricingInputs,
    config: &PricingConfig,
) -> PricingResult<PricingReport> {
    inputs.validate()?;

    let greeks = pricer.price(inputs)?;
    let parity = reconcile(pricer, &greeks, inputs)?;

    let discrepancy = parity.discrepancy();
    if !parity.is_consistent(config.parity_tolerance) {
        if config.strict_parity {
            return Err(PricingError::ParityMismatch {
                implied: parity.implied_value,
                direct: parity.direct_value,
                tolerance: config.parity_tolerance,
            });
        }
        warn!(
            implied = parity.implied_value,
            direct = parity.direct_value,
            discrepancy,
            tolerance = config.parity_tolerance,
            "put-call parity estimates disagree"
        );
    }

    info!(
        option_type = %inputs.option_type,
        price = greeks.price,
        discrepancy,
        "priced {} with parity check",
        inputs.option_type
    );

    Ok(PricingReport {
        inputs: *inputs,
        greeks,
        parity,
    })
}

/// Price every input independently; one failure never aborts the rest.
pub fn run_batch<P: OptionPricer>(
    pricer: &P,
    inputs: Vec<PricingInputs>,
    config: &PricingConfig,
) -> Vec<PricingResult<PricingReport>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let result = run_pricing(pricer, &row, config);
            if let Err(ref e) = result {
                warn!(index, error = %e, input_error = e.is_input_error(), "batch row failed");
            }
            result
        })
        .collect()
}
