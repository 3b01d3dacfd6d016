pub mod bs;
pub mod normal;
pub mod parity;

/// Common traits used by the pricing models
pub mod traits {
    use crate::error::PricingResult;
    use crate::pricing::types::{Greeks, PricingInputs};

    /// A model that turns one set of inputs into a price and Greeks
    pub trait OptionPricer {
        fn price(&self, inputs: &PricingInputs) -> PricingResult<Greeks>;

        /// Name shown in the direct-route parity label
        fn name(&self) -> &str {
            "Black-Scholes"
        }
    }
}
