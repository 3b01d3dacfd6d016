//! Text boundary for calculator-style callers.
//!
//! Form fields arrive as strings. They are parsed here, one field at a time,
//! and then run through the same validation as the numeric API, so nothing
//! non-numeric ever reaches the pricer.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::pricing::types::{OptionType, PricingInputs};

/// Unparsed form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    #[serde(alias = "S")]
    pub spot: String,
    #[serde(alias = "K")]
    pub strike: String,
    #[serde(alias = "T")]
    pub time_to_expiry: String,
    #[serde(alias = "r")]
    pub rate: String,
    #[serde(alias = "sigma")]
    pub volatility: String,
    #[serde(alias = "optionType")]
    pub option_type: String,
}

impl RawInputs {
    pub fn new(
        spot: impl Into<String>,
        strike: impl Into<String>,
        time_to_expiry: impl Into<String>,
        rate: impl Into<String>,
        volatility: impl Into<String>,
        option_type: impl Into<String>,
    ) -> Self {
        Self {
            spot: spot.into(),
            strike: strike.into(),
            time_to_expiry: time_to_expiry.into(),
            rate: rate.into(),
            volatility: volatility.into(),
            option_type: option_type.into(),
        }
    }

    /// Parse every field and validate the result.
    ///
    /// ```
    /// use parity_lib::{OptionType, RawInputs};
    ///
    /// let raw = RawInputs::new("100", "95.5", "0.5", "0.03", "0.25", "Put");
    /// let inputs = raw.parse().unwrap();
    /// assert_eq!(inputs.option_type, OptionType::Put);
    /// assert!(RawInputs::new("abc", "1", "1", "0", "0.2", "call").parse().is_err());
    /// ```
    pub fn parse(&self) -> PricingResult<PricingInputs> {
        PricingInputs::new(
            parse_field("S", &self.spot)?,
            parse_field("K", &self.strike)?,
            parse_field("T", &self.time_to_expiry)?,
            parse_field("r", &self.rate)?,
            parse_field("sigma", &self.volatility)?,
            self.option_type.parse::<OptionType>()?,
        )
    }
}

impl From<&PricingInputs> for RawInputs {
    fn from(inputs: &PricingInputs) -> Self {
        Self::new(
            inputs.spot.to_string(),
            inputs.strike.to_string(),
            inputs.time_to_expiry.to_string(),
            inputs.rate.to_string(),
            inputs.volatility.to_string(),
            inputs.option_type.to_string(),
        )
    }
}

/// Parse one numeric field.
///
/// Empty text is rejected rather than read as zero. Spellings such as "NaN"
/// or "inf" parse, and are then rejected by validation as non-finite.
pub fn parse_field(field: &'static str, text: &str) -> PricingResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| PricingError::Parse {
            field,
            input: text.to_string(),
        })
}
