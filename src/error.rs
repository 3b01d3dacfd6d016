//! Error types for the pricing core.
//!
//! Every failure is detected before (or, for overflow, immediately after) the
//! closed-form evaluation, so a caller either receives a complete result or
//! one of these variants. NaN is never handed back as a price.

use thiserror::Error;

/// Failures raised by validation, boundary parsing and pricing.
///
/// # Examples
///
/// ```
/// use parity_lib::PricingError;
///
/// let err = PricingError::InvalidDomain { field: "T", value: 0.0 };
/// assert!(err.to_string().contains("T"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// S, K, T or sigma is zero or negative.
    #[error("Invalid domain: {field} must be strictly positive, got {value}")]
    InvalidDomain {
        /// Input symbol (`S`, `K`, `T`, `sigma`)
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// An input is NaN or infinite.
    #[error("Non-finite input: {field} = {value}")]
    NonFiniteInput {
        /// Input symbol (`S`, `K`, `T`, `r`, `sigma`)
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Boundary text could not be read as a number.
    #[error("Cannot parse {field} from {input:?}")]
    Parse {
        /// Input symbol the text was meant for
        field: &'static str,
        /// Raw text as received
        input: String,
    },

    /// Option selector text is neither `call` nor `put`.
    #[error("Invalid option type: {0:?} (expected \"call\" or \"put\")")]
    InvalidOptionType(String),

    /// In-domain inputs still overflowed during evaluation.
    #[error("Non-finite output: {field}")]
    NonFiniteOutput {
        /// Name of the output that overflowed
        field: &'static str,
    },

    /// The two parity estimates disagree by more than the configured tolerance.
    #[error("Parity mismatch: implied {implied} vs direct {direct} (tolerance {tolerance:e})")]
    ParityMismatch {
        implied: f64,
        direct: f64,
        tolerance: f64,
    },
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    /// True for the two validation variants that reject raw numeric inputs.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDomain { .. } | Self::NonFiniteInput { .. }
        )
    }
}
