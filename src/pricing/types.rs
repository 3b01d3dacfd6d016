use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, PricingResult};
use crate::models::parity::ParityCheck;

/// Contract side of a European option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    #[serde(alias = "Call", alias = "CALL")]
    Call,
    #[serde(alias = "Put", alias = "PUT")]
    Put,
}

impl OptionType {
    /// The other side of the same strike/expiry pair
    pub fn opposite(self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Capitalised name used in parity labels
    pub fn label(self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

/// The five market inputs plus the contract side.
///
/// Field names follow the usual long-form spelling; configuration files may
/// also use the textbook symbols (`S`, `K`, `T`, `r`, `sigma`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Spot price of the underlying (S)
    #[serde(alias = "S")]
    pub spot: f64,
    /// Strike price (K)
    #[serde(alias = "K")]
    pub strike: f64,
    /// Time to expiry in years (T)
    #[serde(alias = "T")]
    pub time_to_expiry: f64,
    /// Continuously-compounded risk-free rate (r)
    #[serde(alias = "r")]
    pub rate: f64,
    /// Annualised volatility as a decimal, e.g. 0.2 for 20% (sigma)
    #[serde(alias = "sigma")]
    pub volatility: f64,
    #[serde(alias = "optionType", default)]
    pub option_type: OptionType,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}

impl PricingInputs {
    /// Build and validate a set of inputs.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        let inputs = Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
            option_type,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check that every field is finite, then that S, K, T and sigma are
    /// strictly positive. Fields are checked in the order S, K, T, r, sigma.
    pub fn validate(&self) -> PricingResult<()> {
        let fields = [
            ("S", self.spot),
            ("K", self.strike),
            ("T", self.time_to_expiry),
            ("r", self.rate),
            ("sigma", self.volatility),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::NonFiniteInput { field, value });
            }
        }

        // r may take any finite sign
        for (field, value) in fields.into_iter().filter(|(f, _)| *f != "r") {
            if value <= 0.0 {
                return Err(PricingError::InvalidDomain { field, value });
            }
        }

        Ok(())
    }

    /// Same market inputs with the contract side flipped
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Present value of the strike, `K * e^(-rT)`
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.time_to_expiry).exp()
    }
}

/// Price and first-order sensitivities for one set of inputs.
///
/// Theta is per calendar day, vega per one volatility point and rho per one
/// percentage point of rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl Greeks {
    /// Outputs in display order, keyed by lowercase name
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("price", self.price),
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("vega", self.vega),
            ("theta", self.theta),
            ("rho", self.rho),
        ]
    }

    /// Reject the record if any field overflowed
    pub(crate) fn ensure_finite(self) -> PricingResult<Self> {
        match self.entries().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(PricingError::NonFiniteOutput { field }),
            None => Ok(self),
        }
    }
}

impl fmt::Display for Greeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.entries() {
            writeln!(f, "{:<6} {:>12.4}", name.to_uppercase(), value)?;
        }
        Ok(())
    }
}

/// Complete output of one calculator action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub inputs: PricingInputs,
    pub greeks: Greeks,
    pub parity: ParityCheck,
}

impl PricingReport {
    /// Serialise the whole report as a TOML document
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl fmt::Display for PricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results ({})", self.inputs.option_type)?;
        write!(f, "{}", self.greeks)?;
        writeln!(f)?;
        writeln!(f, "Put-Call Parity Verification")?;
        write!(f, "{}", self.parity)
    }
}
