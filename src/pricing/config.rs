use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::types::PricingInputs;

/// Main configuration struct for pricing runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Largest |implied - direct| accepted as a consistent parity check
    #[serde(default = "default_parity_tolerance")]
    pub parity_tolerance: f64,

    /// Turn a parity breach into an error instead of a warning
    #[serde(default)]
    pub strict_parity: bool,

    /// Inputs a calculator starts with before the user edits anything
    #[serde(default)]
    pub defaults: PricingInputs,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            parity_tolerance: default_parity_tolerance(),
            strict_parity: false,
            defaults: PricingInputs::default(),
        }
    }
}

impl PricingConfig {
    /// Warn on parity breaches at the default 1e-4 tolerance
    pub fn standard() -> Self {
        Self::default()
    }

    /// Fail the computation when the two parity estimates disagree
    pub fn strict() -> Self {
        Self {
            strict_parity: true,
            ..Self::default()
        }
    }

    /// Looser tolerance; only gross disagreements between the two routes
    /// are logged
    pub fn relaxed() -> Self {
        Self {
            parity_tolerance: 1e-2,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// ```
    /// use parity_lib::PricingConfig;
    ///
    /// let config = PricingConfig::from_toml_str(
    ///     r#"
    ///     strict_parity = true
    ///
    ///     [defaults]
    ///     S = 42.0
    ///     K = 40.0
    ///     T = 0.5
    ///     r = 0.1
    ///     sigma = 0.2
    ///     optionType = "put"
    ///     "#,
    /// )
    /// .unwrap();
    /// assert!(config.strict_parity);
    /// assert_eq!(config.defaults.spot, 42.0);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse pricing config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if !(self.parity_tolerance.is_finite() && self.parity_tolerance >= 0.0) {
            anyhow::bail!(
                "parity_tolerance must be finite and non-negative, got {}",
                self.parity_tolerance
            );
        }
        self.defaults
            .validate()
            .context("Invalid default inputs")?;
        Ok(())
    }
}

fn default_parity_tolerance() -> f64 {
    1e-4
}
