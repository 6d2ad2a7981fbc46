//! Optional TOML configuration.
//!
//! ```toml
//! discount_rate = "0.05"
//! horizon_years = 5
//!
//! [charts]
//! width = 480
//! height = 320
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use std::path::Path;

use costseg_core::CalculatorAssumptions;
use costseg_core::calculations::AssumptionsError;
use costseg_charts::ChartBounds;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Assumptions(#[from] AssumptionsError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub discount_rate: Decimal,
    pub horizon_years: u32,
    pub charts: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        let assumptions = CalculatorAssumptions::default();
        Self {
            discount_rate: assumptions.discount_rate,
            horizon_years: assumptions.horizon_years,
            charts: ChartConfig::default(),
        }
    }
}

impl Config {
    /// Parses and validates configuration text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.assumptions().validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn assumptions(&self) -> CalculatorAssumptions {
        CalculatorAssumptions {
            discount_rate: self.discount_rate,
            horizon_years: self.horizon_years,
        }
    }

    pub fn chart_bounds(&self) -> ChartBounds {
        ChartBounds::new(self.charts.width, self.charts.height)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.assumptions(), CalculatorAssumptions::default());
    }

    #[test]
    fn config_reads_string_and_float_rates() {
        let from_string = Config::from_toml(r#"discount_rate = "0.07""#).unwrap();
        let from_float = Config::from_toml("discount_rate = 0.07").unwrap();

        assert_eq!(from_string.discount_rate, dec!(0.07));
        assert_eq!(from_float.discount_rate, dec!(0.07));
    }

    #[test]
    fn config_reads_chart_section() {
        let config = Config::from_toml("[charts]\nwidth = 640\n").unwrap();

        assert_eq!(config.charts.width, 640.0);
        assert_eq!(config.charts.height, 320.0);
    }

    #[test]
    fn config_rejects_invalid_rate() {
        let err = Config::from_toml("discount_rate = 2").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Assumptions(AssumptionsError::InvalidDiscountRate(_))
        ));
    }

    #[test]
    fn config_rejects_horizon_above_maximum() {
        let err = Config::from_toml("discount_rate = 0.5\nhorizon_years = 200\n").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Assumptions(AssumptionsError::InvalidHorizon(200))
        ));
    }

    #[test]
    fn config_rejects_unknown_keys() {
        let err = Config::from_toml("discount = 0.05").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
