use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    #[default]
    Commercial,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property type '{0}' (expected 'residential' or 'commercial')")]
pub struct ParsePropertyTypeError(pub String);

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        &[PropertyType::Residential, PropertyType::Commercial]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Residential => "Residential Rental",
            Self::Commercial => "Commercial",
        }
    }

    /// Straight-line recovery period in years: 27.5 for residential rental
    /// property, 39 for nonresidential real property.
    pub fn standard_depreciation_period(&self) -> Decimal {
        match self {
            Self::Residential => Decimal::new(275, 1),
            Self::Commercial => Decimal::from(39),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ParsePropertyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            _ => Err(ParsePropertyTypeError(s.to_string())),
        }
    }
}
