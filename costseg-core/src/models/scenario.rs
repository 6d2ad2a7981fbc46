use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PropertyType;

/// Inputs to a cost segregation study.
///
/// Percentages are whole-number percents (`20` means 20%). The three bucket
/// percentages are shares of the building basis and are not required to sum
/// to 100; whatever is left over depreciates over the standard period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationScenario {
    pub property_value: Decimal,
    pub land_value_percent: Decimal,
    pub property_type: PropertyType,
    pub federal_tax_rate: Decimal,
    pub state_tax_rate: Decimal,
    pub five_year_percent: Decimal,
    pub seven_year_percent: Decimal,
    pub fifteen_year_percent: Decimal,
}

impl DepreciationScenario {
    /// Largest purchase price accepted from user input or a CSV batch.
    ///
    /// Keeps every worksheet line well inside the range of [`Decimal`].
    pub const MAX_PROPERTY_VALUE: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

    /// Creates a scenario for the given purchase price and property type with
    /// the remaining fields at their defaults.
    pub fn new(
        property_value: Decimal,
        property_type: PropertyType,
    ) -> Self {
        Self {
            property_value,
            property_type,
            ..Default::default()
        }
    }

    pub fn standard_depreciation_period(&self) -> Decimal {
        self.property_type.standard_depreciation_period()
    }
}

impl Default for DepreciationScenario {
    fn default() -> Self {
        Self {
            property_value: Decimal::from(1_000_000),
            land_value_percent: Decimal::from(20),
            property_type: PropertyType::Commercial,
            federal_tax_rate: Decimal::from(37),
            state_tax_rate: Decimal::from(5),
            five_year_percent: Decimal::from(15),
            seven_year_percent: Decimal::from(5),
            fifteen_year_percent: Decimal::from(10),
        }
    }
}
