//! Cost segregation worksheet.
//!
//! Compares year-one depreciation under the standard straight-line schedule
//! with an accelerated schedule in which part of the building basis is
//! reclassified into shorter recovery classes.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Land value (property value × land %) |
//! | 2    | Building basis (property value - Line 1) |
//! | 3a   | 5-year property (Line 2 × 5-year %) |
//! | 3b   | 7-year property (Line 2 × 7-year %) |
//! | 3c   | 15-year property (Line 2 × 15-year %) |
//! | 4    | Remaining basis (Line 2 - Lines 3a-3c, minimum 0) |
//! | 5    | Standard year-one depreciation (Line 2 ÷ recovery period) |
//! | 6    | Accelerated year-one depreciation (3a + 3b + 3c ÷ 15 + Line 4 ÷ recovery period) |
//! | 7    | Combined tax rate (federal + state) |
//! | 8    | Year-one tax savings ((Line 6 - Line 5) × Line 7) |
//! | 9    | Total tax savings (Line 8 + remaining years of the 5, 7 and 15-year classes) |
//! | 10   | Net present value (Line 8 + (Line 9 - Line 8) discounted over the horizon) |
//!
//! 5-year and 7-year property takes 100% bonus depreciation and is fully
//! expensed in year one. 15-year property and the remaining basis are
//! depreciated straight-line. Line 9 extends the 5, 7 and 15-year classes over
//! their remaining recovery years but does not carry the remaining basis past
//! year one.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use costseg_core::{CostSegregationWorksheet, DepreciationScenario, PropertyType};
//!
//! let scenario = DepreciationScenario {
//!     property_value: dec!(1000000),
//!     land_value_percent: dec!(20),
//!     property_type: PropertyType::Commercial,
//!     federal_tax_rate: dec!(37),
//!     state_tax_rate: dec!(5),
//!     five_year_percent: dec!(15),
//!     seven_year_percent: dec!(5),
//!     fifteen_year_percent: dec!(10),
//! };
//!
//! let result = CostSegregationWorksheet::new().calculate(&scenario);
//!
//! assert_eq!(result.building_basis, dec!(800000.00));
//! assert_eq!(result.standard_year_one_depreciation, dec!(20512.82));
//! assert_eq!(result.year_one_tax_savings, dec!(66855.38));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DepreciationScenario;
use crate::calculations::assumptions::{AssumptionsError, CalculatorAssumptions};
use crate::calculations::common::{compound_factor, max, percent_of, round_half_up};

/// Recovery period of the 5-year class.
const FIVE_YEAR_LIFE: u32 = 5;
/// Recovery period of the 7-year class.
const SEVEN_YEAR_LIFE: u32 = 7;
/// Recovery period of the 15-year class.
const FIFTEEN_YEAR_LIFE: u32 = 15;

/// Values derived from a [`DepreciationScenario`]. All amounts are rounded to
/// cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedValues {
    /// Non-depreciable land portion of the property value (line 1).
    pub land_value: Decimal,

    /// Depreciable basis after removing land (line 2).
    pub building_basis: Decimal,

    /// Basis reclassified as 5-year property (line 3a).
    pub five_year_amount: Decimal,

    /// Basis reclassified as 7-year property (line 3b).
    pub seven_year_amount: Decimal,

    /// Basis reclassified as 15-year property (line 3c).
    pub fifteen_year_amount: Decimal,

    /// Basis left on the standard recovery period (line 4).
    pub remaining_basis: Decimal,

    /// Year-one depreciation without a study (line 5).
    pub standard_year_one_depreciation: Decimal,

    /// Year-one depreciation with the study applied (line 6).
    pub accelerated_year_one_depreciation: Decimal,

    /// Federal plus state rate, as a whole-number percent (line 7).
    pub combined_tax_rate: Decimal,

    /// Tax saved in year one by accelerating depreciation (line 8).
    pub year_one_tax_savings: Decimal,

    /// Savings aggregated across the short-life recovery periods (line 9).
    pub total_tax_savings: Decimal,

    /// Line 9 with the post-year-one portion discounted (line 10).
    pub net_present_value: Decimal,
}

impl DerivedValues {
    /// Extra first-year depreciation the study produces over the standard
    /// schedule.
    pub fn additional_year_one_depreciation(&self) -> Decimal {
        self.accelerated_year_one_depreciation - self.standard_year_one_depreciation
    }

    /// Total basis moved into the 5, 7 and 15-year classes.
    pub fn reclassified_basis(&self) -> Decimal {
        self.five_year_amount + self.seven_year_amount + self.fifteen_year_amount
    }
}

/// Calculator for the cost segregation worksheet.
///
/// The worksheet is stateless apart from its discounting assumptions, so a
/// single instance can be reused for any number of scenarios.
#[derive(Debug, Clone, Default)]
pub struct CostSegregationWorksheet {
    assumptions: CalculatorAssumptions,
}

impl CostSegregationWorksheet {
    /// Creates a worksheet using the default 5% / 5-year discounting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a worksheet with custom discounting assumptions.
    ///
    /// # Errors
    ///
    /// Returns [`AssumptionsError`] if the discount rate is outside `[0, 1)` or
    /// the horizon is outside 1 to
    /// [`CalculatorAssumptions::MAX_HORIZON_YEARS`] years.
    pub fn with_assumptions(assumptions: CalculatorAssumptions) -> Result<Self, AssumptionsError> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    /// Calculates every derived line for the scenario.
    ///
    /// Never fails: out-of-range bucket percentages are absorbed by clamping
    /// the remaining basis at zero.
    pub fn calculate(
        &self,
        scenario: &DepreciationScenario,
    ) -> DerivedValues {
        let period = scenario.standard_depreciation_period();

        let land_value = self.land_value(scenario.property_value, scenario.land_value_percent);
        let building_basis = self.building_basis(scenario.property_value, land_value);

        let five_year_amount = self.bucket_amount(building_basis, scenario.five_year_percent);
        let seven_year_amount = self.bucket_amount(building_basis, scenario.seven_year_percent);
        let fifteen_year_amount = self.bucket_amount(building_basis, scenario.fifteen_year_percent);

        let remaining_basis = self.remaining_basis(
            building_basis,
            five_year_amount + seven_year_amount + fifteen_year_amount,
        );

        let standard_year_one_depreciation = self.straight_line(building_basis, period);
        let accelerated_year_one_depreciation = self.accelerated_year_one(
            five_year_amount,
            seven_year_amount,
            fifteen_year_amount,
            remaining_basis,
            period,
        );

        let combined_tax_rate = self.combined_tax_rate(
            scenario.federal_tax_rate,
            scenario.state_tax_rate,
        );

        let year_one_tax_savings = self.year_one_tax_savings(
            accelerated_year_one_depreciation,
            standard_year_one_depreciation,
            combined_tax_rate,
        );

        let total_tax_savings = self.total_tax_savings(
            year_one_tax_savings,
            five_year_amount,
            seven_year_amount,
            fifteen_year_amount,
            combined_tax_rate,
        );

        let net_present_value = self.net_present_value(year_one_tax_savings, total_tax_savings);

        debug!(
            %building_basis,
            %accelerated_year_one_depreciation,
            %year_one_tax_savings,
            %net_present_value,
            "calculated cost segregation worksheet"
        );

        DerivedValues {
            land_value,
            building_basis,
            five_year_amount,
            seven_year_amount,
            fifteen_year_amount,
            remaining_basis,
            standard_year_one_depreciation,
            accelerated_year_one_depreciation,
            combined_tax_rate,
            year_one_tax_savings,
            total_tax_savings,
            net_present_value,
        }
    }

    /// Line 1.
    fn land_value(
        &self,
        property_value: Decimal,
        land_value_percent: Decimal,
    ) -> Decimal {
        round_half_up(percent_of(property_value, land_value_percent))
    }

    /// Line 2.
    fn building_basis(
        &self,
        property_value: Decimal,
        land_value: Decimal,
    ) -> Decimal {
        max(round_half_up(property_value - land_value), Decimal::ZERO)
    }

    /// Lines 3a-3c.
    fn bucket_amount(
        &self,
        building_basis: Decimal,
        percent: Decimal,
    ) -> Decimal {
        round_half_up(percent_of(building_basis, percent))
    }

    /// Line 4.
    fn remaining_basis(
        &self,
        building_basis: Decimal,
        reclassified: Decimal,
    ) -> Decimal {
        max(round_half_up(building_basis - reclassified), Decimal::ZERO)
    }

    /// One year of straight-line depreciation.
    fn straight_line(
        &self,
        basis: Decimal,
        recovery_years: Decimal,
    ) -> Decimal {
        round_half_up(basis / recovery_years)
    }

    /// Line 6.
    fn accelerated_year_one(
        &self,
        five_year_amount: Decimal,
        seven_year_amount: Decimal,
        fifteen_year_amount: Decimal,
        remaining_basis: Decimal,
        period: Decimal,
    ) -> Decimal {
        let fifteen_year_first_year =
            self.straight_line(fifteen_year_amount, Decimal::from(FIFTEEN_YEAR_LIFE));
        let remaining_first_year = self.straight_line(remaining_basis, period);

        round_half_up(
            five_year_amount + seven_year_amount + fifteen_year_first_year + remaining_first_year,
        )
    }

    /// Line 7.
    fn combined_tax_rate(
        &self,
        federal_tax_rate: Decimal,
        state_tax_rate: Decimal,
    ) -> Decimal {
        federal_tax_rate + state_tax_rate
    }

    /// Line 8.
    fn year_one_tax_savings(
        &self,
        accelerated: Decimal,
        standard: Decimal,
        combined_tax_rate: Decimal,
    ) -> Decimal {
        round_half_up(percent_of(accelerated - standard, combined_tax_rate))
    }

    /// Savings from one recovery class over the years after the first.
    fn later_year_savings(
        &self,
        amount: Decimal,
        life: u32,
        combined_tax_rate: Decimal,
    ) -> Decimal {
        let annual = amount / Decimal::from(life);
        round_half_up(percent_of(annual, combined_tax_rate) * Decimal::from(life - 1))
    }

    /// Line 9.
    fn total_tax_savings(
        &self,
        year_one_tax_savings: Decimal,
        five_year_amount: Decimal,
        seven_year_amount: Decimal,
        fifteen_year_amount: Decimal,
        combined_tax_rate: Decimal,
    ) -> Decimal {
        round_half_up(
            year_one_tax_savings
                + self.later_year_savings(five_year_amount, FIVE_YEAR_LIFE, combined_tax_rate)
                + self.later_year_savings(seven_year_amount, SEVEN_YEAR_LIFE, combined_tax_rate)
                + self.later_year_savings(
                    fifteen_year_amount,
                    FIFTEEN_YEAR_LIFE,
                    combined_tax_rate,
                ),
        )
    }

    /// Line 10.
    ///
    /// A discount factor too large to represent leaves nothing of the later
    /// savings, so the value falls back to line 8.
    fn net_present_value(
        &self,
        year_one_tax_savings: Decimal,
        total_tax_savings: Decimal,
    ) -> Decimal {
        let discounted = compound_factor(
            self.assumptions.discount_rate,
            self.assumptions.horizon_years,
        )
        .and_then(|factor| (total_tax_savings - year_one_tax_savings).checked_div(factor))
        .unwrap_or(Decimal::ZERO);
        round_half_up(year_one_tax_savings + discounted)
    }
}
