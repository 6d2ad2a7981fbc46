//! Editable scenario state.
//!
//! Holds the scenario being edited together with the text shown in each
//! field, so a rejected edit leaves both untouched.

use rust_decimal::Decimal;
use tracing::debug;

use super::sanitize::{ValidationError, format_currency, sanitize_currency, sanitize_percent};
use crate::{CostSegregationWorksheet, DepreciationScenario, DerivedValues, PropertyType};

/// Percentage fields of a [`DepreciationScenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PercentField {
    LandValue,
    FederalTaxRate,
    StateTaxRate,
    FiveYear,
    SevenYear,
    FifteenYear,
}

impl PercentField {
    pub fn all() -> &'static [PercentField] {
        &[
            PercentField::LandValue,
            PercentField::FederalTaxRate,
            PercentField::StateTaxRate,
            PercentField::FiveYear,
            PercentField::SevenYear,
            PercentField::FifteenYear,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PercentField::LandValue => "Land Value",
            PercentField::FederalTaxRate => "Federal Tax Rate",
            PercentField::StateTaxRate => "State Tax Rate",
            PercentField::FiveYear => "5-Year Property",
            PercentField::SevenYear => "7-Year Property",
            PercentField::FifteenYear => "15-Year Property",
        }
    }

    fn index(&self) -> usize {
        match self {
            PercentField::LandValue => 0,
            PercentField::FederalTaxRate => 1,
            PercentField::StateTaxRate => 2,
            PercentField::FiveYear => 3,
            PercentField::SevenYear => 4,
            PercentField::FifteenYear => 5,
        }
    }

    pub fn value(
        &self,
        scenario: &DepreciationScenario,
    ) -> Decimal {
        match self {
            PercentField::LandValue => scenario.land_value_percent,
            PercentField::FederalTaxRate => scenario.federal_tax_rate,
            PercentField::StateTaxRate => scenario.state_tax_rate,
            PercentField::FiveYear => scenario.five_year_percent,
            PercentField::SevenYear => scenario.seven_year_percent,
            PercentField::FifteenYear => scenario.fifteen_year_percent,
        }
    }

    fn slot<'a>(
        &self,
        scenario: &'a mut DepreciationScenario,
    ) -> &'a mut Decimal {
        match self {
            PercentField::LandValue => &mut scenario.land_value_percent,
            PercentField::FederalTaxRate => &mut scenario.federal_tax_rate,
            PercentField::StateTaxRate => &mut scenario.state_tax_rate,
            PercentField::FiveYear => &mut scenario.five_year_percent,
            PercentField::SevenYear => &mut scenario.seven_year_percent,
            PercentField::FifteenYear => &mut scenario.fifteen_year_percent,
        }
    }
}

/// Form state for one cost segregation scenario.
#[derive(Debug, Clone)]
pub struct ScenarioForm {
    scenario: DepreciationScenario,
    property_value_text: String,
    percent_texts: [String; 6],
    worksheet: CostSegregationWorksheet,
}

impl ScenarioForm {
    pub fn new(scenario: DepreciationScenario) -> Self {
        Self::with_worksheet(scenario, CostSegregationWorksheet::new())
    }

    /// Creates a form that computes results with the given worksheet.
    pub fn with_worksheet(
        scenario: DepreciationScenario,
        worksheet: CostSegregationWorksheet,
    ) -> Self {
        let property_value_text = format_currency(scenario.property_value);
        let percent_texts = std::array::from_fn(|i| {
            PercentField::all()[i]
                .value(&scenario)
                .normalize()
                .to_string()
        });

        Self {
            scenario,
            property_value_text,
            percent_texts,
            worksheet,
        }
    }

    pub fn scenario(&self) -> &DepreciationScenario {
        &self.scenario
    }

    pub fn property_value_text(&self) -> &str {
        &self.property_value_text
    }

    pub fn percent_text(
        &self,
        field: PercentField,
    ) -> &str {
        &self.percent_texts[field.index()]
    }

    /// Applies a typed property value, reporting why it was rejected.
    ///
    /// Input with no digits clears the field and stores zero. On error neither
    /// the stored value nor the text changes.
    pub fn try_set_property_value(
        &mut self,
        raw: &str,
    ) -> Result<&str, ValidationError> {
        match sanitize_currency(raw)? {
            Some(value) => {
                self.scenario.property_value = value;
                self.property_value_text = format_currency(value);
            }
            None => {
                self.scenario.property_value = Decimal::ZERO;
                self.property_value_text.clear();
            }
        }
        Ok(&self.property_value_text)
    }

    /// Applies a typed property value and returns the formatted text.
    ///
    /// Amounts above [`DepreciationScenario::MAX_PROPERTY_VALUE`] are ignored
    /// and the previous value is kept.
    pub fn set_property_value(
        &mut self,
        raw: &str,
    ) -> &str {
        if let Some(error) = self.try_set_property_value(raw).err() {
            debug!(input = raw, %error, "property value rejected");
        }
        &self.property_value_text
    }

    /// Applies a typed percentage, reporting why it was rejected.
    ///
    /// On error neither the stored value nor the text changes.
    pub fn try_set_percent(
        &mut self,
        field: PercentField,
        raw: &str,
    ) -> Result<&str, ValidationError> {
        let (text, value) = sanitize_percent(raw)?;
        *field.slot(&mut self.scenario) = value;
        self.percent_texts[field.index()] = text;
        Ok(&self.percent_texts[field.index()])
    }

    /// Applies a typed percentage, silently keeping the previous value when
    /// the input is rejected. Returns the text now shown in the field.
    pub fn set_percent(
        &mut self,
        field: PercentField,
        raw: &str,
    ) -> &str {
        if let Some(error) = self.try_set_percent(field, raw).err() {
            debug!(field = field.label(), input = raw, %error, "percent input rejected");
        }
        &self.percent_texts[field.index()]
    }

    pub fn set_property_type(
        &mut self,
        property_type: PropertyType,
    ) {
        self.scenario.property_type = property_type;
    }

    /// Recomputes every derived value from the current inputs.
    pub fn results(&self) -> DerivedValues {
        self.worksheet.calculate(&self.scenario)
    }

    /// Restores the default scenario, keeping the worksheet assumptions.
    pub fn reset(&mut self) {
        *self = Self::with_worksheet(DepreciationScenario::default(), self.worksheet.clone());
    }
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self::new(DepreciationScenario::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_formats_initial_values() {
        let form = ScenarioForm::default();

        assert_eq!(form.property_value_text(), "1,000,000");
        assert_eq!(form.percent_text(PercentField::LandValue), "20");
        assert_eq!(form.percent_text(PercentField::FifteenYear), "10");
    }

    #[test]
    fn set_property_value_formats_with_separators() {
        let mut form = ScenarioForm::default();

        let text = form.set_property_value("2500000.4").to_string();

        assert_eq!(text, "2,500,000");
        assert_eq!(form.scenario().property_value, dec!(2500000));
    }

    #[test]
    fn set_property_value_degrades_to_empty() {
        let mut form = ScenarioForm::default();

        let text = form.set_property_value("abc").to_string();

        assert_eq!(text, "");
        assert_eq!(form.scenario().property_value, Decimal::ZERO);
    }

    #[test]
    fn set_property_value_keeps_previous_value_when_too_large() {
        let mut form = ScenarioForm::default();

        let text = form
            .set_property_value("10000000000000000000000000000")
            .to_string();

        assert_eq!(text, "1,000,000");
        assert_eq!(form.scenario().property_value, dec!(1000000));
        assert_eq!(form.results(), CostSegregationWorksheet::new().calculate(form.scenario()));
    }

    #[test]
    fn results_at_maximum_property_value_do_not_overflow() {
        let mut form = ScenarioForm::default();
        form.set_property_value("1000000000000000");
        for field in PercentField::all() {
            form.set_percent(*field, "100");
        }

        let results = form.results();

        assert_eq!(results.land_value, DepreciationScenario::MAX_PROPERTY_VALUE);
        assert_eq!(results.building_basis, Decimal::ZERO);

        form.set_percent(PercentField::LandValue, "0");
        let results = form.results();

        assert_eq!(results.building_basis, DepreciationScenario::MAX_PROPERTY_VALUE);
        assert_eq!(results.five_year_amount, DepreciationScenario::MAX_PROPERTY_VALUE);
        assert_eq!(results.remaining_basis, Decimal::ZERO);
    }

    #[test]
    fn try_set_property_value_reports_rejection() {
        let mut form = ScenarioForm::default();

        let result = form.try_set_property_value("2,000,000,000,000,000");

        assert_eq!(
            result,
            Err(ValidationError::AmountTooLarge(dec!(2000000000000000)))
        );
    }

    #[test]
    fn set_percent_updates_value_and_text() {
        let mut form = ScenarioForm::default();

        let text = form.set_percent(PercentField::StateTaxRate, "9.3").to_string();

        assert_eq!(text, "9.3");
        assert_eq!(form.scenario().state_tax_rate, dec!(9.3));
    }

    #[test]
    fn set_percent_keeps_previous_value_when_out_of_range() {
        let mut form = ScenarioForm::default();
        form.set_percent(PercentField::FiveYear, "18");

        for field in PercentField::all() {
            let before = field.value(form.scenario());
            let before_text = form.percent_text(*field).to_string();

            let text = form.set_percent(*field, "150").to_string();

            assert_eq!(text, before_text);
            assert_eq!(field.value(form.scenario()), before);
        }
        assert_eq!(form.scenario().five_year_percent, dec!(18));
    }

    #[test]
    fn try_set_percent_reports_rejection() {
        let mut form = ScenarioForm::default();

        let result = form.try_set_percent(PercentField::LandValue, "101");

        assert_eq!(result, Err(ValidationError::PercentOutOfRange(dec!(101))));
    }

    #[test]
    fn results_follow_property_type() {
        let mut form = ScenarioForm::default();
        let commercial = form.results();

        form.set_property_type(PropertyType::Residential);
        let residential = form.results();

        assert_eq!(commercial.standard_year_one_depreciation, dec!(20512.82));
        // 800,000 / 27.5
        assert_eq!(residential.standard_year_one_depreciation, dec!(29090.91));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = ScenarioForm::default();
        form.set_property_value("5");
        form.set_percent(PercentField::LandValue, "50");

        form.reset();

        assert_eq!(form.scenario(), &DepreciationScenario::default());
        assert_eq!(form.property_value_text(), "1,000,000");
    }
}
