//! Human-readable and JSON reports of a computed scenario.

use std::fmt;

use costseg_core::input::format_currency_cents;
use costseg_core::{DepreciationScenario, DerivedValues};
use rust_decimal::Decimal;
use serde::Serialize;

/// One scenario with its computed values.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub scenario: &'a DepreciationScenario,
    pub results: &'a DerivedValues,
}

impl<'a> Report<'a> {
    pub fn new(
        name: Option<&'a str>,
        scenario: &'a DepreciationScenario,
        results: &'a DerivedValues,
    ) -> Self {
        Self {
            name,
            scenario,
            results,
        }
    }
}

fn money(value: Decimal) -> String {
    format!("${}", format_currency_cents(value))
}

fn percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

const WIDTH: usize = 38;

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = self.scenario;
        let r = self.results;

        if let Some(name) = self.name {
            writeln!(f, "{name}")?;
        }
        writeln!(
            f,
            "{} property, {}-year recovery",
            s.property_type.label(),
            s.standard_depreciation_period().normalize()
        )?;

        let rows = [
            ("Property value", money(s.property_value)),
            ("Land value", money(r.land_value)),
            ("Building basis", money(r.building_basis)),
            ("5-year property", money(r.five_year_amount)),
            ("7-year property", money(r.seven_year_amount)),
            ("15-year property", money(r.fifteen_year_amount)),
            ("Remaining basis", money(r.remaining_basis)),
            ("Standard year-one depreciation", money(r.standard_year_one_depreciation)),
            ("Accelerated year-one depreciation", money(r.accelerated_year_one_depreciation)),
            ("Combined tax rate", percent(r.combined_tax_rate)),
            ("Year-one tax savings", money(r.year_one_tax_savings)),
            ("Total tax savings", money(r.total_tax_savings)),
            ("Net present value", money(r.net_present_value)),
        ];

        for (label, value) in rows {
            writeln!(f, "  {label:<WIDTH$}{value:>16}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use costseg_core::CostSegregationWorksheet;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_lists_every_line() {
        let scenario = DepreciationScenario::default();
        let results = CostSegregationWorksheet::new().calculate(&scenario);

        let text = Report::new(Some("Main St Office"), &scenario, &results).to_string();

        assert!(text.starts_with("Main St Office\nCommercial property, 39-year recovery\n"));
        assert!(text.contains("$66,855.38"));
        assert!(text.contains("$20,512.82"));
        assert!(text.contains("42%"));
        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn display_residential_period() {
        let scenario = DepreciationScenario {
            property_type: costseg_core::PropertyType::Residential,
            ..Default::default()
        };
        let results = CostSegregationWorksheet::new().calculate(&scenario);

        let text = Report::new(None, &scenario, &results).to_string();

        assert!(text.starts_with("Residential Rental property, 27.5-year recovery"));
    }

    #[test]
    fn json_serializes_decimals_as_strings() {
        let scenario = DepreciationScenario::default();
        let results = CostSegregationWorksheet::new().calculate(&scenario);

        let json = serde_json::to_value(Report::new(None, &scenario, &results)).unwrap();

        assert_eq!(json["scenario"]["property_type"], "commercial");
        assert_eq!(json["results"]["year_one_tax_savings"], "66855.38");
        assert!(json.get("name").is_none());
    }
}
