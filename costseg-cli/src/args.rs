use clap::Args;
use costseg_core::{PercentField, PropertyType, ScenarioForm};
use tracing::warn;

/// Scenario inputs accepted on the command line.
///
/// Values go through the same sanitizers as interactive input: a percentage
/// above 100 or an oversized property value is rejected and the default is
/// kept.
#[derive(Debug, Clone, Default, Args)]
pub struct ScenarioArgs {
    /// Purchase price, e.g. `1,250,000`.
    #[arg(long)]
    pub property_value: Option<String>,

    /// `residential` (27.5-year) or `commercial` (39-year).
    #[arg(long)]
    pub property_type: Option<PropertyType>,

    /// Land share of the purchase price, in percent.
    #[arg(long = "land")]
    pub land_value_percent: Option<String>,

    /// Federal marginal tax rate, in percent.
    #[arg(long = "federal")]
    pub federal_tax_rate: Option<String>,

    /// State marginal tax rate, in percent.
    #[arg(long = "state")]
    pub state_tax_rate: Option<String>,

    /// Share of the building basis reclassified as 5-year property.
    #[arg(long = "five")]
    pub five_year_percent: Option<String>,

    /// Share of the building basis reclassified as 7-year property.
    #[arg(long = "seven")]
    pub seven_year_percent: Option<String>,

    /// Share of the building basis reclassified as 15-year property.
    #[arg(long = "fifteen")]
    pub fifteen_year_percent: Option<String>,
}

impl ScenarioArgs {
    fn percent_inputs(&self) -> [(PercentField, Option<&str>); 6] {
        [
            (PercentField::LandValue, self.land_value_percent.as_deref()),
            (PercentField::FederalTaxRate, self.federal_tax_rate.as_deref()),
            (PercentField::StateTaxRate, self.state_tax_rate.as_deref()),
            (PercentField::FiveYear, self.five_year_percent.as_deref()),
            (PercentField::SevenYear, self.seven_year_percent.as_deref()),
            (PercentField::FifteenYear, self.fifteen_year_percent.as_deref()),
        ]
    }

    /// Applies every supplied value to the form, warning about rejected ones.
    pub fn apply_to(
        &self,
        form: &mut ScenarioForm,
    ) {
        if let Some(property_type) = self.property_type {
            form.set_property_type(property_type);
        }

        if let Some(raw) = &self.property_value {
            let cleared = form.try_set_property_value(raw).map(str::is_empty);
            match cleared {
                Ok(true) => warn!(input = %raw, "property value has no digits, using 0"),
                Ok(false) => {}
                Err(error) => warn!(
                    input = %raw,
                    kept = %form.scenario().property_value,
                    "{error}"
                ),
            }
        }

        for (field, raw) in self.percent_inputs() {
            let Some(raw) = raw else { continue };
            if let Some(error) = form.try_set_percent(field, raw).err() {
                warn!(
                    field = field.label(),
                    input = raw,
                    kept = %field.value(form.scenario()),
                    "{error}"
                );
            }
        }
    }
}
