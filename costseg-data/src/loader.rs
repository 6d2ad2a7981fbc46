//! CSV loader for batches of depreciation scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is trimmed. `property_value` is rounded to cents and may not
//! exceed [`DepreciationScenario::MAX_PROPERTY_VALUE`].
//!
//! | Column                 | Required | Type    | Default |
//! |------------------------|----------|---------|---------|
//! | `name`                 | yes      | string  |         |
//! | `property_value`       | yes      | decimal |         |
//! | `property_type`        | yes      | string  | `residential` or `commercial` |
//! | `land_value_percent`   | no       | decimal | 20      |
//! | `federal_tax_rate`     | no       | decimal | 37      |
//! | `state_tax_rate`       | no       | decimal | 5       |
//! | `five_year_percent`    | no       | decimal | 15      |
//! | `seven_year_percent`   | no       | decimal | 5       |
//! | `fifteen_year_percent` | no       | decimal | 10      |
//!
//! ### Example
//!
//! ```csv
//! name,property_value,property_type,land_value_percent,five_year_percent
//! Main St Office,1000000,commercial,20,15
//! Elm Apartments,2400000,residential,,12
//! ```
use std::io::Read;
use std::path::Path;

use costseg_core::calculations::common::round_half_up;
use costseg_core::{DepreciationScenario, PropertyType};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading scenario rows.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Structural CSV problem: missing required column, bad number, wrong
    /// column count.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised property type '{value}' on row {row}")]
    InvalidPropertyType { value: String, row: usize },

    #[error("{field} must be between 0 and 100, got {value} on row {row}")]
    PercentOutOfRange {
        field: &'static str,
        value: Decimal,
        row: usize,
    },

    #[error("property_value must not be negative, got {value} on row {row}")]
    NegativePropertyValue { value: Decimal, row: usize },

    #[error("property_value must be at most {max}, got {value} on row {row}", max = DepreciationScenario::MAX_PROPERTY_VALUE)]
    PropertyValueTooLarge { value: Decimal, row: usize },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    property_value: Decimal,
    property_type: String,
    land_value_percent: Option<Decimal>,
    federal_tax_rate: Option<Decimal>,
    state_tax_rate: Option<Decimal>,
    five_year_percent: Option<Decimal>,
    seven_year_percent: Option<Decimal>,
    fifteen_year_percent: Option<Decimal>,
}

/// A named scenario read from one CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRecord {
    pub name: String,
    pub scenario: DepreciationScenario,
}

/// Loader for scenario batches.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parses scenario rows from any reader. Rows are returned in file order.
    ///
    /// # Errors
    ///
    /// Fails on the first row that is structurally invalid, names an unknown
    /// property type, or carries an out-of-range value. Row numbers in errors
    /// are 1-based, not counting the header.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, ScenarioLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                convert_row(row, idx + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "parsed scenario rows");
        Ok(records)
    }

    /// Reads a CSV file from disk and delegates to [`ScenarioLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<ScenarioRecord>, ScenarioLoadError> {
        let file = std::fs::File::open(path).map_err(|source| ScenarioLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }
}

fn percent(
    field: &'static str,
    value: Option<Decimal>,
    default: Decimal,
    row: usize,
) -> Result<Decimal, ScenarioLoadError> {
    let value = value.unwrap_or(default);
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ScenarioLoadError::PercentOutOfRange { field, value, row });
    }
    Ok(value)
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<ScenarioRecord, ScenarioLoadError> {
    let property_type: PropertyType =
        row.property_type
            .parse()
            .map_err(|_| ScenarioLoadError::InvalidPropertyType {
                value: row.property_type.clone(),
                row: row_number,
            })?;

    if row.property_value < Decimal::ZERO {
        return Err(ScenarioLoadError::NegativePropertyValue {
            value: row.property_value,
            row: row_number,
        });
    }
    if row.property_value > DepreciationScenario::MAX_PROPERTY_VALUE {
        return Err(ScenarioLoadError::PropertyValueTooLarge {
            value: row.property_value,
            row: row_number,
        });
    }

    let defaults = DepreciationScenario::default();
    let scenario = DepreciationScenario {
        property_value: round_half_up(row.property_value),
        property_type,
        land_value_percent: percent(
            "land_value_percent",
            row.land_value_percent,
            defaults.land_value_percent,
            row_number,
        )?,
        federal_tax_rate: percent(
            "federal_tax_rate",
            row.federal_tax_rate,
            defaults.federal_tax_rate,
            row_number,
        )?,
        state_tax_rate: percent(
            "state_tax_rate",
            row.state_tax_rate,
            defaults.state_tax_rate,
            row_number,
        )?,
        five_year_percent: percent(
            "five_year_percent",
            row.five_year_percent,
            defaults.five_year_percent,
            row_number,
        )?,
        seven_year_percent: percent(
            "seven_year_percent",
            row.seven_year_percent,
            defaults.seven_year_percent,
            row_number,
        )?,
        fifteen_year_percent: percent(
            "fifteen_year_percent",
            row.fifteen_year_percent,
            defaults.fifteen_year_percent,
            row_number,
        )?,
    };

    Ok(ScenarioRecord {
        name: row.name,
        scenario,
    })
}
