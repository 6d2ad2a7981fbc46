//! Chart series derived from cost segregation results.

use costseg_core::DerivedValues;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::point::DataPoint;

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Building basis split across the recovery classes, for a pie chart.
pub fn allocation_series(values: &DerivedValues) -> Vec<DataPoint> {
    vec![
        DataPoint::new("5-Year Property", to_f64(values.five_year_amount)),
        DataPoint::new("7-Year Property", to_f64(values.seven_year_amount)),
        DataPoint::new("15-Year Property", to_f64(values.fifteen_year_amount)),
        DataPoint::new("Remaining Basis", to_f64(values.remaining_basis)),
    ]
}

/// Standard versus accelerated year-one depreciation, for a bar chart.
pub fn depreciation_comparison_series(values: &DerivedValues) -> Vec<DataPoint> {
    vec![
        DataPoint::new("Standard", to_f64(values.standard_year_one_depreciation))
            .with_color("#94a3b8"),
        DataPoint::new(
            "Accelerated",
            to_f64(values.accelerated_year_one_depreciation),
        )
        .with_color("#16a34a"),
    ]
}

/// Headline savings figures, for a horizontal bar chart.
pub fn savings_series(values: &DerivedValues) -> Vec<DataPoint> {
    vec![
        DataPoint::new("Year-One Savings", to_f64(values.year_one_tax_savings)),
        DataPoint::new("Total Savings", to_f64(values.total_tax_savings)),
        DataPoint::new("Net Present Value", to_f64(values.net_present_value)),
    ]
}
