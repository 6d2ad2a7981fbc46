//! Depreciation calculations for cost segregation studies.
//!
//! This module compares standard straight-line depreciation against an
//! accelerated schedule where short-life building components are broken out
//! into 5, 7 and 15-year classes.

pub mod assumptions;
pub mod common;
pub mod cost_seg;

pub use assumptions::{AssumptionsError, CalculatorAssumptions};
pub use cost_seg::{CostSegregationWorksheet, DerivedValues};
