pub mod calculations;
pub mod input;
pub mod models;

pub use calculations::{CalculatorAssumptions, CostSegregationWorksheet, DerivedValues};
pub use input::{PercentField, ScenarioForm, ValidationError};
pub use models::*;
