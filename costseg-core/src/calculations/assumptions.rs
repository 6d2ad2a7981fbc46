//! Economic assumptions behind the net present value figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when calculator assumptions are out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssumptionsError {
    /// The discount rate must be in `[0, 1)`.
    #[error("discount rate must be between 0 and 1, got {0}")]
    InvalidDiscountRate(Decimal),

    /// The horizon must be between one and
    /// [`CalculatorAssumptions::MAX_HORIZON_YEARS`] years.
    #[error(
        "NPV horizon must be between 1 and {max} years, got {0}",
        max = CalculatorAssumptions::MAX_HORIZON_YEARS
    )]
    InvalidHorizon(u32),
}

/// Discounting parameters used when reducing future tax savings to today's
/// dollars.
///
/// The defaults are a 5% annual discount rate over a 5-year horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorAssumptions {
    /// Annual discount rate as a fraction (`0.05` for 5%).
    pub discount_rate: Decimal,

    /// Number of years over which the post-year-one savings are discounted.
    pub horizon_years: u32,
}

impl CalculatorAssumptions {
    pub const DEFAULT_DISCOUNT_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
    pub const DEFAULT_HORIZON_YEARS: u32 = 5;
    pub const MAX_HORIZON_YEARS: u32 = 100;

    /// Checks that the assumptions describe a usable discount curve.
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        if self.discount_rate < Decimal::ZERO || self.discount_rate >= Decimal::ONE {
            return Err(AssumptionsError::InvalidDiscountRate(self.discount_rate));
        }
        if self.horizon_years == 0 || self.horizon_years > Self::MAX_HORIZON_YEARS {
            return Err(AssumptionsError::InvalidHorizon(self.horizon_years));
        }
        Ok(())
    }
}

impl Default for CalculatorAssumptions {
    fn default() -> Self {
        Self {
            discount_rate: Self::DEFAULT_DISCOUNT_RATE,
            horizon_years: Self::DEFAULT_HORIZON_YEARS,
        }
    }
}
