//! Text input handling for scenario fields.
//!
//! Raw keystrokes are sanitized into display text plus a numeric value.
//! Invalid input never raises to the caller of [`ScenarioForm`]; it is
//! rejected and the previous value is kept.

mod form;
pub mod sanitize;

pub use form::{PercentField, ScenarioForm};
pub use sanitize::{
    ValidationError, format_currency, format_currency_cents, parse_currency, sanitize_currency,
    sanitize_percent,
};
