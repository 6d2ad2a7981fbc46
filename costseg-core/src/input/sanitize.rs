use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::DepreciationScenario;

/// Everything that is not a digit or a decimal point.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

/// Rejection reasons for a field edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A percentage above 100 was entered.
    #[error("percentage must be at most 100, got {0}")]
    PercentOutOfRange(Decimal),

    /// The sanitized text could not be read as a number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// A purchase price above [`DepreciationScenario::MAX_PROPERTY_VALUE`].
    #[error("property value must be at most {max}, got {0}", max = DepreciationScenario::MAX_PROPERTY_VALUE)]
    AmountTooLarge(Decimal),
}

/// Keeps only digits and the first decimal point; later points are dropped
/// so `"1.2.3"` becomes `"1.23"`.
fn strip_to_number(raw: &str) -> String {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    match cleaned.split_once('.') {
        Some((whole, fraction)) => format!("{whole}.{}", fraction.replace('.', "")),
        None => cleaned.to_string(),
    }
}

/// Parses sanitized text, tolerating a bare leading or trailing point while
/// the user is still typing (`".5"`, `"12."`).
fn parse_number(text: &str) -> Result<Decimal, ValidationError> {
    let trimmed = text.trim_end_matches('.');
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let normalized = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    normalized
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(text.to_string()))
}

/// Sanitizes a typed currency amount into whole units.
///
/// Returns `Ok(None)` when nothing numeric remains, which callers display as
/// an empty field worth zero.
///
/// # Errors
///
/// [`ValidationError::AmountTooLarge`] above
/// [`DepreciationScenario::MAX_PROPERTY_VALUE`], and
/// [`ValidationError::InvalidNumber`] when the digits overflow a decimal.
pub fn sanitize_currency(raw: &str) -> Result<Option<Decimal>, ValidationError> {
    let text = strip_to_number(raw);
    if text.trim_end_matches('.').is_empty() {
        return Ok(None);
    }
    let value = parse_number(&text)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if value > DepreciationScenario::MAX_PROPERTY_VALUE {
        return Err(ValidationError::AmountTooLarge(value));
    }
    Ok(Some(value))
}

/// Sanitizes a typed percentage.
///
/// Returns the display text and its numeric value. Empty input is accepted as
/// zero.
///
/// # Errors
///
/// [`ValidationError::PercentOutOfRange`] when the value exceeds 100, and
/// [`ValidationError::InvalidNumber`] when the digits overflow a decimal.
pub fn sanitize_percent(raw: &str) -> Result<(String, Decimal), ValidationError> {
    let text = strip_to_number(raw);
    let value = parse_number(&text)?;
    if value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::PercentOutOfRange(value));
    }
    Ok((text, value))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as whole units with thousands separators.
///
/// ```
/// use rust_decimal_macros::dec;
/// use costseg_core::input::format_currency;
///
/// assert_eq!(format_currency(dec!(1000000)), "1,000,000");
/// assert_eq!(format_currency(dec!(999.5)), "1,000");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{}", group_thousands(&rounded.abs().trunc().to_string()))
}

/// Formats an amount with cents and thousands separators, e.g. `66,855.38`.
pub fn format_currency_cents(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    match text.split_once('.') {
        Some((whole, cents)) => format!("{sign}{}.{cents}", group_thousands(whole)),
        None => format!("{sign}{}", group_thousands(&text)),
    }
}

/// Reads a formatted amount back, ignoring `$`, separators and whitespace.
pub fn parse_currency(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '$') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
