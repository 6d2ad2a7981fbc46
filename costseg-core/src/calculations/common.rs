//! Shared arithmetic for the depreciation calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to cents using half-up rounding.
///
/// Values at exactly half a cent are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use costseg_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(20512.8205)), dec!(20512.82));
/// assert_eq!(round_half_up(dec!(5333.335)), dec!(5333.34));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Applies a whole-number percentage (`20` meaning 20%) to an amount.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use costseg_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(800000), dec!(15)), dec!(120000));
/// ```
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Growth factor `(1 + rate)^years` used to discount future savings.
///
/// Computed by repeated multiplication so the result stays exact for
/// terminating rates. Returns `None` when the factor overflows a [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use costseg_core::calculations::common::compound_factor;
///
/// assert_eq!(compound_factor(dec!(0.05), 5), Some(dec!(1.2762815625)));
/// assert_eq!(compound_factor(dec!(0.99), 100), None);
/// ```
pub fn compound_factor(
    rate: Decimal,
    years: u32,
) -> Option<Decimal> {
    let growth = Decimal::ONE.checked_add(rate)?;
    (0..years).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(growth))
}
