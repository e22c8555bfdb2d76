//! Text formatting for money, percentages and table labels.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Round a monetary value to cents, half away from zero.
pub fn round_money(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed two-decimal representation without grouping, e.g. `1866.60`.
pub fn two_decimals(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(2);
    rounded.to_string()
}

/// Two decimals with comma thousands separators, e.g. `682,912.43`.
pub fn format_currency(amount: Money) -> String {
    let plain = two_decimals(amount.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// A fractional rate shown as a percentage with two decimals, e.g. `5.89`.
pub fn format_percent(rate: Rate) -> String {
    two_decimals(rate * dec!(100))
}

/// Upper-case the first character and lower-case the rest.
///
/// Only the first character is touched: `BI_WEEKLY` becomes `Bi_weekly`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(2.675)), dec!(2.68));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn test_two_decimals_pads() {
        assert_eq!(two_decimals(dec!(7578.3)), "7578.30");
        assert_eq!(two_decimals(dec!(500000)), "500000.00");
        assert_eq!(two_decimals(dec!(933.1052941)), "933.11");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "0.00");
        assert_eq!(format_currency(dec!(999.999)), "1,000.00");
        assert_eq!(format_currency(dec!(4046.23)), "4,046.23");
        assert_eq!(format_currency(dec!(682912.43)), "682,912.43");
        assert_eq!(format_currency(dec!(1234567.8)), "1,234,567.80");
        assert_eq!(format_currency(dec!(-25000)), "-25,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(0.0589)), "5.89");
        assert_eq!(format_percent(dec!(0.05)), "5.00");
    }

    #[test]
    fn test_capitalize_keeps_underscores() {
        assert_eq!(capitalize("MONTHLY"), "Monthly");
        assert_eq!(capitalize("BI_WEEKLY"), "Bi_weekly");
        assert_eq!(capitalize("weekly"), "Weekly");
        assert_eq!(capitalize(""), "");
    }
}
