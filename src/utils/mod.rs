//! Utility functions for parsing and formatting money
//!
//! This module provides centralized parsing of user-supplied profit figures
//! and consistent display of Ringgit amounts and rates throughout the
//! application.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::TaxError;

/// Currency symbol options for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// Include "RM " prefix (Malaysian Ringgit)
    MYR,
    /// No currency symbol (for table cells, calculations display)
    None,
}

/// Parse a profit figure typed by a user.
///
/// Accepts an optional `RM` prefix, `,` thousands separators, a leading `-`
/// and accounting-style parentheses for losses, e.g. `RM (1,250.00)`.
///
/// # Examples
/// ```
/// use cukai::utils::parse_profit;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_profit("RM 1,000.50").unwrap(), dec!(1000.50));
/// assert_eq!(parse_profit("(500)").unwrap(), dec!(-500));
/// assert!(parse_profit("NaN").is_err());
/// ```
pub fn parse_profit(input: &str) -> Result<Decimal, TaxError> {
    let invalid = || TaxError::InvalidProfitValue(format!("'{}' is not a number", input.trim()));

    let mut s = input.trim();
    let mut negative = false;

    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest.trim_start();
    }
    s = strip_currency_prefix(s);
    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        if negative {
            return Err(invalid());
        }
        negative = true;
        s = strip_currency_prefix(inner.trim());
    }
    if let Some(rest) = s.strip_prefix('-') {
        if negative {
            return Err(invalid());
        }
        negative = true;
        s = rest.trim_start();
    }

    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit())
        || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.')
        || cleaned.matches('.').count() > 1
    {
        return Err(invalid());
    }

    let value = Decimal::from_str(&cleaned).map_err(|_| invalid())?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(if negative { -value } else { value })
}

fn strip_currency_prefix(s: &str) -> &str {
    match s.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("rm") => s[2..].trim_start(),
        _ => s,
    }
}

/// Convert a floating point profit, rejecting NaN and infinities
pub fn profit_from_f64(value: f64) -> Result<Decimal, TaxError> {
    if !value.is_finite() {
        return Err(TaxError::InvalidProfitValue(format!(
            "{} is not a finite number",
            value
        )));
    }
    Decimal::try_from(value).map_err(|e| TaxError::InvalidProfitValue(e.to_string()))
}

/// Core formatting function with full control over output.
///
/// Formats a Decimal value using Malaysian conventions:
/// - Thousands separator: `,` (comma)
/// - Decimal separator: `.` (period)
///
/// # Arguments
/// * `value` - The decimal value to format
/// * `width` - Minimum width for padding (0 for no padding, right-aligned)
/// * `symbol` - Whether to include currency symbol
///
/// # Examples
/// ```
/// use cukai::utils::{format_ringgit_with_width, CurrencySymbol};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     format_ringgit_with_width(dec!(1234.56), 0, CurrencySymbol::MYR),
///     "RM 1,234.56"
/// );
///
/// assert_eq!(
///     format_ringgit_with_width(dec!(1234), 15, CurrencySymbol::None),
///     "       1,234.00"
/// );
/// ```
pub fn format_ringgit_with_width(value: Decimal, width: usize, symbol: CurrencySymbol) -> String {
    // Sign is taken after rounding so -0.001 does not print as "-0.00"
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let is_negative = rounded < Decimal::ZERO;
    let abs_value = rounded.abs();

    let formatted = format!("{:.2}", abs_value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    // Add thousands separators (,) to integer part
    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec![',', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    let prefix = match symbol {
        CurrencySymbol::MYR => "RM ",
        CurrencySymbol::None => "",
    };

    let result = format!("{}{}{}.{}", prefix, sign, with_separators, decimal_part);

    if width > 0 && result.len() < width {
        format!("{:>width$}", result, width = width)
    } else {
        result
    }
}

/// Format as Malaysian Ringgit with symbol: "RM 1,234.56"
///
/// # Examples
/// ```
/// use cukai::utils::format_ringgit;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_ringgit(dec!(85000)), "RM 85,000.00");
/// assert_eq!(format_ringgit(dec!(-500)), "RM -500.00");
/// ```
pub fn format_ringgit(value: Decimal) -> String {
    format_ringgit_with_width(value, 0, CurrencySymbol::MYR)
}

/// Format as Malaysian Ringgit, right-aligned to specified width.
pub fn format_ringgit_aligned(value: Decimal, width: usize) -> String {
    format_ringgit_with_width(value, width, CurrencySymbol::MYR)
}

/// Format number only (no symbol): "1,234.56"
///
/// # Examples
/// ```
/// use cukai::utils::format_decimal_my;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_decimal_my(dec!(1234.56)), "1,234.56");
/// ```
pub fn format_decimal_my(value: Decimal) -> String {
    format_ringgit_with_width(value, 0, CurrencySymbol::None)
}

/// Format a fractional rate as a percentage: 0.17 -> "17%"
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
