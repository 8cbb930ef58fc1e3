//! Money and percentage formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// The fixed currency symbol.
pub const CURRENCY_SYMBOL: &str = "$";

/// Placeholder shown for a value with no result.
pub const NO_RESULT: &str = "—";

/// Formats an amount as whole dollars with space-separated thousands.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::report::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(123456789, 2)), "$1 234 568");
/// assert_eq!(format_money(Decimal::ZERO), "$0");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", CURRENCY_SYMBOL, sign, group_thousands(&digits))
}

/// Formats a coverage percentage to one decimal place, or `—` for no result.
///
/// # Examples
///
/// ```
/// use cm_cost_engine::report::format_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Some(Decimal::new(11594, 2))), "115.9%");
/// assert_eq!(format_percent(None), "—");
/// ```
pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => {
            let rounded = pct.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
            format!("{:.1}%", rounded)
        }
        None => NO_RESULT.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
