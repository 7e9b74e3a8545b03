//! Display formatting shared by the dashboard, the roster table and the
//! details sheet.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Shown in place of an absent optional value.
pub const PLACEHOLDER: &str = "-";

/// Formats an amount with Indian digit grouping (lakh, crore) and at most
/// two fraction digits, e.g. `₹12,34,567.5`. Zero and non-finite amounts render as `₹0`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_SYMBOL}0");
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en_IN);
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match fraction {
        0 => format!("{sign}{CURRENCY_SYMBOL}{whole}"),
        f if f % 10 == 0 => format!("{sign}{CURRENCY_SYMBOL}{whole}.{}", f / 10),
        f => format!("{sign}{CURRENCY_SYMBOL}{whole}.{f:02}"),
    }
}

/// Long-form date such as `15 March 2024`, or the placeholder.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// The text itself, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => PLACEHOLDER,
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.decimals$}%")
}

/// Whole numbers with the same digit grouping as currency, for head counts.
pub fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en_IN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_lakh_crore_grouping() {
        assert_eq!(format_currency(1_234_567.0), "₹12,34,567");
        assert_eq!(format_currency(123_456_789.0), "₹12,34,56,789");
        assert_eq!(format_currency(45_000.0), "₹45,000");
        assert_eq!(format_currency(999.0), "₹999");
    }

    #[test]
    fn currency_keeps_at_most_two_fraction_digits() {
        assert_eq!(format_currency(245_000.5), "₹2,45,000.5");
        assert_eq!(format_currency(123.456), "₹123.46");
        assert_eq!(format_currency(10.05), "₹10.05");
    }

    #[test]
    fn currency_zero_and_invalid_amounts() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(f64::NAN), "₹0");
        assert_eq!(format_currency(-1500.0), "-₹1,500");
    }

    #[test]
    fn dates_use_long_form() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2024, 3, 5)),
            "5 March 2024"
        );
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn blank_values_become_placeholder() {
        assert_eq!(or_placeholder(None), "-");
        assert_eq!(or_placeholder(Some("  ")), "-");
        assert_eq!(or_placeholder(Some("+91 98450 00000")), "+91 98450 00000");
    }

    #[test]
    fn percentages_are_fixed_precision() {
        assert_eq!(format_percentage(80.0, 0), "80%");
        assert_eq!(format_percentage(100.0 / 3.0, 1), "33.3%");
        assert_eq!(format_percentage(f64::NAN, 0), "0%");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(12_500), "12,500");
    }
}
