//! Display strings for solutions, in the form the results page shows them.

use num_format::{Locale, ToFormattedString};

/// A quantity with two decimals and its unit, e.g. `80.00 kg`.
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.2}", quantity)
    } else {
        format!("{:.2} {}", quantity, unit)
    }
}

/// A money amount with thousands separators and two decimals, e.g. `Rp 960,000.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let grouped = group_thousands(amount);
    if symbol.is_empty() {
        grouped
    } else {
        format!("{} {}", symbol, grouped)
    }
}

fn group_thousands(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = (cents / 100).to_formatted_string(&Locale::en);

    // No sign on amounts that round to zero
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}{}.{:02}", sign, integer, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(960000.0, "Rp"), "Rp 960,000.00");
        assert_eq!(format_currency(1000000.0 / 3.0, "Rp"), "Rp 333,333.33");
        assert_eq!(format_currency(1234567890.1, "Rp"), "Rp 1,234,567,890.10");
        assert_eq!(format_currency(999.999, "Rp"), "Rp 1,000.00");
        assert_eq!(format_currency(5e8 / 0.3, "Rp"), "Rp 1,666,666,666.67");
    }

    #[test]
    fn test_format_currency_small_and_negative_amounts() {
        assert_eq!(format_currency(0.0, "Rp"), "Rp 0.00");
        assert_eq!(format_currency(12.5, ""), "12.50");
        assert_eq!(format_currency(-1500.0, "$"), "$ -1,500.00");
        assert_eq!(format_currency(-0.001, "$"), "$ 0.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(80.0, "kg"), "80.00 kg");
        assert_eq!(format_quantity(200.0 / 3.0, "kg"), "66.67 kg");
        assert_eq!(format_quantity(1.0, ""), "1.00");
    }
}
