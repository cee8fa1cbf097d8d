//! Display formatting for currency amounts.

/// Amount as shown without rounding: whole values have no decimals
/// (`2155`), anything else uses the shortest exact decimal (`174.5`)
pub fn format_plain(amount: f64) -> String {
    if amount == 0.0 {
        // Avoid printing "-0"
        return "0".to_string();
    }
    format!("{}", amount)
}

/// Amount rounded to two fraction digits (`210.50`), halves rounding away
/// from zero (`1.125` -> `1.13`)
pub fn format_fixed(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

/// Symbol-prefixed unrounded amount, e.g. "$2155"
pub fn money_plain(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, format_plain(amount))
}

/// Symbol-prefixed amount with two decimals, e.g. "$2215.50"
pub fn money_fixed(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, format_fixed(amount))
}

/// Deduction line, e.g. "- $50"
pub fn money_deduction(symbol: &str, amount: f64) -> String {
    format!("- {}", money_plain(symbol, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(2155.0), "2155");
        assert_eq!(format_plain(174.5), "174.5");
        assert_eq!(format_plain(0.0), "0");
        assert_eq!(format_plain(-0.0), "0");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(210.5), "210.50");
        assert_eq!(format_fixed(2215.5), "2215.50");
        assert_eq!(format_fixed(0.0), "0.00");
    }

    #[test]
    fn test_format_fixed_rounds_halves_up() {
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(format_fixed(1.125), "1.13");
        assert_eq!(format_fixed(12.375), "12.38");
        assert_eq!(format_fixed(-1.125), "-1.13");
    }

    #[test]
    fn test_money_helpers() {
        assert_eq!(money_plain("$", 500.0), "$500");
        assert_eq!(money_fixed("$", 210.5), "$210.50");
        assert_eq!(money_deduction("$", 50.0), "- $50");
    }
}
