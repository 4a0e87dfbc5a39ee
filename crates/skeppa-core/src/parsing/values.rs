use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a forecast quantity from a scraped value line.
///
/// Quantities use European digit grouping: periods are thousands
/// separators, a comma (when present) is the decimal separator. A value
/// that still fails to parse falls back to zero; a malformed value line
/// never fails the extraction.
pub fn parse_quantity(raw: &str) -> Decimal {
    let cleaned = raw.trim().replace('.', "").replace(',', ".");
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_quantity("100"), dec!(100));
    }

    #[test]
    fn test_thousands_separator_stripped() {
        assert_eq!(parse_quantity("1.000"), dec!(1000));
        assert_eq!(parse_quantity("2.400.000"), dec!(2400000));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_quantity("12,5"), dec!(12.5));
        assert_eq!(parse_quantity("1.234,5"), dec!(1234.5));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_quantity("  250  "), dec!(250));
    }

    #[test]
    fn test_non_numeric_defaults_to_zero() {
        assert_eq!(parse_quantity("FIRM"), Decimal::ZERO);
        assert_eq!(parse_quantity("100 pcs"), Decimal::ZERO);
    }

    #[test]
    fn test_empty_defaults_to_zero() {
        assert_eq!(parse_quantity(""), Decimal::ZERO);
        assert_eq!(parse_quantity("   "), Decimal::ZERO);
    }
}
