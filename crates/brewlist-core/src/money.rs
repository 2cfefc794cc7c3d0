//! Minor-unit money conversion.
//!
//! The upstream API transmits prices as integers in the smallest currency
//! denomination (kopecks). Conversion to major units is exact: a scale-2
//! [`Decimal`] carries two fractional digits through formatting, so `700`
//! always renders as `7.00`, never `7` or `7.0000001`.

use rust_decimal::Decimal;

/// Converts an integer amount of minor currency units into a scale-2 decimal
/// amount of major units (`700` → `7.00`).
#[must_use]
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_whole_units() {
        assert_eq!(from_minor_units(500).to_string(), "5.00");
    }

    #[test]
    fn converts_fractional_units() {
        assert_eq!(from_minor_units(1234).to_string(), "12.34");
    }

    #[test]
    fn zero_keeps_two_fractional_digits() {
        assert_eq!(from_minor_units(0).to_string(), "0.00");
    }

    #[test]
    fn single_minor_unit() {
        assert_eq!(from_minor_units(1).to_string(), "0.01");
    }

    #[test]
    fn absent_input_maps_to_absent_output() {
        let missing: Option<i64> = None;
        assert!(missing.map(from_minor_units).is_none());
    }

    #[test]
    fn matches_division_by_hundred() {
        for minor in [0i64, 1, 99, 100, 101, 500, 700, 12_345, 999_999] {
            let expected = Decimal::from(minor) / Decimal::from(100);
            assert_eq!(from_minor_units(minor), expected, "minor = {minor}");
        }
    }
}
