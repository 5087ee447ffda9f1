use rust_decimal::Decimal;

/// Normalize a monetary amount to two fractional digits.
///
/// Sums inherit the scale of their inputs, so an aggregate over whole-unit
/// amounts would otherwise serialize as `"100"` instead of `"100.00"`.
/// Every report DTO passes its money fields through here on construction.
pub fn money(amount: Decimal) -> Decimal {
    let mut normalized = amount;
    normalized.rescale(2);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_whole_amounts_to_two_places() {
        assert_eq!(money(Decimal::from(100)).to_string(), "100.00");
        assert_eq!(money(Decimal::new(55, 1)).to_string(), "5.50");
    }

    #[test]
    fn keeps_two_place_amounts_unchanged() {
        let amount = Decimal::new(12345, 2); // 123.45
        assert_eq!(money(amount), amount);
        assert_eq!(money(amount).to_string(), "123.45");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(money(Decimal::from(-40)).to_string(), "-40.00");
    }
}
