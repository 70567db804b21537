//! Input validation at the command boundary
//!
//! Raw user input is checked here before it can reach a stored record.

use rust_decimal::Decimal;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Largest amount accepted for a single expense or the budget
// 1_000_000_000_000_000 (10^15); `Decimal::new` is not const, so build from parts
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Parse and check an amount: must be a number, not negative and at most
/// `MAX_AMOUNT`
pub fn validate_amount(raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw).map_err(|_| {
        LedgerError::InvalidAmount(format!("'{}' is not a number", raw.trim()))
    })?;

    if amount.is_negative() {
        return Err(LedgerError::InvalidAmount(format!(
            "'{}' is negative",
            raw.trim()
        )));
    }

    if amount.amount() > MAX_AMOUNT {
        return Err(LedgerError::InvalidAmount(format!(
            "'{}' exceeds the maximum of {}",
            raw.trim(),
            MAX_AMOUNT
        )));
    }

    // "-0" parses with a negative sign bit
    if amount.is_zero() {
        return Ok(Money::new(Decimal::ZERO));
    }

    Ok(amount)
}

/// Check a month number is within 1-12
pub fn validate_month(raw: i64) -> LedgerResult<u32> {
    match u32::try_from(raw) {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(LedgerError::InvalidMonth(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_amounts() {
        assert_eq!(validate_amount("50").unwrap().amount(), dec!(50));
        assert_eq!(validate_amount("50.00").unwrap().amount(), dec!(50.00));
        assert_eq!(validate_amount("$19.99").unwrap().amount(), dec!(19.99));
        assert_eq!(validate_amount("0").unwrap().amount(), dec!(0));
    }

    #[test]
    fn test_negative_zero_is_plain_zero() {
        let amount = validate_amount("-0").unwrap();
        assert!(amount.is_zero());
        assert!(!amount.amount().is_sign_negative());
    }

    #[test]
    fn test_invalid_amounts() {
        for raw in ["-5", "-0.01", "abc", "", "12.3.4", "NaN", "1_000"] {
            let err = validate_amount(raw).unwrap_err();
            assert!(
                matches!(err, LedgerError::InvalidAmount(_)),
                "expected InvalidAmount for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_amount_ceiling() {
        assert_eq!(
            validate_amount("1000000000000000").unwrap().amount(),
            MAX_AMOUNT
        );
        for raw in ["1000000000000000.01", "79228162514264337593543950335", "1e16"] {
            let err = validate_amount(raw).unwrap_err();
            assert!(
                matches!(err, LedgerError::InvalidAmount(ref msg) if msg.contains("maximum")),
                "expected ceiling error for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_months() {
        assert_eq!(validate_month(1).unwrap(), 1);
        assert_eq!(validate_month(12).unwrap(), 12);
        assert!(matches!(validate_month(0), Err(LedgerError::InvalidMonth(0))));
        assert!(matches!(validate_month(13), Err(LedgerError::InvalidMonth(13))));
        assert!(matches!(validate_month(-1), Err(LedgerError::InvalidMonth(-1))));
    }
}
