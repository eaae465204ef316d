use ethers::types::U256;

use crate::prelude::Result;
use crate::Error;

/// Parses a decimal amount such as `"0.01"` into base units of a token with `decimals`
/// decimals.
///
/// Trailing fractional zeros beyond the token's precision are accepted. Any other digit past
/// the precision is an error rather than being truncated.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(Error::AmountParseError(format!("{amount:?} has no digits")));
    }
    let fraction = fraction.trim_end_matches('0');

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(Error::AmountParseError(format!(
            "{amount:?} is not a decimal number"
        )));
    }

    if fraction.len() > decimals as usize {
        return Err(Error::AmountParseError(format!(
            "{amount:?} has more than {decimals} fractional digits"
        )));
    }

    let digits = format!("{whole}{fraction:0<width$}", width = decimals as usize);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_dec_str(digits)
        .map_err(|e| Error::AmountParseError(format!("{amount:?} is out of range: {e:?}")))
}

/// Fails with [`Error::AmountOverflow`] when `amount` exceeds `2^bits - 1`.
pub(crate) fn ensure_fits(amount: U256, bits: usize) -> Result<()> {
    if bits >= 256 {
        return Ok(());
    }

    let max = (U256::one() << bits) - U256::one();
    if amount > max {
        return Err(Error::AmountOverflow { amount, bits });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("0.01", 18).unwrap(),
            U256::from(10_000_000_000_000_000u64)
        );
        assert_eq!(parse_amount("20", 6).unwrap(), U256::from(20_000_000u64));
        assert_eq!(parse_amount("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(parse_amount(".5", 6).unwrap(), U256::from(500_000u64));
        assert_eq!(parse_amount("5.", 6).unwrap(), U256::from(5_000_000u64));
        assert_eq!(parse_amount("7", 0).unwrap(), U256::from(7u64));
        assert_eq!(parse_amount("0", 18).unwrap(), U256::zero());
        assert_eq!(parse_amount("0.0", 6).unwrap(), U256::zero());
        assert_eq!(parse_amount(" 42 ", 6).unwrap(), U256::from(42_000_000u64));
    }

    #[test]
    fn test_trailing_zeros_past_precision() {
        assert_eq!(
            parse_amount("1.500000000", 6).unwrap(),
            U256::from(1_500_000u64)
        );
    }

    #[test]
    fn test_parse_amount_errors() {
        for input in ["", ".", "abc", "1.2.3", "-1", "+1", "1e18", "1,5", "0x10", "1 000"] {
            assert!(
                matches!(parse_amount(input, 6), Err(Error::AmountParseError(_))),
                "{input:?} should not parse"
            );
        }

        assert!(matches!(
            parse_amount("0.0000001", 6),
            Err(Error::AmountParseError(_))
        ));
        assert!(matches!(
            parse_amount("0.5", 0),
            Err(Error::AmountParseError(_))
        ));
    }

    #[test]
    fn test_parse_amount_beyond_u256() {
        let huge = "1".repeat(80);
        assert!(matches!(
            parse_amount(&huge, 0),
            Err(Error::AmountParseError(_))
        ));
    }

    #[test]
    fn test_ensure_fits_104_bits() {
        let limit = U256::one() << 104;

        assert!(ensure_fits(limit - U256::one(), 104).is_ok());
        assert_eq!(
            ensure_fits(limit, 104),
            Err(Error::AmountOverflow {
                amount: limit,
                bits: 104
            })
        );
        assert!(ensure_fits(U256::MAX, 256).is_ok());
        assert!(ensure_fits(U256::from(255u64), 8).is_ok());
        assert!(ensure_fits(U256::from(256u64), 8).is_err());
    }
}
