//! Parsing of decimal and hexadecimal numerals into `BigInt`.

use crate::crypto::big_integer::from_unsigned_bytes_be;
use crate::error::ParseError;
use num_bigint::BigInt;

/// Parses `value` in the given radix. Only 10 and 16 are supported.
pub fn parse(value: &str, radix: u32) -> Result<BigInt, ParseError> {
    match radix {
        10 => parse_decimal(value),
        16 => parse_radix16(value),
        _ => Err(ParseError::UnsupportedRadix(radix)),
    }
}

/// Parses a base-10 numeral with an optional sign. Surrounding whitespace is ignored.
///
/// Only ASCII digits are accepted after the sign; `_` separators are rejected.
pub fn parse_decimal(value: &str) -> Result<BigInt, ParseError> {
    let text = value.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseError::InvalidDecimalDigit(c));
    }
    Ok(text.parse::<BigInt>()?)
}

/// Parses hex digits as a non-negative big-endian magnitude.
///
/// An odd number of digits is left-padded with a single `0`, so `"F"` and
/// `"0F"` are the same value.
pub fn parse_radix16(value: &str) -> Result<BigInt, ParseError> {
    let digits = value.trim();
    let bytes = if digits.len() % 2 != 0 {
        hex::decode(format!("0{digits}"))?
    } else {
        hex::decode(digits)?
    };
    Ok(from_unsigned_bytes_be(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_is_left_padded() {
        assert_eq!(parse_radix16("F").unwrap(), parse_radix16("0F").unwrap());
        assert_eq!(parse_radix16("abc").unwrap(), BigInt::from(0xABC));
    }

    #[test]
    fn empty_hex_is_zero() {
        assert_eq!(parse_radix16("").unwrap(), BigInt::from(0));
    }

    #[test]
    fn digit_separators_are_rejected() {
        assert!(matches!(parse_decimal("1_000"), Err(ParseError::InvalidDecimalDigit('_'))));
        assert!(matches!(parse_decimal("-1_0"), Err(ParseError::InvalidDecimalDigit('_'))));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(matches!(parse_radix16("0G"), Err(ParseError::InvalidHex(_))));
        assert!(matches!(parse_radix16("12 34"), Err(ParseError::InvalidHex(_))));
    }
}
