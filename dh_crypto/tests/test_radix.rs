use dh_crypto::crypto::params::{DEMO_PRIME_HEX, DEMO_PRIME_RADIX};
use dh_crypto::crypto::radix::{parse, parse_decimal, parse_radix16};
use dh_crypto::ParseError;
use num_bigint::BigInt;

#[test]
fn test_hex_and_decimal_agree_on_two() {
    let hex = parse_radix16("2").unwrap();
    let dec = parse_decimal("2").unwrap();
    assert_eq!(hex, dec);
    assert_eq!(hex, BigInt::from(2));
}

#[test]
fn test_hex_high_bit_is_not_a_sign() {
    assert_eq!(parse_radix16("FF").unwrap(), BigInt::from(255));
    assert_eq!(parse_radix16("ff").unwrap(), BigInt::from(255));
    assert_eq!(parse_radix16("8000").unwrap(), BigInt::from(0x8000));
}

#[test]
fn test_hex_odd_length() {
    assert_eq!(parse_radix16("F").unwrap(), parse_radix16("0F").unwrap());
    assert_eq!(parse_radix16("F").unwrap(), BigInt::from(15));
}

#[test]
fn test_hex_surrounding_whitespace() {
    assert_eq!(parse_radix16(" ff ").unwrap(), BigInt::from(255));
    assert_eq!(parse(" ff\n", 16).unwrap(), BigInt::from(255));
}

#[test]
fn test_decimal() {
    let big = "12345678901234567890";
    assert_eq!(parse(big, 10).unwrap(), big.parse::<BigInt>().unwrap());
    assert_eq!(parse_decimal(" -42 ").unwrap(), BigInt::from(-42));
    assert!(matches!(parse_decimal("12a"), Err(ParseError::InvalidDecimalDigit('a'))));
    assert!(matches!(parse_decimal(""), Err(ParseError::InvalidDecimal(_))));
    assert!(matches!(parse_decimal("-"), Err(ParseError::InvalidDecimal(_))));
    assert!(matches!(parse_decimal("+7").map(|v| v == BigInt::from(7)), Ok(true)));
    assert!(matches!(parse_decimal("1_000"), Err(ParseError::InvalidDecimalDigit('_'))));
    assert!(parse("1_0", 10).is_err());
}

#[test]
fn test_unsupported_radix() {
    assert!(matches!(parse("10", 7), Err(ParseError::UnsupportedRadix(7))));
    assert!(matches!(parse("10", 8), Err(ParseError::UnsupportedRadix(8))));
    assert!(matches!(parse("10", 0), Err(ParseError::UnsupportedRadix(0))));
}

#[test]
fn test_demo_prime_with_wrong_radix_fails() {
    assert!(matches!(parse(DEMO_PRIME_HEX, 2), Err(ParseError::UnsupportedRadix(2))));
    assert!(parse(DEMO_PRIME_HEX, 10).is_err());

    let p = parse(DEMO_PRIME_HEX, DEMO_PRIME_RADIX).unwrap();
    assert_eq!(p.to_str_radix(16), DEMO_PRIME_HEX);
}

#[test]
fn test_error_messages() {
    let err = parse("1", 3).unwrap_err();
    assert_eq!(err.to_string(), "Invalid radix value 3. Only 10 and 16 are supported.");
}
