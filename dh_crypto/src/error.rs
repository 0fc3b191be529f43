//! Error types for parsing and key-exchange computations.

use thiserror::Error;

/// Failure to decode a numeral into an integer.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid radix value {0}. Only 10 and 16 are supported.")]
    UnsupportedRadix(u32),

    #[error("Invalid decimal digit {0:?}")]
    InvalidDecimalDigit(char),

    #[error("Invalid decimal numeral: {0}")]
    InvalidDecimal(#[from] num_bigint::ParseBigIntError),

    #[error("Invalid hexadecimal numeral: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Failure during key generation, public key computation or secret derivation.
#[derive(Debug, Error)]
pub enum ComputationError {
    #[error("Random source failed: {0}")]
    Entropy(#[from] rand::Error),

    #[error("Bit length {bit_length} yields no private key bytes")]
    EmptyKey { bit_length: usize },

    #[error("Modulus must be positive")]
    NonPositiveModulus,

    #[error("Exponent must not be negative")]
    NegativeExponent,
}
