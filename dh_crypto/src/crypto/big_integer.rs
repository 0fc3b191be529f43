//! Thin adapter over `num_bigint::BigInt`: the handful of operations the
//! key exchange needs, with failures reported instead of panicking.

use crate::error::ComputationError;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

/// Modular exponentiation: base^exponent mod modulus.
///
/// The result is always in `[0, modulus)`, whatever the sign of `base`.
pub fn mod_pow(
    base: &BigInt,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt, ComputationError> {
    if !modulus.is_positive() {
        return Err(ComputationError::NonPositiveModulus);
    }
    if exponent.is_negative() {
        return Err(ComputationError::NegativeExponent);
    }

    Ok(base.modpow(exponent, modulus))
}

/// Decodes little-endian two's complement bytes; the high bit of the last
/// byte is the sign bit. An empty slice decodes to zero.
pub fn from_signed_bytes_le(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_le(bytes)
}

/// Decodes big-endian bytes as a non-negative magnitude.
pub fn from_unsigned_bytes_be(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Sentinel held by an engine before any secret has been derived.
pub fn unset_sentinel() -> BigInt {
    BigInt::from(-1)
}

/// Sentinel returned when a derivation fails.
pub fn failed_sentinel() -> BigInt {
    BigInt::zero()
}
