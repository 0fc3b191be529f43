use crate::crypto::big_integer::from_signed_bytes_le;
use crate::error::ComputationError;
use num_bigint::BigInt;
use rand::{CryptoRng, Rng, RngCore};
use std::fmt;
use zeroize::Zeroizing;

/// Exclusive bound of the exponent drawn when no bit length is requested.
pub const FALLBACK_PRIVATE_KEY_BOUND: i32 = 7321;

/// Secret exponent of one party.
///
/// Held as little-endian two's complement bytes and wiped on drop.
#[derive(Default)]
pub struct PrivateKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Draws `bit_length / 8` random bytes and clears the top bit of the last
    /// one, so the decoded exponent is non-negative and below `2^(8n - 1)`.
    ///
    /// `bit_length == 0` draws a tiny exponent below
    /// [`FALLBACK_PRIVATE_KEY_BOUND`] instead. That path exists for
    /// compatibility and tests only.
    pub fn generate<R: RngCore + CryptoRng>(
        bit_length: usize,
        rng: &mut R,
    ) -> Result<Self, ComputationError> {
        if bit_length == 0 {
            log::warn!("Bit length 0 requested, falling back to a small private exponent");
            let value = rng.gen_range(0..i32::MAX) % FALLBACK_PRIVATE_KEY_BOUND;
            return Ok(Self::from_integer(&BigInt::from(value)));
        }

        let len = bit_length / 8;
        if len == 0 {
            return Err(ComputationError::EmptyKey { bit_length });
        }

        let mut bytes = Zeroizing::new(vec![0u8; len]);
        rng.try_fill_bytes(&mut bytes)?;
        bytes[len - 1] &= 0x7F;

        Ok(Self { bytes })
    }

    pub fn from_integer(value: &BigInt) -> Self {
        Self {
            bytes: Zeroizing::new(value.to_signed_bytes_le()),
        }
    }

    /// Decoded exponent. The returned copy is not wiped.
    pub fn to_integer(&self) -> BigInt {
        from_signed_bytes_le(&self.bytes)
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
