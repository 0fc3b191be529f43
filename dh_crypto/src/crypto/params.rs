use crate::crypto::radix;
use crate::error::ParseError;
use num_bigint::BigInt;
use rand::{CryptoRng, Rng, RngCore};

/// Private exponent length used when the caller does not pick one.
pub const DEFAULT_KEY_BIT_LENGTH: usize = 1024;

/// 1024-bit prime modulus shared by the demo parties.
pub const DEMO_PRIME_HEX: &str = concat!(
    "cf5cf5c38419a724957ff5dd323b9c45c3cdd261eb740f69aa94b8bb1a5c9640",
    "9153bd76b24222d03274e4725a5406092e9e82e9135c643cae98132b0d95f7d6",
    "5347c68afc1e677da90e51bbab5f5cf429c291b4ba39c6b2dc5e8c7231e46aa7",
    "728e87664532cdf547be20c9a3fa8342be6e34371a27c06f7dc0edddd2f86373",
);
pub const DEMO_PRIME_RADIX: u32 = 16;
pub const DEMO_GENERATOR: &str = "2";

/// Exclusive upper bound of `g` in the insecure parameterless mode.
pub const INSECURE_GENERATOR_BOUND: i32 = 96557;
/// Exclusive upper bound of `p` in the insecure parameterless mode.
pub const INSECURE_PRIME_BOUND: i32 = 1405695061;

/// Public values shared by both parties of an exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    pub p: BigInt,
    pub g: BigInt,
}

impl DhParameters {
    pub fn new(g: BigInt, p: BigInt) -> Self {
        Self { p, g }
    }

    /// Builds parameters from text, each value in its own radix (10 or 16).
    pub fn parse(g: &str, g_radix: u32, p: &str, p_radix: u32) -> Result<Self, ParseError> {
        Ok(Self {
            g: radix::parse(g, g_radix)?,
            p: radix::parse(p, p_radix)?,
        })
    }

    /// `g = 2` with the 1024-bit demo prime.
    pub fn demo() -> Result<Self, ParseError> {
        Self::parse(DEMO_GENERATOR, 10, DEMO_PRIME_HEX, DEMO_PRIME_RADIX)
    }

    /// Random `g` and `p` below small fixed bounds. `p` is not even checked
    /// for primality; use this for demos only, never for real secrets.
    pub fn random_insecure<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        log::warn!("Generating insecure random Diffie-Hellman parameters");
        let g = rng.gen_range(0..i32::MAX) % INSECURE_GENERATOR_BOUND;
        let p = rng.gen_range(0..i32::MAX) % INSECURE_PRIME_BOUND;
        Self {
            g: BigInt::from(g),
            p: BigInt::from(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn demo_prime_is_1024_bits() {
        let params = DhParameters::demo().unwrap();
        assert_eq!(DEMO_PRIME_HEX.len(), 256);
        assert_eq!(params.p.bits(), 1024);
        assert_eq!(params.g, BigInt::from(2));
    }

    #[test]
    fn random_insecure_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let params = DhParameters::random_insecure(&mut rng);
            assert!(params.g >= BigInt::from(0));
            assert!(params.g < BigInt::from(INSECURE_GENERATOR_BOUND));
            assert!(params.p >= BigInt::from(0));
            assert!(params.p < BigInt::from(INSECURE_PRIME_BOUND));
        }
    }
}
