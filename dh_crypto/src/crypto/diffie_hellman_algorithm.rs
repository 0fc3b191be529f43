use crate::crypto::big_integer::{failed_sentinel, mod_pow, unset_sentinel};
use crate::crypto::key_exchange_traits::KeyExchangeAlgorithm;
use crate::crypto::params::{DhParameters, DEFAULT_KEY_BIT_LENGTH};
use crate::crypto::private_key::PrivateKey;
use crate::error::ComputationError;
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangeState {
    KeysGenerated,
    SecretDerived,
}

/// The private exponent `a` and the public value `A = g^a mod p`.
#[derive(Debug, Default)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: BigInt,
}

impl KeyPair {
    pub fn generate<R: RngCore + CryptoRng>(
        params: &DhParameters,
        bit_length: usize,
        rng: &mut R,
    ) -> Result<Self, ComputationError> {
        let private_key = PrivateKey::generate(bit_length, rng)?;
        let public_key = mod_pow(&params.g, &private_key.to_integer(), &params.p)?;
        Ok(Self {
            private_key,
            public_key,
        })
    }
}

/// One party of a Diffie-Hellman exchange.
///
/// Keys are generated on construction. The shared secret starts at `-1`
/// and is overwritten by every successful derivation.
pub struct DiffieHellman {
    params: DhParameters,
    bit_length: usize,
    keypair: KeyPair,
    secret_key: BigInt,
}

impl DiffieHellman {
    /// Generates a key pair for `params`, reporting any failure.
    pub fn try_new<R: RngCore + CryptoRng>(
        params: DhParameters,
        bit_length: usize,
        rng: &mut R,
    ) -> Result<Self, ComputationError> {
        let keypair = KeyPair::generate(&params, bit_length, rng)?;
        log::debug!(
            "Generated Diffie-Hellman key pair ({} bit exponent, {} bit modulus)",
            bit_length,
            params.p.bits()
        );
        Ok(Self {
            params,
            bit_length,
            keypair,
            secret_key: unset_sentinel(),
        })
    }

    /// Like [`try_new`](Self::try_new), but a failure is logged and both keys
    /// stay at zero.
    pub fn new<R: RngCore + CryptoRng>(
        params: DhParameters,
        bit_length: usize,
        rng: &mut R,
    ) -> Self {
        let keypair = match KeyPair::generate(&params, bit_length, rng) {
            Ok(keypair) => keypair,
            Err(e) => {
                log::error!("Diffie-Hellman key generation failed: {}", e);
                KeyPair::default()
            }
        };
        Self {
            params,
            bit_length,
            keypair,
            secret_key: unset_sentinel(),
        }
    }

    pub fn with_default_length<R: RngCore + CryptoRng>(params: DhParameters, rng: &mut R) -> Self {
        Self::new(params, DEFAULT_KEY_BIT_LENGTH, rng)
    }

    /// Random small `g` and `p` with a 1024-bit exponent. Insecure: `p` is a
    /// 31-bit value that is not even checked for primality.
    pub fn with_insecure_random_parameters<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let params = DhParameters::random_insecure(rng);
        Self::new(params, DEFAULT_KEY_BIT_LENGTH, rng)
    }

    pub fn params(&self) -> &DhParameters {
        &self.params
    }

    pub fn p(&self) -> &BigInt {
        &self.params.p
    }

    pub fn g(&self) -> &BigInt {
        &self.params.g
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    pub fn private_key(&self) -> BigInt {
        self.keypair.private_key.to_integer()
    }

    pub fn public_key(&self) -> &BigInt {
        &self.keypair.public_key
    }

    /// `-1` until a secret has been derived.
    pub fn secret_key(&self) -> &BigInt {
        &self.secret_key
    }

    pub fn state(&self) -> ExchangeState {
        if self.secret_key == unset_sentinel() {
            ExchangeState::KeysGenerated
        } else {
            ExchangeState::SecretDerived
        }
    }

    /// Key = B^a mod p. Stores and returns the secret.
    pub fn try_generate_secret_key(
        &mut self,
        other_public_key: &BigInt,
    ) -> Result<BigInt, ComputationError> {
        let private_key = self.keypair.private_key.to_integer();
        let secret = mod_pow(other_public_key, &private_key, &self.params.p)?;
        self.secret_key = secret.clone();
        log::debug!("Derived Diffie-Hellman shared secret");
        Ok(secret)
    }

    /// Like [`try_generate_secret_key`](Self::try_generate_secret_key), but a
    /// failure is logged, the stored secret is left unchanged and zero is
    /// returned.
    pub fn generate_secret_key(&mut self, other_public_key: &BigInt) -> BigInt {
        match self.try_generate_secret_key(other_public_key) {
            Ok(secret) => secret,
            Err(e) => {
                log::error!("Diffie-Hellman secret derivation failed: {}", e);
                failed_sentinel()
            }
        }
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type PublicKey = BigInt;
    type SharedSecret = BigInt;

    fn public_key(&self) -> &Self::PublicKey {
        &self.keypair.public_key
    }

    fn derive_shared_secret(
        &mut self,
        other_public_key: &BigInt,
    ) -> Result<BigInt, ComputationError> {
        self.try_generate_secret_key(other_public_key)
    }
}

impl fmt::Debug for DiffieHellman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffieHellman")
            .field("params", &self.params)
            .field("bit_length", &self.bit_length)
            .field("private_key", &self.keypair.private_key)
            .field("public_key", &self.keypair.public_key)
            .field("state", &self.state())
            .finish()
    }
}
