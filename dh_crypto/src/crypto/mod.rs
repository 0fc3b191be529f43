//! Cryptographic algorithms and traits.

pub mod big_integer;
pub mod diffie_hellman_algorithm;
pub mod key_exchange_traits;
pub mod params;
pub mod private_key;
pub mod radix;

// Re-export main components for easier access from outside the crypto module.
pub use self::diffie_hellman_algorithm::{DiffieHellman, ExchangeState, KeyPair};
pub use self::key_exchange_traits::{exchange, ExchangeOutcome, KeyExchangeAlgorithm};
pub use self::params::{DhParameters, DEFAULT_KEY_BIT_LENGTH};
pub use self::private_key::PrivateKey;
