pub mod crypto;
pub mod error;

pub use crypto::diffie_hellman_algorithm::{DiffieHellman, ExchangeState, KeyPair};
pub use crypto::key_exchange_traits::{exchange, ExchangeOutcome, KeyExchangeAlgorithm};
pub use crypto::params::{DhParameters, DEFAULT_KEY_BIT_LENGTH};
pub use crypto::radix::parse;
pub use error::{ComputationError, ParseError};
