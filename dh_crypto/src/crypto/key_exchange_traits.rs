use crate::error::ComputationError;

/// A two-party key agreement where each side owns its key pair.
pub trait KeyExchangeAlgorithm: Sized {
    type PublicKey: Clone;
    type SharedSecret: PartialEq;

    fn public_key(&self) -> &Self::PublicKey;
    fn derive_shared_secret(
        &mut self,
        other_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret, ComputationError>;
}

/// Result of running both sides of an exchange.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome<S> {
    pub first: S,
    pub second: S,
}

impl<S: PartialEq> ExchangeOutcome<S> {
    pub fn agreed(&self) -> bool {
        self.first == self.second
    }
}

/// Swaps public keys between `first` and `second` and derives on both sides.
pub fn exchange<K: KeyExchangeAlgorithm>(
    first: &mut K,
    second: &mut K,
) -> Result<ExchangeOutcome<K::SharedSecret>, ComputationError> {
    let first_public = first.public_key().clone();
    let second_public = second.public_key().clone();

    Ok(ExchangeOutcome {
        first: first.derive_shared_secret(&second_public)?,
        second: second.derive_shared_secret(&first_public)?,
    })
}
