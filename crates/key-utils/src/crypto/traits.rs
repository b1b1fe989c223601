//! Traits for cryptographic operations.

// We are designing the application to support many curve algorithms.
// This module defines interfaces common to all curves, so that the curve can change
// without altering consuming modules.

use super::{alg::Curve, errors::Error};
use crate::jwk::{Key, PrivateKey, PublicKey};

/// A trait for types that hold key material bytes.
pub trait KeyMaterial {
    /// Returns the raw public key bytes in the encoding native to the curve.
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Returns the raw secret key bytes.
    ///
    /// Fails if the key pair only holds a public key.
    fn private_key_bytes(&self) -> Result<[u8; 32], Error>;
}

/// A trait for types that support key generation.
pub trait Generate: KeyMaterial {
    /// Generates a new random key.
    fn new() -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::new_with_seed(&[])
    }

    /// Generates a new key deterministically using the given seed.
    ///
    /// A seed that is not exactly 32 bytes long is replaced by a random one.
    fn new_with_seed(seed: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Generates a new instance from an existing public key.
    fn from_public_key(public_key: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Generates a new instance from an existing secret key.
    fn from_secret_key(secret_key: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;
}

/// A trait for types that support signature operations.
pub trait CoreSign {
    /// Performs a sign operation.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error>;

    /// Performs a verify operation.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error>;
}

/// The only component allowed to perform curve math, hashing or randomness.
///
/// Implementations own no state that outlives a call, so a single engine can be shared
/// between any number of key managers and signers.
pub trait CryptoEngine: Send + Sync {
    /// Generates a fresh private key on the given curve.
    fn generate(&self, curve: Curve) -> Result<PrivateKey, Error>;

    /// Computes the thumbprint of a public key, or of the public projection of a private key.
    fn thumbprint(&self, key: &Key) -> Result<String, Error> {
        key.thumbprint()
    }

    /// Derives the public members of a private key from its private member `d`.
    ///
    /// The `alg` of the result is the curve's default.
    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, Error>;

    /// Signs an arbitrary message with a private key.
    fn sign(&self, private_key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, Error>;

    /// Verifies a signature produced by [`CryptoEngine::sign`].
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &[u8])
        -> Result<(), Error>;
}
