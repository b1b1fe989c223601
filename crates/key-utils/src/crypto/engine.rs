use super::{
    alg::Curve,
    ed25519::Ed25519KeyPair,
    errors::Error,
    secp256k1::Secp256k1KeyPair,
    traits::{CoreSign, CryptoEngine, Generate},
};
use crate::jwk::{PrivateKey, PublicKey};

/// Engine backed by `ed25519-dalek` and `k256`, dispatching on the curve of each key.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEngine;

impl CryptoEngine for DefaultEngine {
    fn generate(&self, curve: Curve) -> Result<PrivateKey, Error> {
        match curve {
            Curve::Ed25519 => Ed25519KeyPair::new()?.try_into(),
            Curve::Secp256k1 => Secp256k1KeyPair::new()?.try_into(),
        }
    }

    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, Error> {
        match private_key.public_key().curve()? {
            Curve::Ed25519 => Ok(PublicKey::from(&Ed25519KeyPair::try_from(private_key)?)),
            Curve::Secp256k1 => Ok(PublicKey::from(&Secp256k1KeyPair::try_from(private_key)?)),
        }
    }

    fn sign(&self, private_key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, Error> {
        match private_key.public_key().curve()? {
            Curve::Ed25519 => Ed25519KeyPair::try_from(private_key)?.sign(message),
            Curve::Secp256k1 => Secp256k1KeyPair::try_from(private_key)?.sign(message),
        }
    }

    fn verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), Error> {
        match public_key.curve()? {
            Curve::Ed25519 => Ed25519KeyPair::try_from(public_key)?.verify(message, signature),
            Curve::Secp256k1 => Secp256k1KeyPair::try_from(public_key)?.verify(message, signature),
        }
    }
}
