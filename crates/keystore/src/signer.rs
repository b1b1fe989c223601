use std::sync::Arc;

use key_utils::{CryptoEngine, PrivateKey, PublicKey};

use crate::Error;

/// Capability to sign messages with one private key.
pub trait Signer: std::fmt::Debug + Send + Sync {
    /// Signs `message` and returns the raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error>;

    /// Advisory JWS algorithm name of the bound key, if known.
    fn algorithm(&self) -> Option<&str> {
        None
    }
}

/// Signer bound at construction to a stored private key.
pub struct KeySigner {
    engine: Arc<dyn CryptoEngine>,
    private_key: PrivateKey,
}

impl KeySigner {
    pub(crate) fn new(engine: Arc<dyn CryptoEngine>, private_key: PrivateKey) -> Self {
        Self {
            engine,
            private_key,
        }
    }

    /// Public half of the bound key.
    pub fn public_key(&self) -> &PublicKey {
        self.private_key.public_key()
    }
}

impl Signer for KeySigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        self.engine
            .sign(&self.private_key, message)
            .map_err(Error::crypto)
    }

    fn algorithm(&self) -> Option<&str> {
        let public = self.private_key.public_key();
        public
            .alg
            .as_deref()
            .or_else(|| public.curve().ok().map(|curve| curve.algorithm()))
    }
}

impl std::fmt::Debug for KeySigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySigner")
            .field("crv", &self.public_key().crv())
            .field("alg", &self.algorithm())
            .finish()
    }
}
