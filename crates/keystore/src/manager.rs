use std::sync::Arc;

use key_utils::{CryptoEngine, Curve, DefaultEngine, Error as CryptoError, Key, PrivateKey};

use crate::{
    repository::{InMemoryRepository, KeyRepository},
    signer::{KeySigner, Signer},
    Error, ErrorKind,
};

/// Holds private keys addressed by the thumbprint of their public projection
/// and hands out signers bound to them.
///
/// Clones share the same engine and repository.
#[derive(Clone)]
pub struct KeyManager {
    engine: Arc<dyn CryptoEngine>,
    repository: Arc<dyn KeyRepository>,
}

impl KeyManager {
    /// Create a key manager on top of the given engine and repository.
    pub fn new(engine: Arc<dyn CryptoEngine>, repository: Arc<dyn KeyRepository>) -> Self {
        Self { engine, repository }
    }

    /// Create a key manager keeping its keys in memory with the default engine.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(DefaultEngine), Arc::new(InMemoryRepository::new()))
    }

    /// Generate a fresh private key on the given curve.
    ///
    /// The key is not stored; pass it to [`KeyManager::import_private_key`] to keep it.
    pub fn generate_private_key(&self, curve: Curve) -> Result<Key, Error> {
        let key = self.engine.generate(curve).map_err(Error::crypto)?;
        Ok(Key::Private(key))
    }

    /// Store a private key and return its public projection.
    ///
    /// Importing a key under an already used thumbprint replaces the stored key.
    pub fn import_private_key(&self, key: Key) -> Result<Key, Error> {
        let Key::Private(private_key) = key else {
            return Err(Error::from_msg(
                ErrorKind::Parameter,
                "key must be a private key",
            ));
        };

        let public_key = Key::Public(private_key.to_public());
        let id = self.engine.thumbprint(&public_key)?;
        self.check_key_pair(&private_key)?;

        self.repository.store(&id, private_key)?;
        tracing::debug!(thumbprint = %id, "imported private key");

        Ok(public_key)
    }

    /// Look up the private key matching a public key and bind a signer to it.
    pub fn get_signer(&self, key: &Key) -> Result<Arc<dyn Signer>, Error> {
        if key.is_private() {
            return Err(Error::from_msg(
                ErrorKind::Parameter,
                "key must be a public key",
            ));
        }

        let id = self.engine.thumbprint(key)?;
        let private_key = self.repository.find(&id)?.ok_or_else(|| {
            Error::from_msg(
                ErrorKind::NotFound,
                format!("signer not found for public key with thumbprint {id}"),
            )
        })?;

        tracing::debug!(thumbprint = %id, "bound signer to stored key");

        Ok(Arc::new(KeySigner::new(self.engine.clone(), private_key)))
    }

    // A signer bound to `d` must produce signatures that verify against `x`/`y`.
    fn check_key_pair(&self, private_key: &PrivateKey) -> Result<(), Error> {
        match self.engine.public_key(private_key) {
            Ok(derived) if derived.params == private_key.public_key().params => Ok(()),
            Ok(_) => Err(Error::from_msg(
                ErrorKind::Parameter,
                "private key does not match its public members",
            )),
            // Keys on curves the engine cannot handle are kept; signing them fails later.
            Err(CryptoError::UnsupportedCurve(_)) => Ok(()),
            Err(err) => Err(Error::new(ErrorKind::Parameter, err)),
        }
    }

    /// Every stored private key, in no particular order.
    pub fn export_private_keys(&self) -> Result<Vec<Key>, Error> {
        let keys = self.repository.list()?;
        Ok(keys.into_iter().map(Key::Private).collect())
    }
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyManager").finish_non_exhaustive()
    }
}
