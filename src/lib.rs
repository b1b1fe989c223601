use std::{path::PathBuf, sync::Arc};

use eyre::{Result, WrapErr};
use key_utils::{CryptoEngine, Curve, DefaultEngine, Key};
use keystore::{FileRepository, KeyManager};

const DEFAULT_MESSAGE: &str = "hello";

/// Settings of a signing run, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Curve of the generated key, from `KEYSTORE_CURVE`.
    pub curve: Curve,
    /// Key store file, from `KEYSTORE_PATH`. Keys stay in memory when unset.
    pub store_path: Option<PathBuf>,
    /// Message to sign, from `KEYSTORE_MESSAGE`.
    pub message: String,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// `message` overrides `KEYSTORE_MESSAGE` when given.
    pub fn from_env(message: Option<String>) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), message)
    }

    fn from_lookup<F>(lookup: F, message: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let curve = match lookup("KEYSTORE_CURVE") {
            Some(curve) => curve
                .parse()
                .wrap_err("KEYSTORE_CURVE does not name a supported curve")?,
            None => Curve::Ed25519,
        };

        Ok(Config {
            curve,
            store_path: lookup("KEYSTORE_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            message: message
                .or_else(|| lookup("KEYSTORE_MESSAGE"))
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned()),
        })
    }

    /// Build the key manager backing this configuration.
    pub fn key_manager(&self) -> Result<KeyManager> {
        match &self.store_path {
            Some(path) => {
                let repository = FileRepository::open(path)
                    .wrap_err_with(|| format!("failed to open key store {}", path.display()))?;
                Ok(KeyManager::new(Arc::new(DefaultEngine), Arc::new(repository)))
            }
            None => Ok(KeyManager::in_memory()),
        }
    }
}

/// Result of a signing run.
#[derive(Debug)]
pub struct Outcome {
    pub public_key: Key,
    pub signature: Vec<u8>,
}

/// Generate a key, import it, sign the configured message with it and verify the signature.
pub fn run(config: &Config) -> Result<Outcome> {
    let manager = config.key_manager()?;

    let key = manager.generate_private_key(config.curve)?;
    let public_key = manager.import_private_key(key)?;
    let thumbprint = public_key.thumbprint()?;
    tracing::info!(curve = %config.curve, %thumbprint, "imported key");

    let signer = manager.get_signer(&public_key)?;
    let signature = signer.sign(config.message.as_bytes())?;

    DefaultEngine
        .verify(public_key.as_public(), config.message.as_bytes(), &signature)
        .wrap_err("signature does not verify against the imported key")?;

    Ok(Outcome {
        public_key,
        signature,
    })
}
