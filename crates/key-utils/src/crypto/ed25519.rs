use ed25519_dalek::{
    Signature, Signer, SigningKey, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH,
};

use super::{
    errors::Error,
    traits::{CoreSign, Generate, KeyMaterial},
    utils::{generate_seed, to_array},
    AsymmetricKey,
};

/// A wrapper struct for an Ed25519 asymmetric key pair.
pub type Ed25519KeyPair = AsymmetricKey<VerifyingKey, SigningKey>;

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl KeyMaterial for Ed25519KeyPair {
    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.as_bytes().to_vec()
    }

    fn private_key_bytes(&self) -> Result<[u8; 32], Error> {
        match &self.secret_key {
            Some(sk) => Ok(sk.to_bytes()),
            None => Err(Error::InvalidSecretKey("key pair has no secret key".to_string())),
        }
    }
}

impl Generate for Ed25519KeyPair {
    fn new_with_seed(seed: &[u8]) -> Result<Ed25519KeyPair, Error> {
        let secret_seed = generate_seed(seed)?;
        let sk = SigningKey::from_bytes(&secret_seed);
        Ok(Ed25519KeyPair {
            public_key: sk.verifying_key(),
            secret_key: Some(sk),
        })
    }

    fn from_public_key(public_key: &[u8]) -> Result<Ed25519KeyPair, Error> {
        let bytes = to_array::<PUBLIC_KEY_LENGTH>(public_key)?;
        let vk = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        Ok(Ed25519KeyPair {
            public_key: vk,
            secret_key: None,
        })
    }

    fn from_secret_key(secret_key: &[u8]) -> Result<Ed25519KeyPair, Error> {
        // Some implementations store the public key right after the secret seed.
        let seed = match secret_key.len() {
            64 => &secret_key[..SECRET_KEY_LENGTH],
            _ => secret_key,
        };
        let sk = SigningKey::from_bytes(&to_array::<SECRET_KEY_LENGTH>(seed)?);
        Ok(Ed25519KeyPair {
            public_key: sk.verifying_key(),
            secret_key: Some(sk),
        })
    }
}

impl CoreSign for Ed25519KeyPair {
    /// Signs the given payload and returns the 64 byte signature.
    ///
    /// # Example
    ///
    /// ```
    /// use key_utils::crypto::{CoreSign, Ed25519KeyPair, Generate};
    ///
    /// let kp = Ed25519KeyPair::new().unwrap();
    /// let signature = kp.sign(b"Hello, World!").unwrap();
    /// assert_eq!(signature.len(), 64);
    /// ```
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error> {
        match &self.secret_key {
            Some(sk) => sk
                .try_sign(payload)
                .map(|signature| signature.to_bytes().to_vec())
                .map_err(|e| Error::SignatureError(e.to_string())),
            None => Err(Error::InvalidSecretKey("key pair has no secret key".to_string())),
        }
    }

    /// Verifies the signature of the given payload.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error> {
        let sig = Signature::from_slice(signature)
            .map_err(|e| Error::CanNotRetrieveSignature(e.to_string()))?;
        self.public_key
            .verify(payload, &sig)
            .map_err(|_| Error::VerificationError)
    }
}
