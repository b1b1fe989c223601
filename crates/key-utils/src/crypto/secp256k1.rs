use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};

use super::{
    errors::Error,
    traits::{CoreSign, Generate, KeyMaterial},
    utils::{generate_seed, to_array},
    AsymmetricKey,
};

/// A wrapper struct for a secp256k1 asymmetric key pair.
///
/// Signatures are ECDSA over SHA-256 with RFC 6979 nonces, encoded as 64 bytes `r || s`
/// with `s` normalized to its low form.
pub type Secp256k1KeyPair = AsymmetricKey<VerifyingKey, SigningKey>;

/// Length of an uncompressed SEC1 point: `0x04 || x || y`.
pub(crate) const UNCOMPRESSED_POINT_LENGTH: usize = 65;

impl std::fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl KeyMaterial for Secp256k1KeyPair {
    /// Returns the uncompressed SEC1 encoding of the public point.
    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_encoded_point(false).as_bytes().to_vec()
    }

    fn private_key_bytes(&self) -> Result<[u8; 32], Error> {
        match &self.secret_key {
            Some(sk) => to_array(sk.to_bytes().as_slice()),
            None => Err(Error::InvalidSecretKey("key pair has no secret key".to_string())),
        }
    }
}

impl Secp256k1KeyPair {
    /// Splits the public point into its affine `x` and `y` coordinates.
    pub fn coordinates(&self) -> ([u8; 32], [u8; 32]) {
        let point = self.public_key.to_encoded_point(false);
        let bytes = point.as_bytes();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..65]);
        (x, y)
    }

    /// Rebuilds a public-only key pair from affine coordinates.
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self, Error> {
        let mut point = Vec::with_capacity(UNCOMPRESSED_POINT_LENGTH);
        point.push(0x04);
        point.extend_from_slice(&to_array::<32>(x)?);
        point.extend_from_slice(&to_array::<32>(y)?);
        Self::from_public_key(&point)
    }
}

impl Generate for Secp256k1KeyPair {
    fn new_with_seed(seed: &[u8]) -> Result<Secp256k1KeyPair, Error> {
        let secret_seed = generate_seed(seed)?;
        // Zero and values above the group order are not valid scalars.
        let sk = SigningKey::from_slice(&secret_seed).map_err(|_| Error::InvalidSeed)?;
        Ok(Secp256k1KeyPair {
            public_key: *sk.verifying_key(),
            secret_key: Some(sk),
        })
    }

    /// Accepts a compressed or uncompressed SEC1 encoded point.
    fn from_public_key(public_key: &[u8]) -> Result<Secp256k1KeyPair, Error> {
        let vk = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        Ok(Secp256k1KeyPair {
            public_key: vk,
            secret_key: None,
        })
    }

    fn from_secret_key(secret_key: &[u8]) -> Result<Secp256k1KeyPair, Error> {
        let bytes = to_array::<32>(secret_key)?;
        let sk = SigningKey::from_slice(&bytes)
            .map_err(|e| Error::InvalidSecretKey(e.to_string()))?;
        Ok(Secp256k1KeyPair {
            public_key: *sk.verifying_key(),
            secret_key: Some(sk),
        })
    }
}

impl CoreSign for Secp256k1KeyPair {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, Error> {
        match &self.secret_key {
            Some(sk) => {
                let signature: Signature = sk
                    .try_sign(payload)
                    .map_err(|e| Error::SignatureError(e.to_string()))?;
                Ok(signature.to_bytes().to_vec())
            }
            None => Err(Error::InvalidSecretKey("key pair has no secret key".to_string())),
        }
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), Error> {
        let sig = Signature::from_slice(signature)
            .map_err(|e| Error::CanNotRetrieveSignature(e.to_string()))?;
        self.public_key
            .verify(payload, &sig)
            .map_err(|_| Error::VerificationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let keypair = Secp256k1KeyPair::new().unwrap();
        assert_eq!(keypair.public_key_bytes().len(), UNCOMPRESSED_POINT_LENGTH);
        assert_eq!(keypair.public_key_bytes()[0], 0x04);
        assert_eq!(keypair.private_key_bytes().unwrap().len(), 32);
    }

    #[test]
    fn test_new_with_seed() {
        let seed = b"Sample seed bytes of thirtytwo!b";
        let keypair = Secp256k1KeyPair::new_with_seed(seed).unwrap();

        assert_eq!(
            hex::encode(keypair.public_key_bytes()),
            "04867fff6165eab92b60d909d59f118806f964d731b10357697abda0ca5a80e800\
             68699e1db8831f274708c8f4c4293b10578f389cf18cec308777a5c38cbff781"
        );
        assert_eq!(&keypair.private_key_bytes().unwrap(), seed);
    }

    #[test]
    fn test_invalid_scalar_seed() {
        assert_eq!(
            Secp256k1KeyPair::new_with_seed(&[0u8; 32]).unwrap_err(),
            Error::InvalidSeed
        );
        assert_eq!(
            Secp256k1KeyPair::new_with_seed(&[0xffu8; 32]).unwrap_err(),
            Error::InvalidSeed
        );
    }

    #[test]
    fn test_sign_verify() {
        let keypair = Secp256k1KeyPair::new().unwrap();
        let signature = keypair.sign(b"hello world").unwrap();
        assert_eq!(signature.len(), 64);

        assert!(keypair.verify(b"hello world", &signature).is_ok());
        assert_eq!(
            keypair.verify(b"hello world!", &signature).unwrap_err(),
            Error::VerificationError
        );
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let keypair = Secp256k1KeyPair::new_with_seed(b"TMwLj2p2qhcuVhaFAj3QkkJGhK6pdyKx").unwrap();
        assert_eq!(keypair.sign(b"hello").unwrap(), keypair.sign(b"hello").unwrap());
    }

    #[test]
    fn test_coordinates_round_trip() {
        let keypair = Secp256k1KeyPair::new().unwrap();
        let (x, y) = keypair.coordinates();

        let public_only = Secp256k1KeyPair::from_coordinates(&x, &y).unwrap();
        assert_eq!(public_only.public_key_bytes(), keypair.public_key_bytes());

        let signature = keypair.sign(b"payload").unwrap();
        assert!(public_only.verify(b"payload", &signature).is_ok());
        assert!(matches!(public_only.sign(b"payload"), Err(Error::InvalidSecretKey(_))));
    }

    #[test]
    fn test_off_curve_point_is_rejected() {
        assert!(matches!(
            Secp256k1KeyPair::from_coordinates(&[1u8; 32], &[2u8; 32]),
            Err(Error::InvalidPublicKey(_))
        ));
    }
}
