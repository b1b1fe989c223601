use super::{
    alg::Curve,
    ed25519::Ed25519KeyPair,
    errors::Error,
    secp256k1::Secp256k1KeyPair,
    traits::{Generate, KeyMaterial},
    utils::{b64url_decode, b64url_encode},
};
use crate::jwk::{Ec, KeyParams, Okp, PrivateKey, PublicKey, Secret};

impl From<&Ed25519KeyPair> for PublicKey {
    fn from(keypair: &Ed25519KeyPair) -> Self {
        PublicKey {
            alg: Some(Curve::Ed25519.algorithm().to_string()),
            params: KeyParams::Okp(Okp {
                crv: Curve::Ed25519.name().to_string(),
                x: b64url_encode(&keypair.public_key_bytes()),
            }),
        }
    }
}

impl TryFrom<Ed25519KeyPair> for PrivateKey {
    type Error = Error;

    fn try_from(keypair: Ed25519KeyPair) -> Result<Self, Self::Error> {
        let d = Secret::from_bytes(&keypair.private_key_bytes()?);
        Ok(PrivateKey::new(PublicKey::from(&keypair), d))
    }
}

impl TryFrom<&PrivateKey> for Ed25519KeyPair {
    type Error = Error;

    fn try_from(key: &PrivateKey) -> Result<Self, Self::Error> {
        expect_curve(key.public_key(), Curve::Ed25519)?;
        Ed25519KeyPair::from_secret_key(&key.secret().decode()?)
    }
}

impl TryFrom<&PublicKey> for Ed25519KeyPair {
    type Error = Error;

    fn try_from(key: &PublicKey) -> Result<Self, Self::Error> {
        expect_curve(key, Curve::Ed25519)?;
        Ed25519KeyPair::from_public_key(&b64url_decode("x", key.x())?)
    }
}

impl From<&Secp256k1KeyPair> for PublicKey {
    fn from(keypair: &Secp256k1KeyPair) -> Self {
        let (x, y) = keypair.coordinates();
        PublicKey {
            alg: Some(Curve::Secp256k1.algorithm().to_string()),
            params: KeyParams::Ec(Ec {
                crv: Curve::Secp256k1.name().to_string(),
                x: b64url_encode(&x),
                y: b64url_encode(&y),
            }),
        }
    }
}

impl TryFrom<Secp256k1KeyPair> for PrivateKey {
    type Error = Error;

    fn try_from(keypair: Secp256k1KeyPair) -> Result<Self, Self::Error> {
        let d = Secret::from_bytes(&keypair.private_key_bytes()?);
        Ok(PrivateKey::new(PublicKey::from(&keypair), d))
    }
}

impl TryFrom<&PrivateKey> for Secp256k1KeyPair {
    type Error = Error;

    fn try_from(key: &PrivateKey) -> Result<Self, Self::Error> {
        expect_curve(key.public_key(), Curve::Secp256k1)?;
        Secp256k1KeyPair::from_secret_key(&key.secret().decode()?)
    }
}

impl TryFrom<&PublicKey> for Secp256k1KeyPair {
    type Error = Error;

    fn try_from(key: &PublicKey) -> Result<Self, Self::Error> {
        expect_curve(key, Curve::Secp256k1)?;
        let y = key
            .y()
            .ok_or_else(|| Error::InvalidPublicKey("missing y".to_string()))?;
        Secp256k1KeyPair::from_coordinates(&b64url_decode("x", key.x())?, &b64url_decode("y", y)?)
    }
}

fn expect_curve(key: &PublicKey, expected: Curve) -> Result<(), Error> {
    match key.curve()? {
        curve if curve == expected => Ok(()),
        curve => Err(Error::UnsupportedCurve(format!(
            "expected a {expected} key, got {curve}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::CoreSign;
    use crate::jwk::{Jwk, Key};

    // Tests conversion between Ed25519KeyPair and the JWK types
    #[test]
    fn test_conversion_ed25519_jwk() -> Result<(), Error> {
        let seed = b"TMwLj2p2qhcuVhaFAj3QkkJGhK6pdyKx";
        let payload = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

        let keypair = Ed25519KeyPair::new_with_seed(seed)?;
        let signature = keypair.sign(payload)?;

        let jwk: PrivateKey = keypair.try_into()?;
        assert_eq!(jwk.public_key().alg.as_deref(), Some("EdDSA"));

        let keypair = Ed25519KeyPair::try_from(&jwk)?;
        assert!(keypair.verify(payload, &signature).is_ok());

        let keypair = Ed25519KeyPair::try_from(jwk.public_key())?;
        assert!(keypair.verify(payload, &signature).is_ok());

        Ok(())
    }

    // Tests conversion from a public JWK to Ed25519KeyPair with external signature
    #[test]
    fn test_conversion_ed25519_jwk_with_external_signature() -> Result<(), Error> {
        let jwk: Jwk = serde_json::from_str(
            r#"{
                "kty": "OKP",
                "crv": "Ed25519",
                "x": "tjOTPcs4OEMNrmn2ScYZDS-aCCbRFhJgaAmGnRsdmEo"
            }"#,
        )
        .unwrap();

        let payload = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
        let signature = b64url_decode(
            "signature",
            "2QH7Qrt8clEn4ETh9lgcGUyo26cJj1U8U0CBFQvgCWHe1dwXXXb16SzPTVNVGm-J6m6eALjWrxuJfmbApdoBAQ",
        )?;

        let key = PublicKey::try_from(jwk)?;
        let keypair = Ed25519KeyPair::try_from(&key)?;
        assert!(keypair.verify(payload, &signature).is_ok());

        Ok(())
    }

    #[test]
    fn test_conversion_secp256k1_jwk() -> Result<(), Error> {
        let keypair = Secp256k1KeyPair::new_with_seed(b"Sample seed bytes of thirtytwo!b")?;
        let jwk: PrivateKey = keypair.try_into()?;

        let expected: Key = serde_json::from_str(
            r#"{
                "alg": "ES256K",
                "kty": "EC",
                "crv": "secp256k1",
                "x": "hn__YWXquStg2QnVnxGIBvlk1zGxA1dper2gylqA6AA",
                "y": "aGmeHbiDHydHCMj0xCk7EFePOJzxjOwwh3elw4y_94E",
                "d": "U2FtcGxlIHNlZWQgYnl0ZXMgb2YgdGhpcnR5dHdvIWI"
            }"#,
        )
        .unwrap();
        assert_eq!(Key::Private(jwk.clone()), expected);

        let signature = Secp256k1KeyPair::try_from(&jwk)?.sign(b"payload")?;
        let public = Secp256k1KeyPair::try_from(jwk.public_key())?;
        assert!(public.verify(b"payload", &signature).is_ok());

        Ok(())
    }

    #[test]
    fn test_curve_mismatch() {
        let keypair = Ed25519KeyPair::new().unwrap();
        let jwk: PrivateKey = keypair.try_into().unwrap();

        assert!(matches!(
            Secp256k1KeyPair::try_from(&jwk),
            Err(Error::UnsupportedCurve(_))
        ));
    }
}
