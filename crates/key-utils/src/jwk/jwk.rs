use serde::{Deserialize, Serialize};

use super::{
    key::{Ec, Key, KeyParams, Okp, PrivateKey, PublicKey},
    secret::Secret,
};
use crate::crypto::Error;

/// A JSON Web Key as it appears on the wire.
///
/// This type is defined in [RFC7517 Section 4]. Only the members relevant to signing keys are
/// kept. It is an edge format: convert it into a [`Key`] before doing anything with it, which
/// validates that the key has a coherent shape.
///
/// [RFC7517 Section 4]: https://datatracker.ietf.org/doc/html/rfc7517#section-4
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Jwk {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alg: Option<String>,

    pub kty: String,

    pub crv: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<Secret>,

    #[serde(default)]
    pub x: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<String>,
}

impl Jwk {
    pub fn is_private_key(&self) -> bool {
        self.d.is_some()
    }
}

impl TryFrom<Jwk> for Key {
    type Error = Error;

    fn try_from(jwk: Jwk) -> Result<Self, Self::Error> {
        let Jwk {
            alg,
            kty,
            crv,
            d,
            x,
            y,
        } = jwk;

        if crv.is_empty() {
            return Err(Error::InvalidParameter("crv must not be empty".to_string()));
        }

        let params = match (kty.as_str(), y) {
            ("OKP", None) => KeyParams::Okp(Okp { crv, x }),
            ("OKP", Some(_)) => {
                return Err(Error::InvalidParameter(
                    "y must be absent from an OKP key".to_string(),
                ))
            }
            ("EC", Some(y)) => KeyParams::Ec(Ec { crv, x, y }),
            ("EC", None) => {
                return Err(Error::InvalidParameter(
                    "y is required for an EC key".to_string(),
                ))
            }
            _ => return Err(Error::UnsupportedKeyType(kty)),
        };

        let public = PublicKey { alg, params };
        Ok(match d {
            Some(d) => Key::Private(PrivateKey::new(public, d)),
            None => Key::Public(public),
        })
    }
}

impl From<Key> for Jwk {
    fn from(key: Key) -> Self {
        match key {
            Key::Private(private) => private.into(),
            Key::Public(public) => public.into(),
        }
    }
}

impl From<PublicKey> for Jwk {
    fn from(key: PublicKey) -> Self {
        let PublicKey { alg, params } = key;
        match params {
            KeyParams::Okp(Okp { crv, x }) => Jwk {
                alg,
                kty: "OKP".to_string(),
                crv,
                x,
                ..Default::default()
            },
            KeyParams::Ec(Ec { crv, x, y }) => Jwk {
                alg,
                kty: "EC".to_string(),
                crv,
                x,
                y: Some(y),
                ..Default::default()
            },
        }
    }
}

impl From<PrivateKey> for Jwk {
    fn from(key: PrivateKey) -> Self {
        let d = key.secret().clone();
        Jwk {
            d: Some(d),
            ..Jwk::from(key.to_public())
        }
    }
}

impl TryFrom<Jwk> for PublicKey {
    type Error = Error;

    fn try_from(jwk: Jwk) -> Result<Self, Self::Error> {
        match Key::try_from(jwk)? {
            Key::Public(public) => Ok(public),
            Key::Private(_) => Err(Error::InvalidParameter(
                "expected a public key but d is present".to_string(),
            )),
        }
    }
}

impl TryFrom<Jwk> for PrivateKey {
    type Error = Error;

    fn try_from(jwk: Jwk) -> Result<Self, Self::Error> {
        match Key::try_from(jwk)? {
            Key::Private(private) => Ok(private),
            Key::Public(_) => Err(Error::InvalidParameter(
                "expected a private key but d is missing".to_string(),
            )),
        }
    }
}
