use serde::{Deserialize, Serialize};

use super::{jwk::Jwk, secret::Secret, thumbprint::compute_thumbprint};
use crate::crypto::{Curve, Error};

/// An Octet Key Pair (`kty` = `OKP`), e.g. an Ed25519 key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Okp {
    /// The curve name.
    pub crv: String,

    /// The public key, base64url encoded.
    pub x: String,
}

/// An elliptic-curve key (`kty` = `EC`), e.g. a secp256k1 key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ec {
    /// The curve name.
    pub crv: String,

    /// The public x coordinate, base64url encoded.
    pub x: String,

    /// The public y coordinate, base64url encoded.
    pub y: String,
}

/// Public members of a key, discriminated by key type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyParams {
    Okp(Okp),
    Ec(Ec),
}

/// The publicly shareable part of a key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Jwk", into = "Jwk")]
pub struct PublicKey {
    /// Advisory signature algorithm.
    pub alg: Option<String>,
    pub params: KeyParams,
}

impl PublicKey {
    pub fn kty(&self) -> &str {
        match self.params {
            KeyParams::Okp(_) => "OKP",
            KeyParams::Ec(_) => "EC",
        }
    }

    pub fn crv(&self) -> &str {
        match &self.params {
            KeyParams::Okp(okp) => &okp.crv,
            KeyParams::Ec(ec) => &ec.crv,
        }
    }

    pub fn x(&self) -> &str {
        match &self.params {
            KeyParams::Okp(okp) => &okp.x,
            KeyParams::Ec(ec) => &ec.x,
        }
    }

    pub fn y(&self) -> Option<&str> {
        match &self.params {
            KeyParams::Okp(_) => None,
            KeyParams::Ec(ec) => Some(&ec.y),
        }
    }

    /// Resolves the curve this key lives on, failing if the engine does not support it.
    pub fn curve(&self) -> Result<Curve, Error> {
        Curve::from_jwk_members(self.kty(), self.crv())
    }

    /// Computes the RFC 7638 thumbprint of this key.
    pub fn thumbprint(&self) -> Result<String, Error> {
        compute_thumbprint(self)
    }
}

/// A key holding private material alongside its public members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Jwk", into = "Jwk")]
pub struct PrivateKey {
    public: PublicKey,
    d: Secret,
}

impl PrivateKey {
    pub fn new(public: PublicKey, d: Secret) -> Self {
        Self { public, d }
    }

    /// Borrows the public members of this key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Returns the public projection of this key.
    pub fn to_public(&self) -> PublicKey {
        self.public.clone()
    }

    pub fn secret(&self) -> &Secret {
        &self.d
    }
}

/// A JSON Web Key that is either private or public.
///
/// The presence of the private member `d` is the sole discriminator. Keys coming from the wire
/// are converted from [`Jwk`], which also validates that `y` is present exactly for `EC` keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Jwk", into = "Jwk")]
pub enum Key {
    Private(PrivateKey),
    Public(PublicKey),
}

impl Key {
    pub fn is_private(&self) -> bool {
        matches!(self, Key::Private(_))
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Key::Public(_))
    }

    /// Returns a copy of this key with the private member cleared.
    pub fn public_projection(&self) -> Key {
        Key::Public(self.as_public().clone())
    }

    /// Borrows the public members of this key, whether it is private or not.
    pub fn as_public(&self) -> &PublicKey {
        match self {
            Key::Private(private) => private.public_key(),
            Key::Public(public) => public,
        }
    }

    pub fn as_private(&self) -> Option<&PrivateKey> {
        match self {
            Key::Private(private) => Some(private),
            Key::Public(_) => None,
        }
    }

    pub fn alg(&self) -> Option<&str> {
        self.as_public().alg.as_deref()
    }

    pub fn kty(&self) -> &str {
        self.as_public().kty()
    }

    pub fn crv(&self) -> &str {
        self.as_public().crv()
    }

    /// Computes the thumbprint of the public projection of this key.
    ///
    /// Private and public keys of the same pair share their thumbprint.
    pub fn thumbprint(&self) -> Result<String, Error> {
        self.as_public().thumbprint()
    }
}

impl From<PublicKey> for Key {
    fn from(key: PublicKey) -> Self {
        Key::Public(key)
    }
}

impl From<PrivateKey> for Key {
    fn from(key: PrivateKey) -> Self {
        Key::Private(key)
    }
}
