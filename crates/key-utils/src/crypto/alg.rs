use std::{fmt, str::FromStr};

use super::errors::Error;

/// Curves the default engine can generate keys for and sign with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Curve {
    /// EdDSA over Edwards25519.
    Ed25519,
    /// ECDSA over the 256-bit Koblitz curve.
    Secp256k1,
}

use Curve::*;

impl Curve {
    /// Returns the `crv` member of JWKs on this curve.
    pub fn name(&self) -> &'static str {
        match self {
            Ed25519 => "Ed25519",
            Secp256k1 => "secp256k1",
        }
    }

    /// Returns the `kty` member of JWKs on this curve.
    pub fn key_type(&self) -> &'static str {
        match self {
            Ed25519 => "OKP",
            Secp256k1 => "EC",
        }
    }

    /// Returns the JOSE signature algorithm identifier used with this curve.
    pub fn algorithm(&self) -> &'static str {
        match self {
            Ed25519 => "EdDSA",
            Secp256k1 => "ES256K",
        }
    }

    /// Length in bytes of the signatures produced on this curve.
    pub fn signature_length(&self) -> usize {
        64
    }

    /// Resolves the curve from the `kty` and `crv` members of a key.
    pub fn from_jwk_members(kty: &str, crv: &str) -> Result<Self, Error> {
        let curve: Curve = crv.parse()?;
        if curve.key_type() != kty {
            return Err(Error::UnsupportedCurve(format!("{crv} with key type {kty}")));
        }
        Ok(curve)
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "ed25519" => Ok(Ed25519),
            "secp256k1" | "p-256k" | "es256k" => Ok(Secp256k1),
            _ => Err(Error::UnsupportedCurve(input.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
