//! Private key material wrapper.
//!
//! A [`Secret`] holds the base64url encoded private scalar of a JWK. It is wiped from memory
//! when dropped, never shows up in debug output and compares in constant time.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{
    utils::{b64url_decode, b64url_encode},
    Error,
};

#[derive(Clone, Default)]
pub struct Secret {
    encoded: String,
}

impl Secret {
    /// Wraps an already base64url encoded private member.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Encodes raw private key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(b64url_encode(bytes))
    }

    /// Expose the encoded secret for read-only access.
    pub fn expose_secret(&self) -> &str {
        &self.encoded
    }

    /// Decodes the secret into bytes that are wiped once dropped.
    pub fn decode(&self) -> Result<Zeroizing<Vec<u8>>, Error> {
        b64url_decode("d", &self.encoded).map(Zeroizing::new)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.encoded.zeroize();
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.encoded.as_bytes().ct_eq(other.encoded.as_bytes()).into()
    }
}

impl Eq for Secret {}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Secret::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = Secret::new("nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A");
        assert_eq!(format!("{secret:?}"), "Secret([REDACTED])");
    }

    #[test]
    fn test_decode() {
        let secret = Secret::from_bytes(&[1, 2, 3, 4]);
        assert_eq!(secret.expose_secret(), "AQIDBA");
        assert_eq!(&secret.decode().unwrap()[..], &[1, 2, 3, 4]);

        let secret = Secret::new("not base64url!");
        assert!(matches!(secret.decode(), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let secret = Secret::new("AQIDBA");
        assert_eq!(serde_json::to_string(&secret).unwrap(), r#""AQIDBA""#);
        assert_eq!(serde_json::from_str::<Secret>(r#""AQIDBA""#).unwrap(), secret);
    }
}
