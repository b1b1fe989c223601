//! JWK thumbprints as defined in [RFC 7638].
//!
//! The required public members of the key are serialized as canonical JSON (members sorted
//! lexicographically, no whitespace), hashed with SHA-256 and encoded as unpadded base64url.
//!
//! [RFC 7638]: https://www.rfc-editor.org/rfc/rfc7638

use serde_json::json;

use super::key::{KeyParams, PublicKey};
use crate::crypto::{
    sha256_hash,
    utils::{b64url_decode, b64url_encode},
    Error,
};

pub(crate) fn compute_thumbprint(key: &PublicKey) -> Result<String, Error> {
    let members = match &key.params {
        KeyParams::Okp(okp) => {
            require_encoded("x", &okp.x)?;
            json!({ "crv": okp.crv, "kty": "OKP", "x": okp.x })
        }
        KeyParams::Ec(ec) => {
            require_encoded("x", &ec.x)?;
            require_encoded("y", &ec.y)?;
            json!({ "crv": ec.crv, "kty": "EC", "x": ec.x, "y": ec.y })
        }
    };

    let canonical = json_canon::to_string(&members).map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(b64url_encode(&sha256_hash(canonical.as_bytes())))
}

// A member that cannot be decoded has no canonical form.
fn require_encoded(member: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Encoding(format!("missing required member {member}")));
    }
    b64url_decode(member, value).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwk::{Jwk, Key};

    // RFC 8037, Appendix A.3.
    #[test]
    fn test_ed25519_thumbprint_vector() {
        let jwk: Jwk = serde_json::from_str(
            r#"{"kty":"OKP","crv":"Ed25519","x":"11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"}"#,
        )
        .unwrap();
        let key = Key::try_from(jwk).unwrap();

        assert_eq!(
            key.thumbprint().unwrap(),
            "kPrK_qmxVWaYVA9wwBF6Iuo3vVzz7TxHCTwXBygrS4k"
        );
    }

    #[test]
    fn test_ec_thumbprint_includes_y() {
        let key = |y: &str| -> Key {
            Jwk {
                kty: "EC".to_string(),
                crv: "secp256k1".to_string(),
                x: "5HJWqwYhG5xVjjXQXwSUAnyCy4LWTpb10tNcGt-1Gik".to_string(),
                y: Some(y.to_string()),
                ..Default::default()
            }
            .try_into()
            .unwrap()
        };

        let a = key("SGBxYlqEv2bU-ylXzR6fmBUN0eJXh4FSJqJLp29ybxE");
        let b = key("AGBxYlqEv2bU-ylXzR6fmBUN0eJXh4FSJqJLp29ybxE");
        assert_ne!(a.thumbprint().unwrap(), b.thumbprint().unwrap());
    }

    #[test]
    fn test_missing_x_cannot_be_canonicalized() {
        let jwk: Jwk = serde_json::from_str(r#"{"kty":"OKP","crv":"Ed25519"}"#).unwrap();
        let key = Key::try_from(jwk).unwrap();

        assert!(matches!(key.thumbprint(), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_invalid_encoding_cannot_be_canonicalized() {
        let jwk = Jwk {
            kty: "OKP".to_string(),
            crv: "Ed25519".to_string(),
            x: "not/base64url=".to_string(),
            ..Default::default()
        };
        let key = Key::try_from(jwk).unwrap();

        assert!(matches!(key.thumbprint(), Err(Error::Encoding(_))));
    }
}
