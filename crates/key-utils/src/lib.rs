/*! # key-utils

This library provides the building blocks for managing asymmetric keys expressed as
JSON Web Keys (JWKs) and for producing signatures with them.

## Features

- **JSON Web Keys**: a flat [`jwk::Jwk`] type for the wire format and a tagged [`jwk::Key`]
  that distinguishes private from public keys at the type level.
- **Thumbprints**: deterministic [RFC 7638] fingerprints computed over the public members of a key.
- **Cryptographic Engine**: the [`crypto::CryptoEngine`] capability (`generate`, `thumbprint`,
  `sign`, `verify`) with a default implementation backed by Ed25519 and secp256k1 key pairs.

[RFC 7638]: https://www.rfc-editor.org/rfc/rfc7638
*/
pub mod crypto;
pub mod jwk;

pub use crypto::{CryptoEngine, Curve, DefaultEngine, Error};
pub use jwk::{Jwk, Key, PrivateKey, PublicKey};
