//! This module contains cryptographic utilities.
//!
//! Provides interfaces and implementations for cryptographic key management,
//! including key generation, signing and verification. It supports [Ed25519] and
//! [secp256k1] keys, and [SHA-256] hashing for thumbprints.
//!
//! [Ed25519]: https://en.wikipedia.org/wiki/EdDSA
//! [secp256k1]: https://en.bitcoin.it/wiki/Secp256k1
//! [SHA-256]: https://en.wikipedia.org/wiki/SHA-2

mod alg;
mod ed25519;
mod engine;
mod errors;
mod format;
mod secp256k1;
mod sha256_hash;
mod traits;
pub(crate) mod utils;

pub use alg::Curve;
pub use ed25519::Ed25519KeyPair;
pub use engine::DefaultEngine;
pub use errors::{Error, Result};
pub use secp256k1::Secp256k1KeyPair;
pub use sha256_hash::sha256_hash;
pub use traits::{CoreSign, CryptoEngine, Generate, KeyMaterial};
pub use utils::{b64url_decode, b64url_encode};

/// A wrapper struct for an asymmetric key pair.
/// This struct holds a public key and an optional secret key.
pub struct AsymmetricKey<P, S> {
    pub public_key: P,
    pub secret_key: Option<S>,
}
