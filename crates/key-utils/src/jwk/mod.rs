//! This module provides types and utilities for handling JSON Web Keys (JWKs).
//!
//! It includes the flat wire representation, the tagged private/public key type used
//! everywhere else, secret wrapping and thumbprint computation.

#[allow(clippy::module_inception)]
mod jwk;
mod key;
mod secret;
mod thumbprint;

// Re-exports
pub use jwk::Jwk;
pub use key::{Ec, Key, KeyParams, Okp, PrivateKey, PublicKey};
pub use secret::Secret;
