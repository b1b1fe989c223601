use base64ct::{Base64UrlUnpadded, Encoding};

use super::errors::Error;

pub(crate) const BYTES_LENGTH_32: usize = 32;

// Generate a seed from an optional initial seed.
// If the initial seed is empty or does not have the right size, draw a random seed.
pub(crate) fn generate_seed(initial_seed: &[u8]) -> Result<[u8; BYTES_LENGTH_32], Error> {
    let mut seed = [0u8; BYTES_LENGTH_32];
    if initial_seed.len() != BYTES_LENGTH_32 {
        getrandom::getrandom(&mut seed).map_err(|e| Error::Randomness(e.to_string()))?;
    } else {
        seed.copy_from_slice(initial_seed);
    }
    Ok(seed)
}

// Copy a slice into a fixed size array, checking its length.
pub(crate) fn to_array<const N: usize>(slice: &[u8]) -> Result<[u8; N], Error> {
    slice.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: N,
        actual: slice.len(),
    })
}

/// Encodes bytes as unpadded base64url, the encoding of every binary JWK member.
pub fn b64url_encode(bytes: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(bytes)
}

/// Decodes an unpadded base64url JWK member.
pub fn b64url_decode(member: &str, value: &str) -> Result<Vec<u8>, Error> {
    Base64UrlUnpadded::decode_vec(value)
        .map_err(|e| Error::Encoding(format!("member {member} is not base64url: {e}")))
}
