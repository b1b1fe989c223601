use thiserror::Error;

/// The set of errors that can occur during key operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key does not have the shape required by the operation
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The key type is neither `OKP` nor `EC`
    #[error("unsupported key type {0}")]
    UnsupportedKeyType(String),
    /// A public member could not be decoded or canonicalized
    #[error("encoding failure: {0}")]
    Encoding(String),
    /// Invalid curve
    #[error("unsupported curve {0}")]
    UnsupportedCurve(String),
    /// Invalid key length
    #[error("invalid key length, expected {expected} bytes but got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    /// Invalid secret key
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),
    /// Invalid public key
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    /// Invalid seed
    #[error("invalid seed")]
    InvalidSeed,
    /// The operating system could not provide randomness
    #[error("random number generation failed: {0}")]
    Randomness(String),
    /// Error while signing
    #[error("sign failure: {0}")]
    SignatureError(String),
    /// Can not retrieve signature
    #[error("malformed signature: {0}")]
    CanNotRetrieveSignature(String),
    /// Error while verifying
    #[error("signature verification failed")]
    VerificationError,
}

pub type Result<T> = std::result::Result<T, Error>;
