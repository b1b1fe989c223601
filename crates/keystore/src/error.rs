use core::fmt::{Debug, Display};
use std::error::Error as StdError;

use key_utils::Error as CryptoError;

/// Kind of error that can occur during key manager operations.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The key is in the wrong state or has structurally invalid fields.
    #[error("Parameter error")]
    Parameter,
    /// No private key is stored for the requested public key.
    #[error("Key not found")]
    NotFound,
    /// The public fields of the key could not be canonicalized.
    #[error("Encoding error")]
    Encoding,
    /// The cryptographic engine failed to generate, sign or verify.
    #[error("Crypto error")]
    Crypto,
    /// The durable repository could not be read or written.
    #[error("Storage error")]
    Storage,
}

impl ErrorKind {
    /// Stable tag identifying the kind, suitable for foreign callers.
    pub fn variant(&self) -> &'static str {
        match self {
            ErrorKind::Parameter => "Parameter",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Encoding => "Encoding",
            ErrorKind::Crypto => "Crypto",
            ErrorKind::Storage => "Storage",
        }
    }
}

/// Represents all possible errors that can occur during key manager operations.
pub struct Error {
    kind: ErrorKind,
    source: eyre::Report,
}

impl Error {
    /// Returns the kind of the error that occurred.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the stable tag of the error kind.
    pub fn variant(&self) -> &'static str {
        self.kind.variant()
    }

    /// Returns the human readable message of the error.
    pub fn msg(&self) -> String {
        self.source.to_string()
    }

    /// Returns the lowest level error that caused this error.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.source.root_cause()
    }

    /// Returns the context of the error.
    pub fn context(&self) -> &(dyn StdError) {
        self.source.as_ref()
    }

    pub(crate) fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error {
            kind,
            source: eyre::Report::new(source),
        }
    }

    pub(crate) fn from_msg<M>(kind: ErrorKind, msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Error {
            kind,
            source: eyre::Report::msg(msg),
        }
    }

    /// Wraps a failure of the engine while generating or signing.
    pub(crate) fn crypto(err: CryptoError) -> Self {
        Error::new(ErrorKind::Crypto, err)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("context", &self.context())
            .field("source", &self.root_cause())
            .finish()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.context())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        // The wrapped error is already part of our own message.
        self.source.source()
    }
}

impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        let kind = match &err {
            CryptoError::InvalidParameter(_) | CryptoError::UnsupportedKeyType(_) => {
                ErrorKind::Parameter
            }
            CryptoError::Encoding(_) => ErrorKind::Encoding,
            _ => ErrorKind::Crypto,
        };
        Error::new(kind, err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Storage, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::Storage, err)
    }
}
