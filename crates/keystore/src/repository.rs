mod file;
mod memory;

pub use file::FileRepository;
pub use memory::InMemoryRepository;

use key_utils::PrivateKey;

use crate::Error;

/// Abstract interface for private key storage backends.
///
/// Keys are addressed by the thumbprint of their public projection.
/// Storing under an existing id replaces the previous key.
pub trait KeyRepository: Send + Sync {
    /// Store a private key under the given id.
    fn store(&self, id: &str, key: PrivateKey) -> Result<(), Error>;

    /// Retrieve the private key stored under the given id.
    fn find(&self, id: &str) -> Result<Option<PrivateKey>, Error>;

    /// Every private key held by the repository, in no particular order.
    fn list(&self) -> Result<Vec<PrivateKey>, Error>;
}
