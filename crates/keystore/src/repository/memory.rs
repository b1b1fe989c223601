use std::collections::HashMap;

use key_utils::PrivateKey;
use parking_lot::RwLock;

use super::KeyRepository;
use crate::Error;

/// Repository keeping private keys in process memory for its lifetime.
#[derive(Default)]
pub struct InMemoryRepository {
    keys: RwLock<HashMap<String, PrivateKey>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyRepository for InMemoryRepository {
    fn store(&self, id: &str, key: PrivateKey) -> Result<(), Error> {
        self.keys.write().insert(id.to_string(), key);
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<PrivateKey>, Error> {
        Ok(self.keys.read().get(id).cloned())
    }

    fn list(&self) -> Result<Vec<PrivateKey>, Error> {
        Ok(self.keys.read().values().cloned().collect())
    }
}
