use std::{
    collections::{BTreeMap, HashMap},
    fs::{self, File, OpenOptions},
    io::{ErrorKind as IoErrorKind, Write},
    os::unix::{fs::OpenOptionsExt, io::AsRawFd},
    path::{Path, PathBuf},
};

use key_utils::PrivateKey;
use nix::fcntl::{flock, FlockArg};
use parking_lot::RwLock;

use super::KeyRepository;
use crate::Error;

/// Repository persisting private keys to a single JSON file.
///
/// The file holds an object mapping each thumbprint to its private JWK.
/// Every store takes an exclusive lock on `<path>.lock`, re-reads the file so
/// that keys written through other handles are kept, and replaces it through a
/// temporary sibling. A key only becomes visible in memory once it has reached
/// the disk.
pub struct FileRepository {
    path: PathBuf,
    keys: RwLock<HashMap<String, PrivateKey>>,
}

impl FileRepository {
    /// Opens the store at `path`, loading any keys it already holds.
    ///
    /// A missing file is an empty store; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let keys = load(&path)?;

        tracing::debug!(path = %path.display(), keys = keys.len(), "opened key store file");

        Ok(Self {
            path,
            keys: RwLock::new(keys),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // The lock is released when the returned file is closed.
    #[allow(deprecated)]
    fn lock(&self) -> Result<File, Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .mode(0o600)
            .open(self.sibling("lock"))?;

        flock(lock.as_raw_fd(), FlockArg::LockExclusive).map_err(std::io::Error::from)?;
        Ok(lock)
    }

    fn replace(&self, keys: &HashMap<String, PrivateKey>) -> Result<(), Error> {
        let ordered: BTreeMap<&str, &PrivateKey> =
            keys.iter().map(|(k, v)| (k.as_str(), v)).collect();

        let tmp = self.sibling("tmp");
        let result = (|| -> Result<(), Error> {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&tmp)?;
            file.write_all(serde_json::to_string_pretty(&ordered)?.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }
}

fn load(path: &Path) -> Result<HashMap<String, PrivateKey>, Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(err) if err.kind() == IoErrorKind::NotFound => Ok(HashMap::new()),
        Err(err) => Err(err.into()),
    }
}

impl KeyRepository for FileRepository {
    fn store(&self, id: &str, key: PrivateKey) -> Result<(), Error> {
        let mut keys = self.keys.write();
        let _lock = self.lock()?;

        let mut on_disk = load(&self.path)?;
        on_disk.insert(id.to_string(), key);
        self.replace(&on_disk)?;

        *keys = on_disk;
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<PrivateKey>, Error> {
        Ok(self.keys.read().get(id).cloned())
    }

    fn list(&self) -> Result<Vec<PrivateKey>, Error> {
        Ok(self.keys.read().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use key_utils::{CryptoEngine, Curve, DefaultEngine};
    use tempdir::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new("keystore").unwrap();
        let repository = FileRepository::open(dir.path().join("keys.json")).unwrap();

        assert!(repository.list().unwrap().is_empty());
        assert!(!repository.path().exists());
    }

    #[test]
    fn test_keys_survive_reopen() {
        let dir = TempDir::new("keystore").unwrap();
        let path = dir.path().join("nested").join("keys.json");
        let ed25519 = DefaultEngine.generate(Curve::Ed25519).unwrap();
        let secp256k1 = DefaultEngine.generate(Curve::Secp256k1).unwrap();

        {
            let repository = FileRepository::open(&path).unwrap();
            repository.store("a", ed25519.clone()).unwrap();
            repository.store("b", secp256k1.clone()).unwrap();
        }

        let repository = FileRepository::open(&path).unwrap();
        assert_eq!(repository.find("a").unwrap(), Some(ed25519));
        assert_eq!(repository.find("b").unwrap(), Some(secp256k1));
        assert_eq!(repository.list().unwrap().len(), 2);
        assert!(!repository.sibling("tmp").exists());
    }

    #[test]
    fn test_store_file_holds_private_jwks() {
        let dir = TempDir::new("keystore").unwrap();
        let path = dir.path().join("keys.json");
        let key = DefaultEngine.generate(Curve::Ed25519).unwrap();

        let repository = FileRepository::open(&path).unwrap();
        repository.store("id", key.clone()).unwrap();

        let content: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(content["id"]["kty"], "OKP");
        assert_eq!(content["id"]["crv"], "Ed25519");
        assert_eq!(content["id"]["x"], key.public_key().x());
        assert_eq!(content["id"]["d"], key.secret().expose_secret());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = TempDir::new("keystore").unwrap();
        let path = dir.path().join("keys.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileRepository::open(&path).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_failed_write_stores_nothing() {
        let dir = TempDir::new("keystore").unwrap();
        let parent = dir.path().join("blocker");
        let repository = FileRepository::open(parent.join("keys.json")).unwrap();

        // The parent of the store is now a regular file, so no write can succeed.
        fs::write(&parent, "").unwrap();
        let key = DefaultEngine.generate(Curve::Ed25519).unwrap();

        let err = repository.store("id", key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(repository.find("id").unwrap().is_none());
    }

    #[test]
    fn test_handles_on_one_path_keep_each_others_keys() {
        let dir = TempDir::new("keystore").unwrap();
        let path = dir.path().join("keys.json");
        let first_key = DefaultEngine.generate(Curve::Ed25519).unwrap();
        let second_key = DefaultEngine.generate(Curve::Secp256k1).unwrap();

        let first = FileRepository::open(&path).unwrap();
        let second = FileRepository::open(&path).unwrap();
        first.store("a", first_key.clone()).unwrap();
        second.store("b", second_key.clone()).unwrap();

        // The later writer picked up the earlier key while holding the lock.
        assert_eq!(second.find("a").unwrap(), Some(first_key.clone()));

        let reopened = FileRepository::open(&path).unwrap();
        assert_eq!(reopened.find("a").unwrap(), Some(first_key));
        assert_eq!(reopened.find("b").unwrap(), Some(second_key));
    }

    #[test]
    fn test_lock_is_released_after_store() {
        let dir = TempDir::new("keystore").unwrap();
        let path = dir.path().join("keys.json");
        let repository = FileRepository::open(&path).unwrap();

        repository
            .store("a", DefaultEngine.generate(Curve::Ed25519).unwrap())
            .unwrap();
        assert!(repository.sibling("lock").exists());

        // A second exclusive lock on the same file only succeeds once the first is gone.
        let lock = repository.lock().unwrap();
        drop(lock);
        repository
            .store("b", DefaultEngine.generate(Curve::Ed25519).unwrap())
            .unwrap();
        assert_eq!(repository.list().unwrap().len(), 2);
    }
}
