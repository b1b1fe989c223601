/*! # keystore

Key Manager holding private JSON Web Keys and handing out signers bound to them.

Private keys are imported into a [`KeyManager`] and addressed by the [RFC 7638] thumbprint of
their public projection. A caller holding only the public key can later obtain a [`Signer`] for
the matching private key without ever seeing it.

```
use keystore::KeyManager;
use key_utils::{CryptoEngine, Curve, DefaultEngine};

let manager = KeyManager::in_memory();
let key = manager.generate_private_key(Curve::Ed25519).unwrap();

let public_key = manager.import_private_key(key).unwrap();
let signer = manager.get_signer(&public_key).unwrap();
let signature = signer.sign(b"hello").unwrap();

assert!(DefaultEngine.verify(public_key.as_public(), b"hello", &signature).is_ok());
```

Keys live in a [`KeyRepository`]: [`InMemoryRepository`] for the lifetime of the process or
[`FileRepository`] for a single JSON file on disk.

[RFC 7638]: https://www.rfc-editor.org/rfc/rfc7638
*/

mod error;
mod manager;
mod repository;
mod signer;


pub use error::{Error, ErrorKind};
pub use manager::KeyManager;
pub use repository::{FileRepository, InMemoryRepository, KeyRepository};
pub use signer::{KeySigner, Signer};
