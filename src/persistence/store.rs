//! Key-value stores for snapshots.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::core::SnapshotError;

/// Byte store keyed by a fixed session identifier.
///
/// Writes are last-writer-wins; there is no merge.
pub trait SnapshotStore {
    /// Stored bytes for `key`, if any.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotError>;

    /// Replace the bytes stored under `key`.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), SnapshotError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn clear(&mut self, key: &str) -> Result<(), SnapshotError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), SnapshotError> {
        (**self).save(key, bytes)
    }

    fn clear(&mut self, key: &str) -> Result<(), SnapshotError> {
        (**self).clear(key)
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), SnapshotError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), SnapshotError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`, created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.bin"))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotError> {
        match fs::read(self.path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(key);
        let tmp = path.with_extension("tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), SnapshotError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
