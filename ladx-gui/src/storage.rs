//! Key-value storages backing the client state.
//!
//! The durable storage survives restarts (file or OS keyring) and holds the access token and the
//! current user. The session storage lives in memory and is dropped with the process.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use fs4::fs_std::FileExt;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const USER_ID_KEY: &str = "userId";

pub const KEYRING_SERVICE: &str = "africa.ladx.client";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not accessible: {0}")]
    Unavailable(String),
    #[error("Error while reading storage: {0}")]
    Reading(String),
    #[error("Error while writing storage: {0}")]
    Writing(String),
}

pub trait Storage: std::fmt::Debug + Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage(Mutex<BTreeMap<String, String>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.0
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// JSON object stored in a single file, locked for the whole read-modify-write cycle so that two
/// running clients cannot interleave their writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[allow(unstable_name_collisions)]
    fn update<T, F>(&self, update: F, write: bool) -> Result<T, StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> T,
    {
        if !self.path.is_file() && !write {
            return Ok(update(&mut BTreeMap::new()));
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| StorageError::Unavailable(format!("Opening file: {e}")))?;

        file.lock_exclusive()
            .map_err(|e| StorageError::Unavailable(format!("Locking file: {e}")))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| StorageError::Reading(e.to_string()))?;

        let mut entries = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str::<BTreeMap<String, String>>(&content)
                .map_err(|e| StorageError::Reading(e.to_string()))?
        };

        let res = update(&mut entries);

        if write {
            let content = serde_json::to_vec_pretty(&entries)
                .map_err(|e| StorageError::Writing(e.to_string()))?;
            file.seek(SeekFrom::Start(0))
                .map_err(|e| StorageError::Writing(format!("Failed to seek file: {e}")))?;
            file.write_all(&content)
                .map_err(|e| StorageError::Writing(format!("Failed to write file: {e}")))?;
            file.set_len(content.len() as u64)
                .map_err(|e| StorageError::Writing(format!("Failed to truncate file: {e}")))?;
        }

        File::unlock(&file)
            .map_err(|e| StorageError::Unavailable(format!("Unlocking file: {e}")))?;

        Ok(res)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.update(|entries| entries.get(key).cloned(), false)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(
            |entries| {
                entries.insert(key.to_string(), value.to_string());
            },
            true,
        )
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if !self.path.is_file() {
            return Ok(());
        }
        self.update(
            |entries| {
                entries.remove(key);
            },
            true,
        )
    }
}

/// One OS keyring entry per key, under the same service name.
#[derive(Debug, Clone)]
pub struct KeyringStorage {
    service: String,
}

impl KeyringStorage {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, StorageError> {
        keyring::Entry::new(&self.service, key)
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl Storage for KeyringStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StorageError::Reading(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| StorageError::Writing(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::Writing(e.to_string())),
        }
    }
}

/// The durable and session-scoped storages used by the services.
#[derive(Debug, Clone)]
pub struct Stores {
    pub durable: Arc<dyn Storage>,
    pub session: Arc<dyn Storage>,
}

impl Stores {
    pub fn new(durable: Arc<dyn Storage>) -> Self {
        Self {
            durable,
            session: Arc::new(MemoryStorage::new()),
        }
    }

    /// Both storages in memory, nothing outlives the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap(), None);
        storage.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        storage.remove(ACCESS_TOKEN_KEY).unwrap();
        storage.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn file_storage_round_trip_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("storage.json");

        let storage = FileStorage::new(path.clone());
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap(), None);
        // Nothing is written by a read or by removing from a missing file.
        storage.remove(ACCESS_TOKEN_KEY).unwrap();
        assert!(!path.exists());

        storage.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        storage.set(CURRENT_USER_KEY, "{\"email\":\"a@b.co\"}").unwrap();

        let other = FileStorage::new(path.clone());
        assert_eq!(other.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(
            other.get(CURRENT_USER_KEY).unwrap().as_deref(),
            Some("{\"email\":\"a@b.co\"}")
        );

        // A shorter content must not leave trailing bytes of the previous one.
        other.remove(CURRENT_USER_KEY).unwrap();
        other.set(ACCESS_TOKEN_KEY, "x").unwrap();
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("x"));
        assert_eq!(storage.get(CURRENT_USER_KEY).unwrap(), None);
    }

    #[test]
    fn file_storage_corrupted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        let storage = FileStorage::new(path);
        assert!(matches!(
            storage.get(ACCESS_TOKEN_KEY),
            Err(StorageError::Reading(_))
        ));
    }
}
