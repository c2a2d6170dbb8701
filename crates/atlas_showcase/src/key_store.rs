use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name the Google API key is remembered under.
pub const API_KEY_NAME: &str = "GoogleAPIKey";

pub const API_KEY_TTL_DAYS: i64 = 365;

const KEY_STORE_FILE: &str = "keys.json";

pub fn api_key_ttl() -> SignedDuration {
    SignedDuration::from_hours(API_KEY_TTL_DAYS * 24)
}

#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("Key store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path {0} is not a directory")]
    NotADirectory(String),

    #[error("Invalid expiration: {0}")]
    Expiration(#[from] jiff::Error),
}

/// Small named value store with expiration, used to remember the API key
/// between sessions.
pub trait KeyStore {
    fn set(&mut self, name: &str, value: &str, ttl: SignedDuration) -> Result<(), KeyStoreError>;

    /// Returns `None` for unknown and expired entries.
    fn get(&self, name: &str) -> Result<Option<String>, KeyStoreError>;

    fn clear(&mut self, name: &str) -> Result<(), KeyStoreError>;
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Timestamp,
}

impl StoredValue {
    fn new(value: &str, ttl: SignedDuration) -> Result<Self, KeyStoreError> {
        Ok(Self {
            value: value.to_string(),
            expires_at: Timestamp::now().checked_add(ttl)?,
        })
    }

    fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    values: HashMap<String, StoredValue>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryKeyStore {
    fn set(&mut self, name: &str, value: &str, ttl: SignedDuration) -> Result<(), KeyStoreError> {
        self.values
            .insert(name.to_string(), StoredValue::new(value, ttl)?);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<String>, KeyStoreError> {
        let now = Timestamp::now();
        Ok(self
            .values
            .get(name)
            .filter(|stored| !stored.is_expired(now))
            .map(|stored| stored.value.clone()))
    }

    fn clear(&mut self, name: &str) -> Result<(), KeyStoreError> {
        self.values.remove(name);
        Ok(())
    }
}

/// Keeps all values in a single `keys.json` file inside a folder.
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    pub fn new(folder: impl AsRef<Path>) -> Result<Self, KeyStoreError> {
        let folder = folder.as_ref();

        if !folder.is_dir() {
            return Err(KeyStoreError::NotADirectory(
                folder.display().to_string(),
            ));
        }

        Ok(Self {
            path: folder.join(KEY_STORE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<HashMap<String, StoredValue>, KeyStoreError> {
        if !self.path.is_file() {
            return Ok(HashMap::new());
        }

        let file = File::open(&self.path)?;
        let values = serde_json::from_reader(BufReader::new(file))?;

        Ok(values)
    }

    fn write(&self, values: &HashMap<String, StoredValue>) -> Result<(), KeyStoreError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)?;
        writer.flush()?;

        Ok(())
    }
}

impl KeyStore for FileKeyStore {
    fn set(&mut self, name: &str, value: &str, ttl: SignedDuration) -> Result<(), KeyStoreError> {
        let mut values = self.read()?;
        values.insert(name.to_string(), StoredValue::new(value, ttl)?);
        self.write(&values)
    }

    fn get(&self, name: &str) -> Result<Option<String>, KeyStoreError> {
        let now = Timestamp::now();
        Ok(self
            .read()?
            .remove(name)
            .filter(|stored| !stored.is_expired(now))
            .map(|stored| stored.value))
    }

    fn clear(&mut self, name: &str) -> Result<(), KeyStoreError> {
        let mut values = self.read()?;
        if values.remove(name).is_some() {
            self.write(&values)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryKeyStore::new();

        store.set(API_KEY_NAME, "secret", api_key_ttl()).unwrap();
        assert_eq!(store.get(API_KEY_NAME).unwrap().as_deref(), Some("secret"));

        store.clear(API_KEY_NAME).unwrap();
        assert_eq!(store.get(API_KEY_NAME).unwrap(), None);
    }

    #[test]
    fn test_expired_value_is_absent() {
        let mut store = MemoryKeyStore::new();

        store
            .set(API_KEY_NAME, "secret", SignedDuration::from_secs(-1))
            .unwrap();

        assert_eq!(store.get(API_KEY_NAME).unwrap(), None);
    }

    #[test]
    fn test_api_key_ttl() {
        assert_eq!(api_key_ttl(), SignedDuration::from_hours(8760));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let folder = tempfile::tempdir().unwrap();

        let mut store = FileKeyStore::new(folder.path()).unwrap();
        assert_eq!(store.get(API_KEY_NAME).unwrap(), None);
        store.set(API_KEY_NAME, "secret", api_key_ttl()).unwrap();
        store.set("Other", "value", api_key_ttl()).unwrap();

        let mut reopened = FileKeyStore::new(folder.path()).unwrap();
        assert_eq!(reopened.get(API_KEY_NAME).unwrap().as_deref(), Some("secret"));

        reopened.clear(API_KEY_NAME).unwrap();
        assert_eq!(store.get(API_KEY_NAME).unwrap(), None);
        assert_eq!(store.get("Other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_requires_directory() {
        let folder = tempfile::tempdir().unwrap();
        let missing = folder.path().join("missing");

        assert!(matches!(
            FileKeyStore::new(&missing),
            Err(KeyStoreError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_file_store_rejects_invalid_json() {
        let folder = tempfile::tempdir().unwrap();
        std::fs::write(folder.path().join(KEY_STORE_FILE), "not json").unwrap();

        let store = FileKeyStore::new(folder.path()).unwrap();

        assert!(matches!(
            store.get(API_KEY_NAME),
            Err(KeyStoreError::Json(_))
        ));
    }
}
