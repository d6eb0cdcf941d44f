//! Persistent holder of the single bearer credential.
//!
//! The file-backed store keeps a small JSON object of string keys, the same
//! shape as browser origin storage, and owns exactly one key. The token is
//! written in plaintext; the file is created owner-readable only on unix but
//! is not encrypted.

use secrecy::SecretString;
use serde_json::{Map, Value};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("token storage is not valid json: {0}")]
    Format(#[from] serde_json::Error),
    #[error("token storage lock poisoned")]
    Poisoned,
}

/// Key-value holder for the bearer credential.
///
/// Blank tokens are never reported by [`TokenStore::get`]; existence of a
/// token is what "authenticated" means to the rest of the client.
pub trait TokenStore: Send + Sync {
    /// Persists `token`, replacing any previous credential.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Returns the stored credential, if any.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self) -> Result<Option<SecretString>, TokenStoreError>;

    /// Removes the stored credential.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> Result<(), TokenStoreError>;

    /// True when a credential is stored. Read failures count as absent.
    fn is_present(&self) -> bool {
        matches!(self.get(), Ok(Some(_)))
    }
}

/// File-backed store that survives process restarts.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, TokenStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string_pretty(entries)?;
        write_private(&self.path, payload.as_bytes())?;

        debug!("token storage written: {}", self.path.display());

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut entries = match self.read_entries() {
            Err(TokenStoreError::Format(err)) => {
                warn!(
                    "replacing unreadable token storage {}: {err}",
                    self.path.display()
                );
                Map::new()
            }
            result => result?,
        };
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn get(&self) -> Result<Option<SecretString>, TokenStoreError> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .and_then(normalize_token))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut entries = match self.read_entries() {
            Err(TokenStoreError::Format(err)) => {
                warn!(
                    "discarding unreadable token storage {}: {err}",
                    self.path.display()
                );
                return self.write_entries(&Map::new());
            }
            result => result?,
        };
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

/// Writes `payload`, creating the file owner-only on unix. Files that already
/// exist are narrowed to owner-only as well.
fn write_private(path: &Path, payload: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    restrict_permissions(&file)?;
    file.write_all(payload)?;
    file.sync_all()
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// In-process store, used by tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut slot = self.token.lock().map_err(|_| TokenStoreError::Poisoned)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Result<Option<SecretString>, TokenStoreError> {
        let slot = self.token.lock().map_err(|_| TokenStoreError::Poisoned)?;
        Ok(slot.as_deref().and_then(normalize_token))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut slot = self.token.lock().map_err(|_| TokenStoreError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

fn normalize_token(value: &str) -> Option<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::from(trimmed.to_string()))
    }
}
