//! Bearer-token storage with keyring and file fallback
//!
//! The search path only reads the token; the `login`/`logout` CLI commands
//! write it. `LOADLENS_TOKEN` overrides both backends, which keeps CI and
//! scripted use out of the keyring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

const SERVICE_NAME: &str = "loadlens";
const TOKEN_KEY: &str = "token";

/// Environment variable consulted before any storage backend
pub const TOKEN_ENV: &str = "LOADLENS_TOKEN";

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// OS native keyring
    Keyring,
    /// JSON file in user config directory
    File,
}

/// File-based token storage format
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Manages the API bearer token
pub struct TokenStore {
    backend: StorageBackend,
    file_path: Option<PathBuf>,
}

impl TokenStore {
    /// Create a new token store, preferring keyring
    pub fn new() -> Result<Self, AppError> {
        if Self::test_keyring() {
            Ok(Self {
                backend: StorageBackend::Keyring,
                file_path: None,
            })
        } else {
            let file_path = Self::storage_file_path()?;
            Ok(Self {
                backend: StorageBackend::File,
                file_path: Some(file_path),
            })
        }
    }

    /// File-backed store at an explicit path; used by tests
    #[allow(dead_code)]
    pub fn with_file(path: PathBuf) -> Self {
        Self {
            backend: StorageBackend::File,
            file_path: Some(path),
        }
    }

    /// Which backend this store writes to
    pub fn backend(&self) -> StorageBackend {
        self.backend
    }

    /// Test if keyring is available
    fn test_keyring() -> bool {
        keyring::Entry::new(SERVICE_NAME, TOKEN_KEY).is_ok()
    }

    fn storage_file_path() -> Result<PathBuf, AppError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppError::ConfigError("Could not find config directory".to_string()))?;

        let app_dir = config_dir.join("loadlens");
        fs::create_dir_all(&app_dir)
            .map_err(|e| AppError::ConfigError(format!("Failed to create config directory: {}", e)))?;

        Ok(app_dir.join("token.json"))
    }

    /// Read the bearer token, checking the env override first
    pub fn bearer_token(&self) -> Result<String, AppError> {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Ok(token.trim().to_string());
            }
        }

        match self.backend {
            StorageBackend::Keyring => {
                let entry = keyring::Entry::new(SERVICE_NAME, TOKEN_KEY)
                    .map_err(|e| AppError::ConfigError(e.to_string()))?;
                match entry.get_password() {
                    Ok(token) => Ok(token),
                    Err(keyring::Error::NoEntry) => Err(AppError::TokenMissing(
                        "No API token stored; run 'loadlens login'".to_string(),
                    )),
                    Err(e) => Err(AppError::ConfigError(e.to_string())),
                }
            }
            StorageBackend::File => {
                let path = self.require_file_path()?;
                if !path.exists() {
                    return Err(AppError::TokenMissing(
                        "No API token stored; run 'loadlens login'".to_string(),
                    ));
                }
                let contents = fs::read_to_string(path)
                    .map_err(|e| AppError::ConfigError(format!("Failed to read token file: {}", e)))?;
                let stored: StoredToken = serde_json::from_str(&contents)
                    .map_err(|e| AppError::ConfigError(format!("Failed to parse token file: {}", e)))?;
                Ok(stored.token)
            }
        }
    }

    /// Persist a token
    pub fn store(&self, token: &str) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::InvalidInput("Token cannot be empty".to_string()));
        }

        match self.backend {
            StorageBackend::Keyring => {
                let entry = keyring::Entry::new(SERVICE_NAME, TOKEN_KEY)
                    .map_err(|e| AppError::ConfigError(e.to_string()))?;
                entry
                    .set_password(token)
                    .map_err(|e| AppError::ConfigError(e.to_string()))
            }
            StorageBackend::File => {
                let path = self.require_file_path()?;
                let stored = StoredToken {
                    token: token.to_string(),
                    saved_at: Utc::now(),
                };
                let contents = serde_json::to_string_pretty(&stored)
                    .map_err(|e| AppError::ConfigError(e.to_string()))?;
                fs::write(path, contents)
                    .map_err(|e| AppError::ConfigError(format!("Failed to write token file: {}", e)))
            }
        }
    }

    /// Remove the stored token
    pub fn clear(&self) -> Result<(), AppError> {
        match self.backend {
            StorageBackend::Keyring => {
                let entry = keyring::Entry::new(SERVICE_NAME, TOKEN_KEY)
                    .map_err(|e| AppError::ConfigError(e.to_string()))?;
                match entry.delete_password() {
                    Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                    Err(e) => Err(AppError::ConfigError(e.to_string())),
                }
            }
            StorageBackend::File => {
                let path = self.require_file_path()?;
                if path.exists() {
                    fs::remove_file(path).map_err(|e| {
                        AppError::ConfigError(format!("Failed to remove token file: {}", e))
                    })?;
                }
                Ok(())
            }
        }
    }

    fn require_file_path(&self) -> Result<&PathBuf, AppError> {
        self.file_path
            .as_ref()
            .ok_or_else(|| AppError::ConfigError("No file path set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = TokenStore::with_file(dir.path().join("token.json"));

        store.store("abc123").unwrap();
        assert_eq!(store.bearer_token().unwrap(), "abc123");

        store.clear().unwrap();
        match store.bearer_token() {
            Err(AppError::TokenMissing(_)) => {}
            other => panic!("Expected TokenMissing, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_store_rejects_empty_token() {
        let dir = tempdir().unwrap();
        let store = TokenStore::with_file(dir.path().join("token.json"));
        assert!(store.store("   ").is_err());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = TokenStore::with_file(dir.path().join("token.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }
}
