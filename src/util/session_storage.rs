//! Browser `sessionStorage` access for the login snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the raw login payload here and `App` reads it back
//! on start. Outside the browser the store reports itself unavailable so the
//! callers' logging paths still run.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,

    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Key-value store holding raw snapshot strings.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "csr")]
fn session_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SnapshotStore for BrowserSessionStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            session_storage()?
                .set_item(key, raw)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, raw);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            session_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
