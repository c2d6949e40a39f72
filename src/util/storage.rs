//! `localStorage`-backed preference store.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (tests, native builds) there is no storage: reads
//! find nothing and writes report [`StorageError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::error::StorageError;
use crate::state::theme::PreferenceStore;

/// Preference store over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn rejected(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::WriteRejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
