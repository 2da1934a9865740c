//! Browser LocalStorage Backend
//!
//! Looks up `window.localStorage` on every call instead of holding the
//! `web_sys::Storage` handle, so the backend stays `Send + Sync` and can live
//! inside the reactive app store.

use super::traits::StorageBackend;
use crate::domain::PersistError;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};

    use crate::domain::PersistError;

    pub fn storage() -> Result<web_sys::Storage, PersistError> {
        let window = web_sys::window()
            .ok_or_else(|| PersistError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PersistError::Unavailable(describe(&e)))?
            .ok_or_else(|| PersistError::Unavailable("localStorage is disabled".to_string()))
    }

    /// Classify a rejected write; browsers signal a full store with `QuotaExceededError`
    pub fn write_error(err: JsValue) -> PersistError {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(ex) if ex.name() == "QuotaExceededError" => PersistError::QuotaExceeded(ex.message()),
            Some(ex) => PersistError::Backend(format!("{}: {}", ex.name(), ex.message())),
            None => PersistError::Backend(describe(&err)),
        }
    }

    pub fn describe(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{:?}", err))
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        web::storage()?
            .get_item(key)
            .map_err(|e| PersistError::Backend(web::describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        web::storage()?.set_item(key, value).map_err(web::write_error)
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        web::storage()?
            .remove_item(key)
            .map_err(|e| PersistError::Backend(web::describe(&e)))
    }
}

/// Native stub: there is no LocalStorage outside a browser
#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistError> {
        Err(unavailable())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PersistError> {
        Err(unavailable())
    }

    fn remove(&self, _key: &str) -> Result<(), PersistError> {
        Err(unavailable())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unavailable() -> PersistError {
    PersistError::Unavailable("localStorage requires a browser".to_string())
}
