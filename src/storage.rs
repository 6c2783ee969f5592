//! Browser session storage backend for the cart snapshot.

use wasm_bindgen::JsValue;
use storefront_core::{CartStorage, DomainError, DomainResult};

/// `window.sessionStorage`
pub struct SessionStorage;

fn js_error(context: &str, err: JsValue) -> DomainError {
    DomainError::Internal(format!("{}: {:?}", context, err))
}

fn session_storage() -> DomainResult<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| DomainError::Internal("no window".to_string()))?;
    window
        .session_storage()
        .map_err(|e| js_error("sessionStorage", e))?
        .ok_or_else(|| DomainError::NotFound("sessionStorage".to_string()))
}

impl CartStorage for SessionStorage {
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        session_storage()?
            .get_item(key)
            .map_err(|e| js_error("getItem", e))
    }

    fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        session_storage()?
            .set_item(key, value)
            .map_err(|e| js_error("setItem", e))
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        session_storage()?
            .remove_item(key)
            .map_err(|e| js_error("removeItem", e))
    }
}
