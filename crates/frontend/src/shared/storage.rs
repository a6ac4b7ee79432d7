//! Thin wrappers over `window.localStorage`.
//!
//! Reads fail soft to `None`; writes log and move on. Callers own their
//! fallback behavior.

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        log::error!("localStorage write failed for '{}': {:?}", key, e);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
