//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage is best-effort: private browsing, disabled storage, or quota
//! errors degrade to "no stored value" instead of failing the caller.

/// Load the string stored under `key`.
pub fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`.
pub fn save_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("localStorage write of {key} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
