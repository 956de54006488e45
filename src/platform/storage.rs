use storefront_core::error::{Result, StorefrontError};
use storefront_core::PreferenceStore;

/// [`PreferenceStore`] backed by the browser's `localStorage`.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Open `localStorage`, or `None` when the browser denies access
    /// (private mode, sandboxed iframe).
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                web_sys::console::warn_1(&format!("localStorage unavailable: {e:?}").into());
                None
            }
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorefrontError::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorefrontError::Storage(format!("{e:?}")))
    }
}
