//! Light/dark theme preference and the key-value store it lives in.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, StorefrontError};

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Durable string key-value storage (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Read the stored preference once at startup.
    ///
    /// `"dark"` means dark, any other stored value means light, and a missing
    /// or unreadable entry falls back to the system color-scheme preference.
    pub fn load(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(value)) => Self::from_dark(value == "dark"),
            Ok(None) => Self::from_dark(system_prefers_dark),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {e}");
                Self::from_dark(system_prefers_dark)
            }
        }
    }

    pub fn save(self, store: &dyn PreferenceStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())?;
        tracing::info!(theme = self.as_str(), "Theme preference saved");
        Ok(())
    }
}

/// In-memory [`PreferenceStore`], for tests and environments without storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .try_borrow()
            .map_err(|e| StorefrontError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .try_borrow_mut()
            .map_err(|e| StorefrontError::Storage(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
