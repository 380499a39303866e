//! Preference storage
//!
//! This module provides:
//! - `localStorage` persistence in the browser
//! - One file per key under the local data directory on native platforms
//! - An in-memory store for tests

use crate::error::{WidgetError, WidgetResult};
use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> WidgetResult<()>;
}

// ============================================
// In-memory store
// ============================================

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| WidgetError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================
// Local store (browser localStorage / native files)
// ============================================

#[derive(Clone, Debug)]
pub struct LocalPreferences {
    #[cfg(not(target_arch = "wasm32"))]
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalPreferences {
    pub fn new() -> Self {
        Self::in_dir(default_preferences_dir())
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(sanitize_key(key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for LocalPreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_preferences_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("cardio-widgets").join("preferences");
    }

    PathBuf::from("cache").join("preferences")
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            WidgetError::Storage(format!("Failed to create preferences directory: {}", e))
        })?;
        fs::write(self.path_for(key), value)
            .map_err(|e| WidgetError::Storage(format!("Failed to write preference: {}", e)))
    }
}

#[cfg(target_arch = "wasm32")]
impl LocalPreferences {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalPreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        let storage = local_storage()
            .ok_or_else(|| WidgetError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }
}

/// Sanitize storage key for filesystem use
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
