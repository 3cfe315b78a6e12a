//! Concurrent keymap registry.
//!
//! Read-mostly: `load_keymaps` is the only mutator and takes the writer
//! lock; lookups take the reader lock and return a cheap `Arc` clone. A
//! registered scheme is never mutated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::scheme::{TransliterationScheme, ValidationError};

/// File extension scanned by [`SchemeStore::load_keymaps`].
pub const KEYMAP_EXTENSION: &str = "json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: JSON parse error: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("{path}: {source}")]
    Validation {
        path: String,
        source: ValidationError,
    },
}

#[derive(Debug, Default)]
pub struct SchemeStore {
    keymaps: RwLock<HashMap<String, Arc<TransliterationScheme>>>,
}

impl SchemeStore {
    pub fn new() -> Self {
        SchemeStore::default()
    }

    /// Load every `.json` keymap in `dir`. Fails closed: the first file that
    /// does not parse or validate aborts the load.
    pub fn load_keymaps(&self, dir: &Path) -> Result<(), StoreError> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(KEYMAP_EXTENSION) {
                continue;
            }
            self.load_file(&path)?;
        }
        Ok(())
    }

    fn load_file(&self, path: &Path) -> Result<(), StoreError> {
        let data = fs::read_to_string(path)?;
        let scheme: TransliterationScheme =
            serde_json::from_str(&data).map_err(|source| StoreError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        scheme.validate().map_err(|source| StoreError::Validation {
            path: path.display().to_string(),
            source,
        })?;
        debug!(id = %scheme.id, path = %path.display(), "loaded keymap");
        self.register(scheme);
        Ok(())
    }

    /// Register an already-validated scheme. A scheme with the same id
    /// replaces the previous one.
    pub fn register(&self, scheme: TransliterationScheme) {
        let mut keymaps = self
            .keymaps
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        keymaps.insert(scheme.id.clone(), Arc::new(scheme));
    }

    pub fn get(&self, id: &str) -> Option<Arc<TransliterationScheme>> {
        let keymaps = self.keymaps.read().unwrap_or_else(PoisonError::into_inner);
        keymaps.get(id).cloned()
    }

    pub fn list_ids(&self) -> Vec<String> {
        let keymaps = self.keymaps.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<String> = keymaps.keys().cloned().collect();
        ids.sort();
        ids
    }
}
