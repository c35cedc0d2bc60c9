// SPDX-License-Identifier: MIT

//! File-backed storage: the durable analogue of the browser's
//! per-origin localStorage.
//!
//! The whole key space is one JSON object rewritten on every mutation.
//! The in-memory map stays authoritative; a failed flush is logged and
//! the session continues on memory alone for the rest of the process.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;

use super::StorageBackend;

/// Durable key/value backend persisted as a JSON file.
pub struct FileBackend {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
}

impl FileBackend {
    /// Open (or create) the storage file at `path`.
    ///
    /// A missing file starts an empty store; an unreadable or corrupt
    /// file is an error, so a profile is never silently wiped.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let items = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading session storage {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing session storage {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    fn flush(&self, items: &HashMap<String, String>) {
        if let Err(err) = write_atomically(&self.path, items) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "Failed to persist session storage; continuing in memory"
            );
        }
    }
}

fn write_atomically(path: &Path, items: &HashMap<String, String>) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, raw).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("renaming over {}", path.display()))?;
    Ok(())
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().expect("storage lock poisoned").get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = self.items.lock().expect("storage lock poisoned");
        items.insert(key.to_string(), value.to_string());
        self.flush(&items);
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.items.lock().expect("storage lock poisoned");
        if items.remove(key).is_some() {
            self.flush(&items);
        }
    }
}
