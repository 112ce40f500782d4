//! Key-value persistence substrate.
//!
//! [`Substrate`] is the storage seam: string keys, serialized string values,
//! `get`/`set`/`remove`. Operations never fail — a backend that cannot
//! persist degrades to empty reads and no-op writes, logging at `warn`.
//! Backends:
//! - [`MemoryStore`] — process-local, for tests and ephemeral runs
//! - [`FileStore`] — one JSON file per key under a data directory

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage seam shared by all stores.
///
/// Implementations are infallible at the call site: failures are handled
/// (and logged) inside the backend, reads fall back to `None`, writes to
/// no-ops.
pub trait Substrate: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

// ── MemoryStore ────────────────────────────────────────────────────

/// In-memory substrate. The mutex exists for interior mutability only;
/// cross-writer discipline is last-write-wins like every other backend.
#[derive(Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn cells(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Substrate for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.cells().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.cells().remove(key);
    }
}

// ── FileStore ──────────────────────────────────────────────────────

/// File-backed substrate: each key maps to `<root>/<key>.json`.
///
/// I/O failures are swallowed per-operation (warn + empty read / no-op
/// write) so the stores above stay usable when the data directory is
/// missing or unwritable.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a file substrate rooted at `root`, creating the directory if
    /// needed. A root that cannot be created still yields a working (but
    /// degraded) substrate.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if let Err(error) = fs::create_dir_all(&root) {
            tracing::warn!(root = %root.display(), %error, "data dir unavailable; substrate degraded");
        }
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Substrate for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(key, %error, "substrate read failed; treating as empty");
                }
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(error) = fs::write(self.path_for(key), value) {
            tracing::warn!(key, %error, "substrate write failed; value dropped");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(error) = fs::remove_file(self.path_for(key)) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key, %error, "substrate remove failed");
            }
        }
    }
}

// ── Serialization helpers ──────────────────────────────────────────

/// Decode a JSON list stored under `key`. Missing or unreadable values
/// read as empty.
pub(crate) fn read_list<T: DeserializeOwned>(substrate: &dyn Substrate, key: &str) -> Vec<T> {
    substrate.get(key).map_or_else(Vec::new, |raw| {
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(key, %error, "stored list is unreadable; treating as empty");
            Vec::new()
        })
    })
}

/// Encode `items` as JSON under `key`. An unencodable value drops the write.
pub(crate) fn write_list<T: Serialize>(substrate: &dyn Substrate, key: &str, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(json) => substrate.set(key, &json),
        Err(error) => tracing::warn!(key, %error, "list could not be encoded; write skipped"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_set_get_remove_cycle() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v1");
        assert_eq!(store.get("k").as_deref(), Some("v1"));

        store.set("k", "v2");
        assert_eq!(store.get("k").as_deref(), Some("v2"));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn file_store_persists_across_handles() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");

        let store = FileStore::open(tmp.path());
        store.set("herbaria_accounts", r#"[{"id":"usr-1"}]"#);
        drop(store);

        let reopened = FileStore::open(tmp.path());
        assert_eq!(
            reopened.get("herbaria_accounts").as_deref(),
            Some(r#"[{"id":"usr-1"}]"#)
        );
    }

    #[test]
    fn file_store_remove_absent_key_is_noop() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::open(tmp.path());
        store.remove("never-written");
        assert_eq!(store.get("never-written"), None);
    }

    #[test]
    fn unwritable_root_degrades_to_empty_reads_and_noop_writes() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let blocker = tmp.path().join("occupied");
        fs::write(&blocker, "not a directory").expect("write blocker");

        // Root path is an existing regular file, so nothing can persist.
        let store = FileStore::open(blocker.join("nested"));
        store.set("k", "v");
        assert_eq!(store.get("k"), None);
        store.remove("k");
    }

    #[test]
    fn read_list_tolerates_garbage() {
        let store = MemoryStore::new();
        store.set("k", "not json at all");
        let items: Vec<String> = read_list(&store, "k");
        assert!(items.is_empty());
    }

    #[test]
    fn write_then_read_list_roundtrip() {
        let store = MemoryStore::new();
        write_list(&store, "k", &["a".to_string(), "b".to_string()]);
        let items: Vec<String> = read_list(&store, "k");
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
    }
}
