//! Receipt image directory with a read-through filename cache.
//!
//! The directory listing is computed once on first lookup and reused across
//! render cycles; `invalidate` forces a re-listing on the next lookup. A
//! missing or unreadable directory yields an empty set rather than an error:
//! absent receipts are a per-item condition, never a fatal one.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::warn;

/// Flat directory of receipt images, keyed by exact filename
#[derive(Clone)]
pub struct ReceiptStore {
    dir: PathBuf,
    names: Arc<Mutex<Option<HashSet<String>>>>,
}

impl ReceiptStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            names: Arc::new(Mutex::new(None)),
        }
    }

    /// Exact, case-sensitive membership test against the cached listing
    pub fn contains(&self, filename: &str) -> bool {
        let mut cache = self.names.lock().unwrap();
        cache
            .get_or_insert_with(|| self.list_directory())
            .contains(filename)
    }

    /// Number of files currently in the cached listing
    pub fn available_count(&self) -> usize {
        let mut cache = self.names.lock().unwrap();
        cache.get_or_insert_with(|| self.list_directory()).len()
    }

    /// Drop the cached listing; the next lookup re-reads the directory
    pub fn invalidate(&self) {
        let mut cache = self.names.lock().unwrap();
        *cache = None;
    }

    fn list_directory(&self) -> HashSet<String> {
        match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect(),
            Err(e) => {
                warn!("Could not list receipt directory {:?}: {}", self.dir, e);
                HashSet::new()
            }
        }
    }
}
