use super::backend::StorageBackend;
use crate::error::{Result, WayfarerError};
use crate::model::ListDocument;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory storage backend for testing.
///
/// Uses a `Mutex` rather than `RefCell` because backends are shared across
/// request handler threads.
#[derive(Default)]
pub struct MemBackend {
    lists: Mutex<ListDocument>,
    saves: AtomicUsize,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(lists: ListDocument) -> Self {
        Self {
            lists: Mutex::new(lists),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful `save_lists` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemBackend {
    fn load_lists(&self) -> Result<ListDocument> {
        let lists = self
            .lists
            .lock()
            .map_err(|_| WayfarerError::Store("memory backend lock poisoned".to_string()))?;
        Ok(lists.clone())
    }

    fn save_lists(&self, new_lists: &ListDocument) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(WayfarerError::Store("Simulated write error".to_string()));
        }
        let mut lists = self
            .lists
            .lock()
            .map_err(|_| WayfarerError::Store("memory backend lock poisoned".to_string()))?;
        *lists = new_lists.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn document_path(&self) -> PathBuf {
        PathBuf::from("memory://lists.json")
    }
}
