use super::backend::StorageBackend;
use crate::error::{Result, WayfarerError};
use crate::model::ListDocument;
use std::sync::Mutex;

/// Read-modify-write access to the list document.
///
/// Every mutation loads the whole document, applies a change in memory and
/// writes the whole document back. The writer lock is held for the entire
/// cycle, so two mutations in the same process can no longer interleave
/// between the read and the write. Plain reads skip the lock: the backend
/// replaces the document atomically.
pub struct ListStore<B: StorageBackend> {
    backend: B,
    writer: Mutex<()>,
}

impl<B: StorageBackend> ListStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            writer: Mutex::new(()),
        }
    }

    pub fn load(&self) -> Result<ListDocument> {
        self.backend.load_lists()
    }

    /// Apply `change` to a freshly loaded document and persist the result.
    ///
    /// If `change` fails, nothing is written and the error is returned as is.
    pub fn update<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut ListDocument) -> Result<T>,
    {
        let _guard = self
            .writer
            .lock()
            .map_err(|_| WayfarerError::Store("list writer lock poisoned".to_string()))?;

        let mut lists = self.backend.load_lists()?;
        let outcome = change(&mut lists)?;
        self.backend.save_lists(&lists)?;
        Ok(outcome)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn update_persists_change() {
        let store = ListStore::new(MemBackend::new());
        store
            .update(|lists| {
                lists.insert("Europe".into(), vec![1, 2]);
                Ok(())
            })
            .unwrap();

        assert_eq!(store.load().unwrap().get("Europe"), Some(&vec![1, 2]));
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn failed_change_writes_nothing() {
        let store = ListStore::new(MemBackend::new());
        let result: Result<()> = store.update(|lists| {
            lists.insert("Scratch".into(), vec![9]);
            Err(WayfarerError::Conflict("nope".into()))
        });

        assert!(matches!(result, Err(WayfarerError::Conflict(_))));
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn write_error_is_propagated() {
        let store = ListStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        let result = store.update(|lists| {
            lists.insert("Asia".into(), vec![3]);
            Ok(())
        });
        assert!(matches!(result, Err(WayfarerError::Store(_))));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let store = Arc::new(ListStore::new(MemBackend::new()));
        let handles: Vec<_> = (1..=16)
            .map(|id| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .update(|lists| {
                            lists.entry("Everything".into()).or_default().push(id);
                            Ok(())
                        })
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids = store.load().unwrap().remove("Everything").unwrap();
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }
}
