use crate::error::Result;
use crate::model::ListDocument;
use std::path::PathBuf;

/// Abstract interface for raw list document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`ListStore`](super::ListStore) handles the read-modify-write cycle.
///
/// Backends are shared between request handlers, hence `Send + Sync`.
pub trait StorageBackend: Send + Sync {
    /// Load the whole list document.
    /// A missing document is an empty one, not an error.
    fn load_lists(&self) -> Result<ListDocument>;

    /// Replace the whole list document.
    /// MUST be atomic (e.g. write to tmp then rename) so readers never see a partial write.
    fn save_lists(&self, lists: &ListDocument) -> Result<()>;

    /// Where the document lives. For MemBackend, a virtual path.
    fn document_path(&self) -> PathBuf;
}
