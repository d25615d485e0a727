use super::backend::StorageBackend;
use crate::error::{Result, WayfarerError};
use crate::model::ListDocument;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the list document as pretty-printed JSON in a single file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(WayfarerError::Io)?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

impl StorageBackend for FsBackend {
    fn load_lists(&self) -> Result<ListDocument> {
        if !self.path.exists() {
            return Ok(ListDocument::new());
        }
        let content = fs::read_to_string(&self.path).map_err(WayfarerError::Io)?;
        // A freshly touched file counts as an empty document
        if content.trim().is_empty() {
            return Ok(ListDocument::new());
        }
        let lists: ListDocument =
            serde_json::from_str(&content).map_err(WayfarerError::Serialization)?;
        Ok(lists)
    }

    fn save_lists(&self, lists: &ListDocument) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(lists).map_err(WayfarerError::Serialization)?;

        // Atomic write
        let tmp_file = dir.join(format!(".lists-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(WayfarerError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(WayfarerError::Io(e));
        }

        Ok(())
    }

    fn document_path(&self) -> PathBuf {
        self.path.clone()
    }
}
