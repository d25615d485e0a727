//! # Initialization
//!
//! Builds the production [`WayfarerApi`] from a [`ServerConfig`]:
//!
//! 1. Load the CSV dataset into memory (fails fast if the file is missing or malformed).
//! 2. Point an [`FsBackend`] at the lists document. The document itself is not
//!    touched until the first mutation, a missing file reads as no lists.
//!
//! Relative paths are resolved against `base_dir`, normally the process working
//! directory.

use crate::api::WayfarerApi;
use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use crate::store::StorageBackend;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn initialize(config: &ServerConfig, base_dir: &Path) -> Result<WayfarerApi<FsBackend>> {
    let dataset_path = resolve(base_dir, &config.dataset_path);
    let lists_path = resolve(base_dir, &config.lists_path);

    let dataset = Dataset::load(&dataset_path)?;
    let backend = FsBackend::new(lists_path);
    info!(lists = %backend.document_path().display(), "Using list document");

    Ok(WayfarerApi::new(dataset, backend))
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::SAMPLE_CSV;
    use crate::error::WayfarerError;
    use std::fs;

    #[test]
    fn initialize_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/destinations.csv"), SAMPLE_CSV).unwrap();

        let api = initialize(&ServerConfig::default(), dir.path()).unwrap();
        assert_eq!(api.destinations().len(), 5);
        assert_eq!(
            api.backend().document_path(),
            dir.path().join("data/lists.json")
        );
        assert!(api.lists().unwrap().is_empty());
    }

    #[test]
    fn initialize_fails_without_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let Err(err) = initialize(&ServerConfig::default(), dir.path()) else {
            panic!("initialize should fail without a dataset");
        };
        assert!(matches!(err, WayfarerError::Dataset { .. }));
    }
}
