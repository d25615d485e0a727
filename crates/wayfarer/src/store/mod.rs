//! # Storage Layer
//!
//! This module defines how user-curated lists are persisted. The
//! [`StorageBackend`] trait lets the application work with different backends.
//!
//! ## Whole-Document Persistence
//!
//! All lists live in one JSON object mapping list name to destination ids:
//!
//! ```text
//! {
//!   "Europe": [1, 2, 5],
//!   "Beaches": [3]
//! }
//! ```
//!
//! There is no partial update and no versioning. Each mutation reads the full
//! document, changes it in memory, and writes the full document back.
//!
//! ## Consistency
//!
//! - **Single writer**: [`ListStore`] serializes mutations behind a lock, so
//!   concurrent requests in one process cannot lose each other's updates.
//! - **Atomic replace**: backends swap the document in one step (tmp file then
//!   rename for [`fs_backend::FsBackend`]), so readers see either the old or the
//!   new document.
//! - **Across processes**: last writer wins. Two servers sharing one file can
//!   still overwrite each other.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production JSON file storage.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod list_store;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use list_store::ListStore;
