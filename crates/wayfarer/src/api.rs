//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all wayfarer operations, whichever UI sits on top (the HTTP
//! server today).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns state**: the loaded [`Dataset`] and the [`ListStore`]
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw limits and sort field names into typed values)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Transport concerns**: No status codes, no JSON rendering
//!
//! ## Generic Over StorageBackend
//!
//! `WayfarerApi<B: StorageBackend>` is generic over the list backend:
//! - Production: `WayfarerApi<FsBackend>`
//! - Testing: `WayfarerApi<MemBackend>`
//!
//! All methods take `&self`, so one instance can be shared behind an `Arc`.

use crate::commands::{self, ListChange, ListRemoved};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::{Coordinates, DestinationDetails, DestinationId, DestinationRecord, ListDocument};
use crate::store::{ListStore, StorageBackend};

pub use crate::commands::lists::SortField;

pub struct WayfarerApi<B: StorageBackend> {
    dataset: Dataset,
    lists: ListStore<B>,
}

impl<B: StorageBackend> WayfarerApi<B> {
    pub fn new(dataset: Dataset, backend: B) -> Self {
        Self {
            dataset,
            lists: ListStore::new(backend),
        }
    }

    pub fn destinations(&self) -> &[DestinationRecord] {
        commands::destinations::list_all(&self.dataset)
    }

    pub fn destination(&self, id: DestinationId) -> Result<&DestinationRecord> {
        commands::destinations::get_by_id(&self.dataset, id)
    }

    pub fn destination_details(&self, id: DestinationId) -> Result<DestinationDetails> {
        commands::destinations::details(&self.dataset, id)
    }

    pub fn coordinates(&self, id: DestinationId) -> Result<Vec<Coordinates>> {
        commands::destinations::coordinates(&self.dataset, id)
    }

    pub fn countries(&self) -> Vec<String> {
        commands::destinations::countries(&self.dataset)
    }

    /// `limit` is the raw `n` parameter; see [`commands::matching::parse_limit`].
    pub fn match_field(
        &self,
        field: Option<&str>,
        pattern: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Vec<DestinationId>> {
        let limit = commands::matching::parse_limit(limit);
        commands::matching::run(&self.dataset, field, pattern, limit)
    }

    pub fn lists(&self) -> Result<ListDocument> {
        commands::lists::all(&self.lists)
    }

    pub fn create_list(&self, name: &str, ids: Vec<DestinationId>) -> Result<ListChange> {
        commands::lists::create(&self.lists, name, ids)
    }

    pub fn replace_list(&self, name: &str, ids: Vec<DestinationId>) -> Result<ListChange> {
        commands::lists::replace(&self.lists, name, ids)
    }

    pub fn delete_list(&self, name: &str) -> Result<ListRemoved> {
        commands::lists::delete(&self.lists, name)
    }

    pub fn add_to_list(&self, name: &str, id: DestinationId) -> Result<ListChange> {
        commands::lists::add(&self.lists, name, id)
    }

    pub fn list_destinations(
        &self,
        name: &str,
        sort: Option<&str>,
    ) -> Result<Vec<DestinationDetails>> {
        let sort = sort
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<SortField>)
            .transpose()?;
        commands::lists::destinations(&self.lists, &self.dataset, name, sort)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn backend(&self) -> &B {
        self.lists.backend()
    }
}
