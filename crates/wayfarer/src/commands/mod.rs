//! # Command Layer
//!
//! This module contains the **core business logic** of wayfarer. Each group of
//! operations lives in its own submodule and is written as plain functions over
//! the [`Dataset`](crate::dataset::Dataset) and the
//! [`ListStore`](crate::store::ListStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate inputs (presence and shape only, ids are not checked against the dataset)
//! - Scan the dataset or mutate the list document
//! - Return structured values, never pre-rendered responses
//!
//! ## What Commands Do NOT Do
//!
//! - **Any HTTP**: No status codes, headers, or request parsing
//! - **Logging of outcomes for humans**: messages are returned as data
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Tests use the inline
//! sample dataset and `MemBackend`, so they never touch the filesystem.
//!
//! ## Command Modules
//!
//! - [`destinations`]: Listing, lookup by id, detail and coordinate projections, countries
//! - [`matching`]: Case-insensitive regex matching on a single field
//! - [`lists`]: Create, replace, delete, append to, and read lists

use crate::model::DestinationId;
use serde::{Deserialize, Serialize};

pub mod destinations;
pub mod lists;
pub mod matching;

/// Result of a mutation that leaves a list in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListChange {
    pub message: String,
    #[serde(rename = "listName")]
    pub list_name: String,
    #[serde(rename = "destinationIDs")]
    pub destination_ids: Vec<DestinationId>,
}

impl ListChange {
    pub fn new(
        message: impl Into<String>,
        list_name: impl Into<String>,
        destination_ids: Vec<DestinationId>,
    ) -> Self {
        Self {
            message: message.into(),
            list_name: list_name.into(),
            destination_ids,
        }
    }
}

/// Result of removing a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRemoved {
    pub message: String,
}
