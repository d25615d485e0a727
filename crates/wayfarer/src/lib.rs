//! # Wayfarer Architecture
//!
//! Wayfarer is a **UI-agnostic travel destination library**. It loads a CSV
//! dataset of destinations, answers queries over it, and manages user-curated
//! lists of destinations. The HTTP server in `wayfarer-server` is one client of
//! this library, not the library itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (wayfarer-server)                               │
//! │  - Routes, request decoding, status codes, JSON bodies      │
//! │  - The ONLY place that knows about sockets and HTTP         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the dataset and the list store        │
//! │  - Normalizes raw inputs (limits, sort fields)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Matching, projections, list lifecycle                    │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (dataset.rs, store/)                            │
//! │  - Immutable in-memory dataset                              │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Transport Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<T, WayfarerError>`. Errors carry an [`error::ErrorKind`] so any UI
//! can map them to its own vocabulary (HTTP status codes, exit codes, ...).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic
//! - [`dataset`]: CSV loading and the in-memory destination store
//! - [`store`]: List document persistence
//! - [`model`]: Core data types (`DestinationRecord`, `ListDocument`, ...)
//! - [`config`]: Layered server configuration
//! - [`init`]: Production wiring from a config
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
