//! Request handlers.
//!
//! Handlers only decode requests and encode responses. Every decision is made
//! by [`WayfarerApi`](wayfarer::api::WayfarerApi), errors are turned into
//! responses by [`ApiError`](crate::error::ApiError).

use std::sync::Arc;
use wayfarer::api::WayfarerApi;
use wayfarer::store::StorageBackend;

use crate::error::ApiError;

pub mod destinations;
pub mod lists;

/// Shared handler state.
pub type SharedApi<B> = Arc<WayfarerApi<B>>;

/// Run a list store call on the blocking pool. List operations read and
/// rewrite the document file while holding the store's writer lock.
pub(crate) async fn blocking<B, T, F>(api: &SharedApi<B>, op: F) -> Result<T, ApiError>
where
    B: StorageBackend + 'static,
    T: Send + 'static,
    F: FnOnce(&WayfarerApi<B>) -> wayfarer::error::Result<T> + Send + 'static,
{
    let api = Arc::clone(api);
    Ok(tokio::task::spawn_blocking(move || op(&api)).await??)
}
