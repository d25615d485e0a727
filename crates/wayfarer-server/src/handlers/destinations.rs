use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use wayfarer::commands::destinations::parse_id;
use wayfarer::model::{Coordinates, DestinationDetails, DestinationId, DestinationRecord};
use wayfarer::store::StorageBackend;

use super::SharedApi;
use crate::error::ApiError;

pub async fn list_all<B: StorageBackend>(
    State(api): State<SharedApi<B>>,
) -> Json<Vec<DestinationRecord>> {
    Json(api.destinations().to_vec())
}

pub async fn details<B: StorageBackend>(
    State(api): State<SharedApi<B>>,
    Path(id): Path<String>,
) -> Result<Json<DestinationDetails>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(api.destination_details(id)?))
}

pub async fn coordinates<B: StorageBackend>(
    State(api): State<SharedApi<B>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Coordinates>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(api.coordinates(id)?))
}

pub async fn countries<B: StorageBackend>(State(api): State<SharedApi<B>>) -> Json<Vec<String>> {
    Json(api.countries())
}

#[derive(Debug, Deserialize)]
pub struct MatchParams {
    field: Option<String>,
    pattern: Option<String>,
    n: Option<String>,
}

pub async fn match_field<B: StorageBackend>(
    State(api): State<SharedApi<B>>,
    Query(params): Query<MatchParams>,
) -> Result<Json<Vec<DestinationId>>, ApiError> {
    let ids = api.match_field(
        params.field.as_deref(),
        params.pattern.as_deref(),
        params.n.as_deref(),
    )?;
    Ok(Json(ids))
}
