use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use wayfarer::commands::lists::{id_from_json, ids_from_json};
use wayfarer::commands::{ListChange, ListRemoved};
use wayfarer::model::{DestinationDetails, ListDocument};
use wayfarer::store::StorageBackend;

use super::{blocking, SharedApi};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateListBody {
    #[serde(rename = "listName")]
    list_name: Option<String>,
    #[serde(rename = "destinationIDs")]
    destination_ids: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceListBody {
    #[serde(rename = "destinationIDs")]
    destination_ids: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct AddToListBody {
    #[serde(rename = "destinationID")]
    destination_id: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    sort: Option<String>,
}

pub async fn all<B: StorageBackend + 'static>(
    State(api): State<SharedApi<B>>,
) -> Result<Json<ListDocument>, ApiError> {
    Ok(Json(blocking(&api, |api| api.lists()).await?))
}

pub async fn create<B: StorageBackend + 'static>(
    State(api): State<SharedApi<B>>,
    body: Result<Json<CreateListBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ListChange>), ApiError> {
    let Json(body) = body?;
    let name = body.list_name.unwrap_or_default();
    let ids = ids_from_json(body.destination_ids.as_ref())?;
    let change = blocking(&api, move |api| api.create_list(&name, ids)).await?;
    Ok((StatusCode::CREATED, Json(change)))
}

pub async fn replace<B: StorageBackend + 'static>(
    State(api): State<SharedApi<B>>,
    Path(name): Path<String>,
    body: Result<Json<ReplaceListBody>, JsonRejection>,
) -> Result<Json<ListChange>, ApiError> {
    let Json(body) = body?;
    let ids = ids_from_json(body.destination_ids.as_ref())?;
    let change = blocking(&api, move |api| api.replace_list(&name, ids)).await?;
    Ok(Json(change))
}

pub async fn delete<B: StorageBackend + 'static>(
    State(api): State<SharedApi<B>>,
    Path(name): Path<String>,
) -> Result<Json<ListRemoved>, ApiError> {
    Ok(Json(blocking(&api, move |api| api.delete_list(&name)).await?))
}

pub async fn add<B: StorageBackend + 'static>(
    State(api): State<SharedApi<B>>,
    Path(name): Path<String>,
    body: Result<Json<AddToListBody>, JsonRejection>,
) -> Result<Json<ListChange>, ApiError> {
    let Json(body) = body?;
    let id = id_from_json(body.destination_id.as_ref())?;
    let change = blocking(&api, move |api| api.add_to_list(&name, id)).await?;
    Ok(Json(change))
}

pub async fn destinations<B: StorageBackend + 'static>(
    State(api): State<SharedApi<B>>,
    Path(name): Path<String>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<DestinationDetails>>, ApiError> {
    let details = blocking(&api, move |api| {
        api.list_destinations(&name, params.sort.as_deref())
    })
    .await?;
    Ok(Json(details))
}
