//! List management.
//!
//! Each list name moves through a small lifecycle:
//!
//! ```text
//! Absent --create/add--> Present --replace/add--> Present --delete--> Absent
//! ```
//!
//! Every mutation goes through [`ListStore::update`], so a failed validation
//! leaves the persisted document untouched.

use crate::commands::{ListChange, ListRemoved};
use crate::dataset::Dataset;
use crate::error::{Result, WayfarerError};
use crate::model::{DestinationDetails, DestinationId, ListDocument};
use crate::store::{ListStore, StorageBackend};
use serde_json::Value;
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::info;

pub fn all<B: StorageBackend>(store: &ListStore<B>) -> Result<ListDocument> {
    store.load()
}

pub fn create<B: StorageBackend>(
    store: &ListStore<B>,
    name: &str,
    ids: Vec<DestinationId>,
) -> Result<ListChange> {
    if name.is_empty() {
        return Err(WayfarerError::InvalidInput(
            "List name and an array of destination IDs are required.".to_string(),
        ));
    }

    store.update(|lists| {
        if lists.contains_key(name) {
            return Err(WayfarerError::Conflict(format!(
                "List '{name}' already exists."
            )));
        }
        lists.insert(name.to_string(), ids.clone());
        Ok(())
    })?;

    info!(list = name, count = ids.len(), "Created list");
    Ok(ListChange::new(
        format!("List '{name}' created successfully."),
        name,
        ids,
    ))
}

/// Overwrite the ids of an existing list. Order is kept and no dedup is applied.
pub fn replace<B: StorageBackend>(
    store: &ListStore<B>,
    name: &str,
    ids: Vec<DestinationId>,
) -> Result<ListChange> {
    store.update(|lists| match lists.get_mut(name) {
        Some(existing) => {
            *existing = ids.clone();
            Ok(())
        }
        None => Err(WayfarerError::ListNotFound(name.to_string())),
    })?;

    info!(list = name, count = ids.len(), "Replaced list");
    Ok(ListChange::new(
        format!("List '{name}' updated successfully."),
        name,
        ids,
    ))
}

pub fn delete<B: StorageBackend>(store: &ListStore<B>, name: &str) -> Result<ListRemoved> {
    store.update(|lists| {
        lists
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| WayfarerError::ListNotFound(name.to_string()))
    })?;

    info!(list = name, "Deleted list");
    Ok(ListRemoved {
        message: format!("List '{name}' deleted successfully."),
    })
}

/// Append `id` to `name`, creating the list when it does not exist yet.
pub fn add<B: StorageBackend>(
    store: &ListStore<B>,
    name: &str,
    id: DestinationId,
) -> Result<ListChange> {
    if name.is_empty() {
        return Err(WayfarerError::InvalidInput(
            "List name is required.".to_string(),
        ));
    }

    let ids = store.update(|lists| match lists.get_mut(name) {
        None => {
            lists.insert(name.to_string(), vec![id]);
            Ok(vec![id])
        }
        Some(existing) if existing.contains(&id) => Err(WayfarerError::Conflict(format!(
            "Destination ID {id} is already in the list '{name}'."
        ))),
        Some(existing) => {
            existing.push(id);
            Ok(existing.clone())
        }
    })?;

    info!(list = name, destination = id, "Added destination to list");
    Ok(ListChange::new(
        format!("Destination ID {id} added to list '{name}' successfully."),
        name,
        ids,
    ))
}

/// Details of every list member present in the dataset, in list order or
/// sorted by `sort`. Ids without a matching record are skipped.
pub fn destinations<B: StorageBackend>(
    store: &ListStore<B>,
    dataset: &Dataset,
    name: &str,
    sort: Option<SortField>,
) -> Result<Vec<DestinationDetails>> {
    let lists = store.load()?;
    let ids = lists
        .get(name)
        .ok_or_else(|| WayfarerError::ListNotFound(name.to_string()))?;

    let mut details: Vec<DestinationDetails> = ids
        .iter()
        .filter_map(|id| dataset.get(*id))
        .map(|record| record.details())
        .collect();

    if let Some(field) = sort {
        // stable: equal keys keep list order
        details.sort_by(|a, b| field.compare(a, b));
    }
    Ok(details)
}

/// Detail fields a list can be sorted by. Text fields compare case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Category,
    Region,
    Country,
    Currency,
    Language,
    MajorityReligion,
    FamousFoods,
    BestTimeToVisit,
    CostOfLiving,
    Safety,
    CulturalSignificance,
    Description,
    ApproximateAnnualTourists,
}

impl SortField {
    fn text<'a>(&self, d: &'a DestinationDetails) -> &'a str {
        match self {
            Self::Id => "",
            Self::Name => &d.name,
            Self::Category => &d.category,
            Self::Region => &d.region,
            Self::Country => &d.country,
            Self::Currency => &d.currency,
            Self::Language => &d.language,
            Self::MajorityReligion => &d.majority_religion,
            Self::FamousFoods => &d.famous_foods,
            Self::BestTimeToVisit => &d.best_time_to_visit,
            Self::CostOfLiving => &d.cost_of_living,
            Self::Safety => &d.safety,
            Self::CulturalSignificance => &d.cultural_significance,
            Self::Description => &d.description,
            Self::ApproximateAnnualTourists => &d.approximate_annual_tourists,
        }
    }

    pub fn compare(&self, a: &DestinationDetails, b: &DestinationDetails) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            _ => self
                .text(a)
                .to_lowercase()
                .cmp(&self.text(b).to_lowercase()),
        }
    }
}

impl FromStr for SortField {
    type Err = WayfarerError;

    /// Accepts the detail wire names (`bestTimetoVisit`, `saftey`, ...) and
    /// a few friendlier spellings.
    fn from_str(s: &str) -> Result<Self> {
        let field = match s.trim().to_lowercase().as_str() {
            "id" => Self::Id,
            "name" | "destination" => Self::Name,
            "category" => Self::Category,
            "region" => Self::Region,
            "country" => Self::Country,
            "currency" => Self::Currency,
            "language" => Self::Language,
            "majorityreligion" | "religion" => Self::MajorityReligion,
            "famousfoods" | "foods" => Self::FamousFoods,
            "besttimetovisit" => Self::BestTimeToVisit,
            "costofliving" => Self::CostOfLiving,
            "saftey" | "safety" => Self::Safety,
            "culturalsignificance" => Self::CulturalSignificance,
            "description" => Self::Description,
            "approximateannualtourists" | "tourists" => Self::ApproximateAnnualTourists,
            _ => {
                return Err(WayfarerError::InvalidInput(format!(
                    "Cannot sort by unknown field '{s}'."
                )))
            }
        };
        Ok(field)
    }
}

/// Decode the `destinationIDs` member of a request body.
pub fn ids_from_json(value: Option<&Value>) -> Result<Vec<DestinationId>> {
    let items = value.and_then(Value::as_array).ok_or_else(|| {
        WayfarerError::InvalidInput("An array of destination IDs is required.".to_string())
    })?;
    items
        .iter()
        .map(|item| {
            id_from_value(item).ok_or_else(|| {
                WayfarerError::InvalidInput(format!("Invalid destination ID: {item}"))
            })
        })
        .collect()
}

/// Decode the `destinationID` member of a request body.
///
/// Falsy values (`null`, `0`, `""`, `false`) count as missing. Ids start at 1,
/// so none of them could name a destination.
pub fn id_from_json(value: Option<&Value>) -> Result<DestinationId> {
    let missing = || WayfarerError::MissingParameter("Destination ID is required.".to_string());
    let item = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Err(missing()),
        Some(Value::String(s)) if s.is_empty() => return Err(missing()),
        Some(item) => item,
    };
    match id_from_value(item) {
        Some(0) => Err(missing()),
        Some(id) => Ok(id),
        None => Err(WayfarerError::InvalidInput(format!(
            "Invalid destination ID: {item}"
        ))),
    }
}

fn id_from_value(value: &Value) -> Option<DestinationId> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| DestinationId::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
