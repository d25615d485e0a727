use crate::dataset::Dataset;
use crate::error::{Result, WayfarerError};
use crate::model::{Coordinates, DestinationDetails, DestinationId, DestinationRecord};
use std::collections::HashSet;

pub fn list_all(dataset: &Dataset) -> &[DestinationRecord] {
    dataset.records()
}

pub fn get_by_id(dataset: &Dataset, id: DestinationId) -> Result<&DestinationRecord> {
    dataset
        .get(id)
        .ok_or_else(|| WayfarerError::DestinationNotFound(id.to_string()))
}

pub fn details(dataset: &Dataset, id: DestinationId) -> Result<DestinationDetails> {
    get_by_id(dataset, id).map(DestinationRecord::details)
}

/// Coordinates wrapped in a one-element vec, the shape map clients expect.
pub fn coordinates(dataset: &Dataset, id: DestinationId) -> Result<Vec<Coordinates>> {
    get_by_id(dataset, id).map(|record| vec![record.coordinates()])
}

/// Distinct country names in order of first appearance.
pub fn countries(dataset: &Dataset) -> Vec<String> {
    let mut seen = HashSet::new();
    dataset
        .records()
        .iter()
        .map(|r| r.country.as_str())
        .filter(|country| !country.is_empty() && seen.insert(*country))
        .map(str::to_string)
        .collect()
}

/// Parse a path segment into an id. Anything that is not an id cannot match one.
pub fn parse_id(raw: &str) -> Result<DestinationId> {
    raw.trim()
        .parse()
        .map_err(|_| WayfarerError::DestinationNotFound(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::sample;

    #[test]
    fn list_all_keeps_load_order() {
        let dataset = sample();
        let names: Vec<_> = list_all(&dataset).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Rome (Colosseum)", "Paris", "Nice", "Amalfi Coast", "Berlin"]
        );
    }

    #[test]
    fn get_by_id_finds_assigned_ids_only() {
        let dataset = sample();
        for id in 1..=5 {
            assert_eq!(get_by_id(&dataset, id).unwrap().id, id);
        }
        assert!(matches!(
            get_by_id(&dataset, 6),
            Err(WayfarerError::DestinationNotFound(_))
        ));
    }

    #[test]
    fn details_projects_record() {
        let dataset = sample();
        let paris = details(&dataset, 2).unwrap();
        assert_eq!(paris.name, "Paris");
        assert_eq!(paris.country, "France");
        assert_eq!(paris.language, "French");
        assert_eq!(paris.latitude, Some(48.8566));
    }

    #[test]
    fn coordinates_is_single_element() {
        let dataset = sample();
        let coords = coordinates(&dataset, 5).unwrap();
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].id, 5);
        assert_eq!(coords[0].latitude, Some(52.52));
        assert_eq!(coords[0].longitude, Some(13.405));
    }

    #[test]
    fn coordinates_for_unknown_id_is_not_found() {
        let dataset = sample();
        assert!(coordinates(&dataset, 99).is_err());
    }

    #[test]
    fn countries_are_distinct_in_first_seen_order() {
        let dataset = sample();
        assert_eq!(countries(&dataset), vec!["Italy", "France", "Germany"]);
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert!(matches!(
            parse_id("abc"),
            Err(WayfarerError::DestinationNotFound(raw)) if raw == "abc"
        ));
        assert!(parse_id("-1").is_err());
    }
}
