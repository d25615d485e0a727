//! # Domain Model
//!
//! Core data types for wayfarer: [`DestinationRecord`], its projections
//! ([`DestinationDetails`], [`Coordinates`]) and the [`ListDocument`].
//!
//! ## Destination Records
//!
//! A record is one row of the travel dataset. Column names in the CSV are kept
//! verbatim on the wire (`"Best Time to Visit"`, `"Famous Foods"`, ...) so the
//! raw listing endpoint returns exactly what was loaded, plus the generated
//! `ID` column.
//!
//! ```text
//! ID  Destination        Country  Latitude  Longitude
//! 1   Rome (Colosseum)   Italy    41.8902   12.4922
//! 2   Paris              France   48.8566   2.3522
//! ```
//!
//! Identifiers are assigned at load time and never change for the lifetime of
//! the process.
//!
//! ## Coordinates
//!
//! Latitude and longitude are optional. Empty or unparseable cells (`""`,
//! `"N/A"`) load as `None` instead of failing the whole dataset. The cell text
//! is kept as well, so field matching sees `"52.5200"` or `"N/A"` exactly as
//! written rather than a reformatted float.
//!
//! ## Lists
//!
//! A [`ListDocument`] maps a list name to an ordered sequence of destination
//! ids. The whole document is the unit of persistence, see [`crate::store`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

pub type DestinationId = u32;

/// Named lists of destination ids, persisted as a single JSON object.
pub type ListDocument = BTreeMap<String, Vec<DestinationId>>;

/// Byte-order mark some spreadsheet exports prepend to the first header.
pub(crate) const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationRecord {
    #[serde(rename = "ID")]
    pub id: DestinationId,
    #[serde(rename = "Destination")]
    pub name: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Latitude", deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(rename = "Approximate Annual Tourists")]
    pub annual_tourists: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Majority Religion")]
    pub religion: String,
    #[serde(rename = "Famous Foods")]
    pub famous_foods: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Best Time to Visit")]
    pub best_time_to_visit: String,
    #[serde(rename = "Cost of Living")]
    pub cost_of_living: String,
    #[serde(rename = "Safety")]
    pub safety: String,
    #[serde(rename = "Cultural Significance")]
    pub cultural_significance: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(skip)]
    pub latitude_text: String,
    #[serde(skip)]
    pub longitude_text: String,
}

impl DestinationRecord {
    /// Look up a field by its raw column name.
    ///
    /// Returns `None` for unknown columns and for absent coordinates. A leading
    /// byte-order mark on `field` is ignored, so `"\u{feff}Destination"` resolves
    /// to the name column.
    pub fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        let text = |s: &str| Some(Cow::Owned(s.to_string()));
        match field.trim_start_matches(BOM) {
            "ID" => text(&self.id.to_string()),
            "Destination" => Some(Cow::Borrowed(self.name.as_str())),
            "Region" => Some(Cow::Borrowed(self.region.as_str())),
            "Country" => Some(Cow::Borrowed(self.country.as_str())),
            "Category" => Some(Cow::Borrowed(self.category.as_str())),
            "Latitude" => coordinate_text(&self.latitude_text, self.latitude),
            "Longitude" => coordinate_text(&self.longitude_text, self.longitude),
            "Approximate Annual Tourists" => Some(Cow::Borrowed(self.annual_tourists.as_str())),
            "Currency" => Some(Cow::Borrowed(self.currency.as_str())),
            "Majority Religion" => Some(Cow::Borrowed(self.religion.as_str())),
            "Famous Foods" => Some(Cow::Borrowed(self.famous_foods.as_str())),
            "Language" => Some(Cow::Borrowed(self.language.as_str())),
            "Best Time to Visit" => Some(Cow::Borrowed(self.best_time_to_visit.as_str())),
            "Cost of Living" => Some(Cow::Borrowed(self.cost_of_living.as_str())),
            "Safety" => Some(Cow::Borrowed(self.safety.as_str())),
            "Cultural Significance" => Some(Cow::Borrowed(self.cultural_significance.as_str())),
            "Description" => Some(Cow::Borrowed(self.description.as_str())),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            id: self.id,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn details(&self) -> DestinationDetails {
        DestinationDetails {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            approximate_annual_tourists: self.annual_tourists.clone(),
            currency: self.currency.clone(),
            majority_religion: self.religion.clone(),
            famous_foods: self.famous_foods.clone(),
            language: self.language.clone(),
            best_time_to_visit: self.best_time_to_visit.clone(),
            cost_of_living: self.cost_of_living.clone(),
            safety: self.safety.clone(),
            cultural_significance: self.cultural_significance.clone(),
            description: self.description.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            region: self.region.clone(),
            country: self.country.clone(),
        }
    }
}

/// Projection of a record used by detail views.
///
/// Wire names follow what the browser client reads, including `saftey`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationDetails {
    pub id: DestinationId,
    pub name: String,
    pub category: String,
    #[serde(rename = "approximateAnnualTourists")]
    pub approximate_annual_tourists: String,
    pub currency: String,
    #[serde(rename = "majorityReligion")]
    pub majority_religion: String,
    #[serde(rename = "famousFoods")]
    pub famous_foods: String,
    pub language: String,
    #[serde(rename = "bestTimetoVisit")]
    pub best_time_to_visit: String,
    #[serde(rename = "costofLiving")]
    pub cost_of_living: String,
    #[serde(rename = "saftey")]
    pub safety: String,
    #[serde(rename = "culturalSignificance")]
    pub cultural_significance: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub id: DestinationId,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Cell text when the record came from a file, the formatted value otherwise.
fn coordinate_text(text: &str, value: Option<f64>) -> Option<Cow<'_, str>> {
    if text.is_empty() {
        value.map(|v| Cow::Owned(v.to_string()))
    } else {
        Some(Cow::Borrowed(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DestinationRecord {
        DestinationRecord {
            id: 7,
            name: "Kyoto".into(),
            country: "Japan".into(),
            latitude: Some(35.0116),
            safety: "Very safe".into(),
            ..Default::default()
        }
    }

    #[test]
    fn field_value_uses_raw_column_names() {
        let r = record();
        assert_eq!(r.field_value("Country").as_deref(), Some("Japan"));
        assert_eq!(r.field_value("Destination").as_deref(), Some("Kyoto"));
        assert_eq!(r.field_value("ID").as_deref(), Some("7"));
        assert_eq!(r.field_value("Latitude").as_deref(), Some("35.0116"));
        assert_eq!(r.field_value("Longitude"), None);
        assert_eq!(r.field_value("country"), None);
    }

    #[test]
    fn field_value_prefers_loaded_coordinate_text() {
        let r = DestinationRecord {
            latitude: Some(52.52),
            latitude_text: "52.5200".into(),
            longitude_text: "N/A".into(),
            ..record()
        };
        assert_eq!(r.field_value("Latitude").as_deref(), Some("52.5200"));
        assert_eq!(r.field_value("Longitude").as_deref(), Some("N/A"));
    }

    #[test]
    fn coordinate_text_is_not_serialized() {
        let r = DestinationRecord {
            latitude_text: "35.0116".into(),
            ..record()
        };
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["Latitude"], 35.0116);
        assert!(json.get("latitude_text").is_none());
    }

    #[test]
    fn field_value_ignores_bom_prefix() {
        let r = record();
        assert_eq!(
            r.field_value("\u{feff}Destination").as_deref(),
            Some("Kyoto")
        );
    }

    #[test]
    fn details_keep_client_wire_names() {
        let json = serde_json::to_value(record().details()).unwrap();
        assert_eq!(json["name"], "Kyoto");
        assert_eq!(json["saftey"], "Very safe");
        assert_eq!(json["longitude"], serde_json::Value::Null);
        assert!(json.get("bestTimetoVisit").is_some());
    }

    #[test]
    fn record_serializes_raw_columns_and_id() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["ID"], 7);
        assert_eq!(json["Destination"], "Kyoto");
        assert!(json.get("Best Time to Visit").is_some());
    }
}
