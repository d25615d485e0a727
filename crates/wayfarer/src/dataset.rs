//! # Dataset Store
//!
//! The destination dataset is read once at startup from a CSV file and kept in
//! memory for the lifetime of the process. Records are never added or removed
//! afterwards, so the store hands out shared references without any locking.
//!
//! ## Identifiers
//!
//! Rows are numbered in file order starting at 1. An `ID` column already present
//! in the file is ignored; the generated id always wins, which keeps ids dense.
//!
//! ## Header Cleaning
//!
//! Spreadsheet exports often prefix the first header with a UTF-8 byte-order
//! mark, turning `Destination` into `\u{feff}Destination`. Headers are trimmed
//! of BOMs and surrounding whitespace before rows are decoded.

use crate::error::{Result, WayfarerError};
use crate::model::{DestinationId, DestinationRecord, BOM};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DestinationRecord>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = csv::Reader::from_path(path).map_err(|source| WayfarerError::Dataset {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_csv(reader).map_err(|e| match e {
            WayfarerError::Csv(source) => WayfarerError::Dataset {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded destination dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    /// Build a dataset from already-decoded rows, numbering them from 1.
    pub fn from_records(records: Vec<DestinationRecord>) -> Self {
        let records = records
            .into_iter()
            .zip(1..)
            .map(|(mut record, id)| {
                record.id = id;
                record
            })
            .collect();
        Self { records }
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers: StringRecord = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches(BOM).trim())
            .collect();
        debug!(columns = headers.len(), "Decoding dataset rows");

        let latitude = column(&headers, "Latitude");
        let longitude = column(&headers, "Longitude");

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record: DestinationRecord = row.deserialize(Some(&headers))?;
            record.latitude_text = cell(&row, latitude);
            record.longitude_text = cell(&row, longitude);
            records.push(record);
        }
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    /// First record whose id equals `id`.
    pub fn get(&self, id: DestinationId) -> Option<&DestinationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn cell(row: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Dataset;

    pub use crate::test_utils::SAMPLE_CSV;

    pub fn sample() -> Dataset {
        Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }
}
