use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`WayfarerError`], used by UI layers to pick a
/// status code without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingParameter,
    InvalidInput,
    InvalidPattern,
    Conflict,
    NotFound,
    Internal,
}

#[derive(Error, Debug)]
pub enum WayfarerError {
    #[error("Destination ID not found")]
    DestinationNotFound(String),

    #[error("List '{0}' does not exist.")]
    ListNotFound(String),

    #[error("{0}")]
    MissingParameter(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{0}")]
    Conflict(String),

    #[error("Failed to load dataset {}: {source}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl WayfarerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DestinationNotFound(_) | Self::ListNotFound(_) => ErrorKind::NotFound,
            Self::MissingParameter(_) => ErrorKind::MissingParameter,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidPattern(_) => ErrorKind::InvalidPattern,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Dataset { .. }
            | Self::Csv(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Serialization(_)
            | Self::Store(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, WayfarerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_classified() {
        assert_eq!(
            WayfarerError::MissingParameter("x".into()).kind(),
            ErrorKind::MissingParameter
        );
        assert_eq!(
            WayfarerError::ListNotFound("trip".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            WayfarerError::Conflict("dup".into()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            WayfarerError::Store("boom".into()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn list_not_found_message_names_the_list() {
        let err = WayfarerError::ListNotFound("Summer".into());
        assert_eq!(err.to_string(), "List 'Summer' does not exist.");
    }
}
