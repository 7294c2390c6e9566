//! Dataset error types
//!
//! Every check that runs while a dataset is being constructed reports
//! through [`DatasetError`]. A dataset that exists is valid.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Dataset`](super::Dataset)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Dataset text is not valid TOML or has the wrong shape
    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    /// Risk label is not one of Low, Medium, High
    #[error("Water body {id}: unknown risk level {label:?} (expected Low, Medium or High)")]
    UnknownRisk { id: u32, label: String },

    /// Two records share an id
    #[error("Duplicate water body id: {0}")]
    DuplicateId(u32),

    /// Record has an empty display name
    #[error("Water body {0}: name must not be empty")]
    EmptyName(u32),

    /// Pollution or water level outside 0-100
    #[error("Water body {id}: {field} = {value} is outside 0-100")]
    ScoreOutOfRange {
        id: u32,
        field: &'static str,
        value: f64,
    },

    /// Latitude or longitude outside WGS84 bounds
    #[error("Water body {id}: invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { id: u32, lat: f64, lng: f64 },

    /// Zone-of-impact radius is negative or not finite
    #[error("Water body {id}: invalid radius {radius}")]
    InvalidRadius { id: u32, radius: f64 },
}

impl From<toml::de::Error> for DatasetError {
    fn from(err: toml::de::Error) -> Self {
        DatasetError::Parse(err.to_string())
    }
}

/// Result type alias for dataset construction
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::UnknownRisk {
            id: 7,
            label: "Severe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Water body 7: unknown risk level \"Severe\" (expected Low, Medium or High)"
        );

        let err = DatasetError::DuplicateId(3);
        assert_eq!(err.to_string(), "Duplicate water body id: 3");
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: DatasetError = toml_err.into();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
