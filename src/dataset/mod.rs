//! Static water body dataset
//!
//! The seed records are compiled in from `data/water_bodies.toml` and
//! validated once on first access. A [`Dataset`] has no mutation API:
//! every view reads the same ordered slice.
//!
//! # Example
//!
//! ```rust
//! use waterwatch::dataset::{Dataset, RiskLevel};
//!
//! let dataset = Dataset::seed();
//! let high = dataset.iter().filter(|b| b.risk == RiskLevel::High).count();
//! assert_eq!(high, 2);
//! ```

pub mod error;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use types::{RiskLevel, WaterBody};

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use types::RawWaterBody;

/// Seed data embedded at build time
const SEED_TOML: &str = include_str!("../../data/water_bodies.toml");

/// File layout: a list of `[[water_body]]` tables
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    water_body: Vec<RawWaterBody>,
}

/// Immutable, ordered list of water bodies
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    bodies: Vec<WaterBody>,
}

impl Dataset {
    /// The embedded seed dataset
    ///
    /// # Panics
    /// Panics if the embedded file is invalid. The file is part of the
    /// build and its validity is covered by the test suite.
    pub fn seed() -> &'static Dataset {
        static SEED: OnceLock<Dataset> = OnceLock::new();
        SEED.get_or_init(|| match Dataset::from_toml_str(SEED_TOML) {
            Ok(dataset) => dataset,
            Err(e) => panic!("embedded water body dataset is invalid: {e}"),
        })
    }

    /// Build a dataset from records, checking every invariant
    pub fn from_records(bodies: Vec<WaterBody>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            body.validate()?;
            if !seen.insert(body.id) {
                return Err(DatasetError::DuplicateId(body.id));
            }
        }

        tracing::debug!("Built dataset with {} water bodies", bodies.len());
        Ok(Self { bodies })
    }

    /// Parse and validate a dataset from TOML text
    pub fn from_toml_str(content: &str) -> DatasetResult<Self> {
        let file: DatasetFile = toml::from_str(content)?;
        let bodies = file
            .water_body
            .into_iter()
            .map(WaterBody::try_from)
            .collect::<DatasetResult<Vec<_>>>()?;
        Self::from_records(bodies)
    }

    /// Load a dataset file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let dataset = Self::from_toml_str(&content)?;
        tracing::info!("Loaded {} water bodies from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Records in dataset order
    pub fn bodies(&self) -> &[WaterBody] {
        &self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WaterBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&WaterBody> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a WaterBody;
    type IntoIter = std::slice::Iter<'a, WaterBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dataset() {
        let dataset = Dataset::seed();
        assert_eq!(dataset.len(), 4);

        let names: Vec<_> = dataset.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Yamuna River", "Bhalswa Lake", "Naini Lake", "Sanjay Lake"]
        );

        let risks: Vec<_> = dataset.iter().map(|b| b.risk).collect();
        assert_eq!(
            risks,
            vec![
                RiskLevel::High,
                RiskLevel::High,
                RiskLevel::Low,
                RiskLevel::Medium
            ]
        );
    }

    #[test]
    fn test_seed_record_fields() {
        let yamuna = Dataset::seed().get(1).unwrap();
        assert_eq!(yamuna.pollution_level, 75.0);
        assert_eq!(yamuna.water_level, 60.0);
        assert_eq!(yamuna.lat, 28.6139);
        assert_eq!(yamuna.lng, 77.209);
        assert_eq!(yamuna.affected, "Aquatic life, Drinking water");
        assert_eq!(yamuna.radius, 5000.0);

        let sanjay = Dataset::seed().get(4).unwrap();
        assert_eq!(sanjay.radius, 1500.0);
        assert!(Dataset::seed().get(99).is_none());
    }

    #[test]
    fn test_from_toml_rejects_unknown_risk() {
        let content = r#"
            [[water_body]]
            id = 1
            name = "Test Lake"
            pollution_level = 10
            water_level = 20
            risk = "Extreme"
            lat = 28.0
            lng = 77.0
        "#;

        let err = Dataset::from_toml_str(content).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownRisk { id: 1, .. }));
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let bodies = vec![
            WaterBody::new(1, "A", RiskLevel::Low),
            WaterBody::new(1, "B", RiskLevel::High),
        ];
        assert_eq!(
            Dataset::from_records(bodies),
            Err(DatasetError::DuplicateId(1))
        );
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_toml_str("").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.iter().count(), 0);
    }

    #[test]
    fn test_malformed_toml() {
        let err = Dataset::from_toml_str("[[water_body]]\nid = \"one\"").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
