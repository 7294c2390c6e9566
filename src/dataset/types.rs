//! Core data types for the water body dataset
//!
//! - `WaterBody`: one monitored river or lake
//! - `RiskLevel`: the closed risk classification that drives color coding

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{DatasetError, DatasetResult};

/// Risk category of a water body
///
/// Ordered from least to most severe so `max()` over a set of bodies
/// yields the worst one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Get all risk levels for iteration
    pub fn all() -> &'static [RiskLevel] {
        &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }

    /// Display label, identical to the dataset spelling
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Whether this level counts as a critical alert on the dashboard
    pub fn is_critical(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels are matched exactly; there is no fallback bucket.
impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(other.to_string()),
        }
    }
}

/// A monitored water body
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterBody {
    /// Unique identifier
    pub id: u32,
    /// Display name (e.g., "Yamuna River")
    pub name: String,
    /// Relative pollution index, 0-100
    pub pollution_level: f64,
    /// Relative water level index, 0-100
    pub water_level: f64,
    /// Risk category
    pub risk: RiskLevel,
    /// Latitude, WGS84 degrees
    pub lat: f64,
    /// Longitude, WGS84 degrees
    pub lng: f64,
    /// Free-text description of what is affected
    pub affected: String,
    /// Zone of impact in meters
    pub radius: f64,
}

impl WaterBody {
    /// Create a water body with required identity and risk; remaining
    /// fields start at zero and are filled with the builder methods.
    pub fn new(id: u32, name: impl Into<String>, risk: RiskLevel) -> Self {
        Self {
            id,
            name: name.into(),
            pollution_level: 0.0,
            water_level: 0.0,
            risk,
            lat: 0.0,
            lng: 0.0,
            affected: String::new(),
            radius: 0.0,
        }
    }

    /// Builder: set pollution and water level scores
    pub fn levels(mut self, pollution_level: f64, water_level: f64) -> Self {
        self.pollution_level = pollution_level;
        self.water_level = water_level;
        self
    }

    /// Builder: set coordinates
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    /// Builder: set affected-areas text
    pub fn affected(mut self, affected: impl Into<String>) -> Self {
        self.affected = affected.into();
        self
    }

    /// Builder: set zone-of-impact radius in meters
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Check the per-record invariants
    pub fn validate(&self) -> DatasetResult<()> {
        if self.name.trim().is_empty() {
            return Err(DatasetError::EmptyName(self.id));
        }

        for (field, value) in [
            ("pollution_level", self.pollution_level),
            ("water_level", self.water_level),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(DatasetError::ScoreOutOfRange {
                    id: self.id,
                    field,
                    value,
                });
            }
        }

        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);
        if !lat_ok || !lng_ok {
            return Err(DatasetError::InvalidCoordinate {
                id: self.id,
                lat: self.lat,
                lng: self.lng,
            });
        }

        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(DatasetError::InvalidRadius {
                id: self.id,
                radius: self.radius,
            });
        }

        Ok(())
    }
}

/// On-disk shape of a record; `risk` stays a string until validated so an
/// unknown label is reported with its record id.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawWaterBody {
    pub id: u32,
    pub name: String,
    pub pollution_level: f64,
    pub water_level: f64,
    pub risk: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub affected: String,
    #[serde(default)]
    pub radius: f64,
}

impl TryFrom<RawWaterBody> for WaterBody {
    type Error = DatasetError;

    fn try_from(raw: RawWaterBody) -> DatasetResult<Self> {
        let risk = raw
            .risk
            .parse::<RiskLevel>()
            .map_err(|label| DatasetError::UnknownRisk { id: raw.id, label })?;

        let body = WaterBody {
            id: raw.id,
            name: raw.name,
            pollution_level: raw.pollution_level,
            water_level: raw.water_level,
            risk,
            lat: raw.lat,
            lng: raw.lng,
            affected: raw.affected,
            radius: raw.radius,
        };
        body.validate()?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(risk: &str) -> RawWaterBody {
        RawWaterBody {
            id: 9,
            name: "Hauz Khas Lake".to_string(),
            pollution_level: 40.0,
            water_level: 55.0,
            risk: risk.to_string(),
            lat: 28.5535,
            lng: 77.1926,
            affected: "Migratory birds".to_string(),
            radius: 800.0,
        }
    }

    #[test]
    fn test_risk_level_parsing() {
        assert_eq!("Low".parse::<RiskLevel>(), Ok(RiskLevel::Low));
        assert_eq!("Medium".parse::<RiskLevel>(), Ok(RiskLevel::Medium));
        assert_eq!("High".parse::<RiskLevel>(), Ok(RiskLevel::High));

        // Exact match only
        assert!("high".parse::<RiskLevel>().is_err());
        assert!(" High".parse::<RiskLevel>().is_err());
        assert!("Critical".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_level_order_and_display() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
        assert_eq!(RiskLevel::all().len(), 3);
        assert!(RiskLevel::High.is_critical());
        assert!(!RiskLevel::Medium.is_critical());
    }

    #[test]
    fn test_raw_conversion() {
        let body = WaterBody::try_from(raw("Medium")).unwrap();
        assert_eq!(body.risk, RiskLevel::Medium);
        assert_eq!(body.name, "Hauz Khas Lake");
        assert_eq!(body.radius, 800.0);
    }

    #[test]
    fn test_unknown_risk_rejected() {
        let err = WaterBody::try_from(raw("Severe")).unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnknownRisk {
                id: 9,
                label: "Severe".to_string()
            }
        );
    }

    #[test]
    fn test_validation() {
        let body = WaterBody::new(1, "Lake", RiskLevel::Low)
            .levels(50.0, 50.0)
            .at(28.6, 77.2)
            .radius(100.0);
        assert!(body.validate().is_ok());

        let bad_score = body.clone().levels(101.0, 50.0);
        assert!(matches!(
            bad_score.validate(),
            Err(DatasetError::ScoreOutOfRange { field: "pollution_level", .. })
        ));

        let nan_level = body.clone().levels(10.0, f64::NAN);
        assert!(matches!(
            nan_level.validate(),
            Err(DatasetError::ScoreOutOfRange { field: "water_level", .. })
        ));

        let bad_coord = body.clone().at(95.0, 77.2);
        assert!(matches!(
            bad_coord.validate(),
            Err(DatasetError::InvalidCoordinate { .. })
        ));

        let bad_radius = body.clone().radius(-1.0);
        assert!(matches!(
            bad_radius.validate(),
            Err(DatasetError::InvalidRadius { .. })
        ));

        let unnamed = WaterBody::new(2, "  ", RiskLevel::Low);
        assert_eq!(unnamed.validate(), Err(DatasetError::EmptyName(2)));
    }

    #[test]
    fn test_serialization_uses_dashboard_field_names() {
        let body = WaterBody::new(1, "Lake", RiskLevel::High).levels(75.0, 60.0);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["pollutionLevel"], 75.0);
        assert_eq!(json["waterLevel"], 60.0);
        assert_eq!(json["risk"], "High");
    }
}
