//! Configuration System
//!
//! Display constants for the dashboard, map and chart, plus logging
//! settings for the terminal renderer. Defaults reproduce the stock
//! dashboard exactly; a TOML file can override any field.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Header text and fixed summary figures
///
/// Water demand and supply gap are published figures, not derived from
/// the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_user_label")]
    pub user_label: String,

    #[serde(default = "default_water_demand")]
    pub water_demand: String,

    #[serde(default = "default_water_demand_caption")]
    pub water_demand_caption: String,

    #[serde(default = "default_supply_gap")]
    pub supply_gap: String,

    #[serde(default = "default_supply_gap_caption")]
    pub supply_gap_caption: String,
}

fn default_title() -> String {
    "Delhi Water Bodies Monitor".to_string()
}

fn default_user_label() -> String {
    "Admin".to_string()
}

fn default_water_demand() -> String {
    "1,290 MG".to_string()
}

fn default_water_demand_caption() -> String {
    "Daily water demand".to_string()
}

fn default_supply_gap() -> String {
    "290 MG".to_string()
}

fn default_supply_gap_caption() -> String {
    "Daily supply shortage".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            user_label: default_user_label(),
            water_demand: default_water_demand(),
            water_demand_caption: default_water_demand_caption(),
            supply_gap: default_supply_gap(),
            supply_gap_caption: default_supply_gap_caption(),
        }
    }
}

/// Base map and marker settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Map center as [lat, lng]
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Pixel radius of the point marker
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,

    #[serde(default = "default_point_opacity")]
    pub point_fill_opacity: f64,

    #[serde(default = "default_zone_opacity")]
    pub zone_fill_opacity: f64,

    /// Zone marker radius = water body radius / this
    #[serde(default = "default_radius_divisor")]
    pub radius_divisor: f64,
}

fn default_center() -> [f64; 2] {
    [28.6139, 77.209]
}

fn default_zoom() -> u8 {
    11
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
        .to_string()
}

fn default_point_radius() -> f64 {
    5.0
}

fn default_point_opacity() -> f64 {
    0.7
}

fn default_zone_opacity() -> f64 {
    0.2
}

fn default_radius_divisor() -> f64 {
    100.0
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            point_radius: default_point_radius(),
            point_fill_opacity: default_point_opacity(),
            zone_fill_opacity: default_zone_opacity(),
            radius_divisor: default_radius_divisor(),
        }
    }
}

/// Bar chart series colors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_pollution_color")]
    pub pollution_color: String,

    #[serde(default = "default_water_color")]
    pub water_color: String,
}

fn default_pollution_color() -> String {
    "#8884d8".to_string()
}

fn default_water_color() -> String {
    "#82ca9d".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            pollution_color: default_pollution_color(),
            water_color: default_water_color(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("waterwatch").join("config.toml")),
            Some(PathBuf::from("./waterwatch.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config");
        Self::default()
    }

    /// Reject values that would break the map or chart
    fn validate(&self) -> Result<(), ConfigError> {
        let [lat, lng] = self.map.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ConfigError::Invalid(format!(
                "map.center ({lat}, {lng}) is not a valid coordinate"
            )));
        }
        if self.map.zoom > 19 {
            return Err(ConfigError::Invalid(format!(
                "map.zoom {} exceeds the tile server maximum of 19",
                self.map.zoom
            )));
        }
        if !(self.map.radius_divisor > 0.0) {
            return Err(ConfigError::Invalid(
                "map.radius_divisor must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("map.point_fill_opacity", self.map.point_fill_opacity),
            ("map.zone_fill_opacity", self.map.zone_fill_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{name} must be within 0-1")));
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Waterwatch Configuration
#
# Every value below is the built-in default. Remove a line to keep it.

[dashboard]
title = "Delhi Water Bodies Monitor"

# Static label shown in the navigation bar
user_label = "Admin"

# Published city-wide figures
water_demand = "1,290 MG"
water_demand_caption = "Daily water demand"
supply_gap = "290 MG"
supply_gap_caption = "Daily supply shortage"

[map]
# [lat, lng]
center = [28.6139, 77.209]
zoom = 11
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'

# Point marker size in pixels
point_radius = 5.0
point_fill_opacity = 0.7

# Zone of impact is drawn at radius / radius_divisor
zone_fill_opacity = 0.2
radius_divisor = 100.0

[chart]
pollution_color = "#8884d8"
water_color = "#82ca9d"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"##
    .to_string()
}
