//! # Waterwatch
//!
//! Delhi Water Bodies Monitor - a read-only dashboard over a fixed list of
//! rivers and lakes, their pollution and water levels, and their risk.
//!
//! This crate holds everything that is not presentation:
//!
//! - [`dataset`]: the embedded water body records and their validation
//! - [`style`]: the risk-keyed style lookup table
//! - [`shell`]: which of the three views is active
//! - [`views`]: what each view derives from the dataset
//! - [`config`]: display constants and logging settings
//! - `terminal`: text, JSON and CSV output for the `waterwatch` CLI
//!   (`cli` feature)
//!
//! The Leptos dashboard in `waterwatch-ui` renders the same derivations in
//! the browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use waterwatch::{Dataset, MapLayer, MapConfig};
//! use waterwatch::views::critical_names;
//!
//! let bodies = Dataset::seed().bodies();
//!
//! let critical: Vec<_> = critical_names(bodies).collect();
//! assert_eq!(critical, ["Yamuna River", "Bhalswa Lake"]);
//!
//! let layer = MapLayer::from_bodies(bodies, &MapConfig::default());
//! assert_eq!(layer.markers[0].zone.radius, 50.0);
//! ```

pub mod config;
pub mod dataset;
pub mod shell;
pub mod style;
#[cfg(feature = "cli")]
pub mod terminal;
pub mod views;

pub use config::{
    generate_default_config, ChartConfig, Config, ConfigError, DashboardConfig, LoggingConfig,
    MapConfig,
};

pub use dataset::{Dataset, DatasetError, DatasetResult, RiskLevel, WaterBody};

pub use shell::{Shell, View};

pub use style::RiskStyle;

pub use views::{BarChartLayout, DashboardSummary, MapLayer, ReportRow};
