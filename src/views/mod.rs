//! View derivations
//!
//! Each view reads the same dataset slice and derives what it shows:
//!
//! - **dashboard**: critical alerts and the fixed summary figures
//! - **chart**: grouped bar chart geometry for the status chart
//! - **report**: risk assessment table rows
//! - **map**: base map settings and circle markers
//!
//! Nothing here mutates the dataset or keeps state between calls.

pub mod chart;
pub mod dashboard;
pub mod map;
pub mod report;

pub use chart::{status_series, Bar, BarChartLayout, BarSeries, CategoryLabel, Rect, Tick};
pub use dashboard::{
    critical_bodies, critical_count, critical_names, Accent, CardIcon, DashboardSummary,
    SummaryCard,
};
pub use map::{escape_html, zone_radius, CircleMarker, MapLayer, MarkerPair, Popup};
pub use report::{report_rows, ReportRow, REPORT_COLUMNS, ROW_HIGHLIGHT_CLASS};
