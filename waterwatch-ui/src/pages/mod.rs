//! Pages
//!
//! The three top-level views.

pub mod dashboard;
pub mod map;
pub mod reports;

pub use dashboard::Dashboard;
pub use map::RiskMap;
pub use reports::Reports;
