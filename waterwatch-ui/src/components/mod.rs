//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod chart;
pub mod icons;
pub mod nav;
pub mod risk_badge;

pub use card::{Card, CardContent, CardHeader};
pub use chart::BarChart;
pub use icons::Icon;
pub use nav::Nav;
pub use risk_badge::RiskBadge;
