//! Risk style lookup
//!
//! Every visual attribute that depends on risk comes from one table keyed
//! by [`RiskLevel`]. Views never build class strings from risk labels.

use crate::dataset::RiskLevel;

/// Visual treatment for one risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskStyle {
    /// Tailwind classes for the report badge
    pub badge_class: &'static str,
    /// Stroke and fill color for map markers
    pub marker_color: &'static str,
}

const LOW: RiskStyle = RiskStyle {
    badge_class: "bg-green-200 text-green-800",
    marker_color: "green",
};

const MEDIUM: RiskStyle = RiskStyle {
    badge_class: "bg-yellow-200 text-yellow-800",
    marker_color: "yellow",
};

const HIGH: RiskStyle = RiskStyle {
    badge_class: "bg-red-200 text-red-800",
    marker_color: "red",
};

impl RiskStyle {
    /// Look up the style for a risk level
    pub const fn for_risk(risk: RiskLevel) -> &'static RiskStyle {
        match risk {
            RiskLevel::Low => &LOW,
            RiskLevel::Medium => &MEDIUM,
            RiskLevel::High => &HIGH,
        }
    }
}

impl RiskLevel {
    pub fn style(&self) -> &'static RiskStyle {
        RiskStyle::for_risk(*self)
    }
}
