//! Dashboard derivations
//!
//! Critical alerts are the High-risk subsequence of the dataset. The water
//! demand and supply gap cards are fixed figures from configuration.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::dataset::WaterBody;

/// High-risk water bodies in dataset order
///
/// The iterator is lazy and `Clone`, so it can be walked again without
/// re-filtering the source.
pub fn critical_bodies(bodies: &[WaterBody]) -> impl Iterator<Item = &WaterBody> + Clone {
    bodies.iter().filter(|b| b.risk.is_critical())
}

/// Names of the high-risk water bodies in dataset order
pub fn critical_names(bodies: &[WaterBody]) -> impl Iterator<Item = &str> + Clone {
    critical_bodies(bodies).map(|b| b.name.as_str())
}

pub fn critical_count(bodies: &[WaterBody]) -> usize {
    critical_bodies(bodies).count()
}

/// Accent color of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Blue,
    Yellow,
}

impl Accent {
    /// Tailwind text color class
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Red => "text-red-500",
            Accent::Blue => "text-blue-500",
            Accent::Yellow => "text-yellow-500",
        }
    }
}

/// Icon drawn in a card header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardIcon {
    AlertTriangle,
    Droplet,
}

/// One of the figure cards on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub figure: String,
    pub caption: String,
    pub accent: Accent,
    pub icon: CardIcon,
}

/// Everything the dashboard view shows above the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub critical_count: usize,
    pub critical_names: Vec<String>,
    pub water_demand: SummaryCard,
    pub supply_gap: SummaryCard,
}

impl DashboardSummary {
    pub fn from_bodies(bodies: &[WaterBody], config: &DashboardConfig) -> Self {
        let critical_names: Vec<String> = critical_names(bodies).map(str::to_string).collect();

        Self {
            critical_count: critical_names.len(),
            critical_names,
            water_demand: SummaryCard {
                title: "Water Demand".to_string(),
                figure: config.water_demand.clone(),
                caption: config.water_demand_caption.clone(),
                accent: Accent::Blue,
                icon: CardIcon::Droplet,
            },
            supply_gap: SummaryCard {
                title: "Supply Gap".to_string(),
                figure: config.supply_gap.clone(),
                caption: config.supply_gap_caption.clone(),
                accent: Accent::Yellow,
                icon: CardIcon::AlertTriangle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, RiskLevel};

    #[test]
    fn test_seed_critical_alerts() {
        let bodies = Dataset::seed().bodies();
        assert_eq!(critical_count(bodies), 2);
        assert_eq!(
            critical_names(bodies).collect::<Vec<_>>(),
            vec!["Yamuna River", "Bhalswa Lake"]
        );
    }

    #[test]
    fn test_critical_iterator_is_restartable() {
        let bodies = Dataset::seed().bodies();
        let names = critical_names(bodies);
        let first: Vec<_> = names.clone().collect();
        let second: Vec<_> = names.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let bodies: Vec<WaterBody> = critical_bodies(Dataset::seed().bodies())
            .cloned()
            .collect();
        let again: Vec<WaterBody> = critical_bodies(&bodies).cloned().collect();
        assert_eq!(bodies, again);
        assert_eq!(critical_count(&again), again.len());
    }

    #[test]
    fn test_count_matches_filtered_length() {
        let bodies = vec![
            WaterBody::new(1, "A", RiskLevel::Medium),
            WaterBody::new(2, "B", RiskLevel::High),
            WaterBody::new(3, "C", RiskLevel::Low),
            WaterBody::new(4, "D", RiskLevel::High),
            WaterBody::new(5, "E", RiskLevel::High),
        ];
        assert_eq!(critical_count(&bodies), 3);
        assert_eq!(critical_names(&bodies).collect::<Vec<_>>(), vec!["B", "D", "E"]);
    }

    #[test]
    fn test_empty_dataset_summary() {
        let summary = DashboardSummary::from_bodies(&[], &DashboardConfig::default());
        assert_eq!(summary.critical_count, 0);
        assert!(summary.critical_names.is_empty());
        assert_eq!(summary.water_demand.figure, "1,290 MG");
    }

    #[test]
    fn test_fixed_figures_ignore_dataset() {
        let config = DashboardConfig::default();
        let seeded = DashboardSummary::from_bodies(Dataset::seed().bodies(), &config);
        let empty = DashboardSummary::from_bodies(&[], &config);

        assert_eq!(seeded.water_demand, empty.water_demand);
        assert_eq!(seeded.supply_gap, empty.supply_gap);
        assert_eq!(seeded.supply_gap.figure, "290 MG");
        assert_eq!(seeded.supply_gap.caption, "Daily supply shortage");
        assert_eq!(seeded.supply_gap.accent.text_class(), "text-yellow-500");
    }
}
