//! Risk assessment report rows

use serde::Serialize;

use crate::dataset::{RiskLevel, WaterBody};

/// Table header, left to right
pub const REPORT_COLUMNS: [&str; 3] = ["Water Body", "Risk Level", "Affected Areas"];

/// Background for highlighted (even) rows
pub const ROW_HIGHLIGHT_CLASS: &str = "bg-gray-100";

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow<'a> {
    /// Zero-based position in the table
    pub index: usize,
    pub id: u32,
    pub name: &'a str,
    pub risk: RiskLevel,
    pub affected: &'a str,
    /// Even rows get a highlighted background
    pub highlighted: bool,
}

impl ReportRow<'_> {
    pub fn row_class(&self) -> &'static str {
        if self.highlighted {
            ROW_HIGHLIGHT_CLASS
        } else {
            ""
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.risk.style().badge_class
    }
}

/// One row per water body, in dataset order
pub fn report_rows(bodies: &[WaterBody]) -> impl Iterator<Item = ReportRow<'_>> {
    bodies.iter().enumerate().map(|(index, body)| ReportRow {
        index,
        id: body.id,
        name: &body.name,
        risk: body.risk,
        affected: &body.affected,
        highlighted: index % 2 == 0,
    })
}
