//! Terminal rendering
//!
//! Plain-text versions of the dashboard and report for the CLI, plus the
//! JSON and CSV exports behind `--format`.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::{Config, MapConfig};
use crate::dataset::{RiskLevel, WaterBody};
use crate::views::{
    report_rows, status_series, BarChartLayout, DashboardSummary, MapLayer, ReportRow,
    REPORT_COLUMNS,
};

/// Width of the longest bar in the text chart, in characters
const BAR_CHARS: f64 = 40.0;

/// Render the risk report as an aligned table
pub fn render_report(bodies: &[WaterBody], color: bool) -> String {
    let rows: Vec<_> = report_rows(bodies).collect();

    let mut widths = REPORT_COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        widths[0] = widths[0].max(row.name.chars().count());
        widths[1] = widths[1].max(row.risk.label().len());
        widths[2] = widths[2].max(row.affected.chars().count());
    }

    let mut out = String::new();
    push_line(&mut out, &REPORT_COLUMNS, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_line(
        &mut out,
        &[rule[0].as_str(), rule[1].as_str(), rule[2].as_str()],
        &widths,
    );

    for row in &rows {
        let risk = pad(row.risk.label(), widths[1]);
        let risk = if color { colorize(row.risk, &risk) } else { risk };
        out.push_str(&format!(
            "{}  {}  {}\n",
            pad(row.name, widths[0]),
            risk,
            row.affected
        ));
    }

    out
}

/// Render the dashboard summary and a text bar chart
pub fn render_summary(bodies: &[WaterBody], config: &Config) -> String {
    let summary = DashboardSummary::from_bodies(bodies, &config.dashboard);
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", config.dashboard.title));
    out.push_str(&format!("Critical Alerts: {}\n", summary.critical_count));
    if !summary.critical_names.is_empty() {
        out.push_str("High-risk water bodies:\n");
        for name in &summary.critical_names {
            out.push_str(&format!("  - {name}\n"));
        }
    }
    for card in [&summary.water_demand, &summary.supply_gap] {
        out.push_str(&format!("{}: {} ({})\n", card.title, card.figure, card.caption));
    }

    out.push_str("\nWater Bodies Status\n");
    if bodies.is_empty() {
        out.push_str("  (no water bodies)\n");
        return out;
    }

    let names: Vec<String> = bodies.iter().map(|b| b.name.clone()).collect();
    let series = status_series(bodies, &config.chart);
    let layout = BarChartLayout::new(&names, &series, 0.0, 0.0);
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    let label_width = series.iter().map(|s| s.label.len()).max().unwrap_or(0);

    for (i, name) in names.iter().enumerate() {
        for (s, data) in series.iter().enumerate() {
            let value = data.values[i];
            let len = (value.max(0.0) / layout.y_max * BAR_CHARS).round() as usize;
            let first = if s == 0 { name.as_str() } else { "" };
            out.push_str(&format!(
                "  {}  {}  {} {}\n",
                pad(first, name_width),
                pad(data.label, label_width),
                "█".repeat(len),
                value
            ));
        }
    }

    out
}

/// Output format for `waterwatch report`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Output format for `waterwatch summary`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

/// Errors while writing CLI output
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl RenderError {
    /// The reader went away, e.g. `waterwatch report | head`
    pub fn is_broken_pipe(&self) -> bool {
        let kind = match self {
            RenderError::Io(e) => Some(e.kind()),
            RenderError::Json(e) => e.io_error_kind(),
            RenderError::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(e) => Some(e.kind()),
                _ => None,
            },
        };
        kind == Some(io::ErrorKind::BrokenPipe)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Serialize)]
struct ReportDocument<'a> {
    title: &'static str,
    generated_at: DateTime<Utc>,
    rows: Vec<ReportRow<'a>>,
}

/// Write the risk report in the requested format
pub fn write_report<W: Write>(
    bodies: &[WaterBody],
    format: ReportFormat,
    color: bool,
    mut out: W,
) -> RenderResult<()> {
    match format {
        ReportFormat::Table => {
            out.write_all(render_report(bodies, color).as_bytes())?;
        }
        ReportFormat::Json => {
            let report = ReportDocument {
                title: "Risk Assessment Report",
                generated_at: Utc::now(),
                rows: report_rows(bodies).collect(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in report_rows(bodies) {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

/// Write the dashboard summary in the requested format
pub fn write_summary<W: Write>(
    bodies: &[WaterBody],
    config: &Config,
    format: SummaryFormat,
    mut out: W,
) -> RenderResult<()> {
    match format {
        SummaryFormat::Text => out.write_all(render_summary(bodies, config).as_bytes())?,
        SummaryFormat::Json => {
            let summary = DashboardSummary::from_bodies(bodies, &config.dashboard);
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the map layer as JSON
pub fn write_markers<W: Write>(
    bodies: &[WaterBody],
    config: &MapConfig,
    mut out: W,
) -> RenderResult<()> {
    let layer = MapLayer::from_bodies(bodies, config);
    serde_json::to_writer_pretty(&mut out, &layer)?;
    writeln!(out)?;
    Ok(())
}

fn colorize(risk: RiskLevel, text: &str) -> String {
    match risk {
        RiskLevel::High => text.red().to_string(),
        RiskLevel::Medium => text.yellow().to_string(),
        RiskLevel::Low => text.green().to_string(),
    }
}

fn push_line(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    out.push_str(&format!(
        "{}  {}  {}\n",
        pad(cells[0], widths[0]),
        pad(cells[1], widths[1]),
        cells[2]
    ));
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
