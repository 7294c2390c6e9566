//! Risk map layer
//!
//! Describes the base map and the circle markers for every water body.
//! The web dashboard hands this to Leaflet; the CLI prints it as JSON.

use serde::Serialize;

use crate::config::MapConfig;
use crate::dataset::{RiskLevel, WaterBody};

/// A circle marker in Leaflet's terms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    /// [lat, lng]
    pub center: [f64; 2],
    /// Screen radius in pixels
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<Popup>,
}

/// Popup shown when a point marker is clicked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub name: String,
    pub risk: RiskLevel,
    pub affected: String,
}

impl Popup {
    /// Popup body as HTML, with the dataset text escaped
    pub fn to_html(&self) -> String {
        format!(
            "<strong>{}</strong><br/>Risk: {}<br/>Affected: {}",
            escape_html(&self.name),
            self.risk,
            escape_html(&self.affected)
        )
    }
}

/// Both markers drawn for one water body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPair {
    pub body_id: u32,
    /// Small marker carrying the popup
    pub point: CircleMarker,
    /// Translucent zone-of-impact marker
    pub zone: CircleMarker,
}

impl MarkerPair {
    pub fn for_body(body: &WaterBody, config: &MapConfig) -> Self {
        let color = body.risk.style().marker_color;
        let center = [body.lat, body.lng];

        Self {
            body_id: body.id,
            point: CircleMarker {
                center,
                radius: config.point_radius,
                color,
                fill_color: color,
                fill_opacity: config.point_fill_opacity,
                popup: Some(Popup {
                    name: body.name.clone(),
                    risk: body.risk,
                    affected: body.affected.clone(),
                }),
            },
            zone: CircleMarker {
                center,
                radius: zone_radius(body, config.radius_divisor),
                color,
                fill_color: color,
                fill_opacity: config.zone_fill_opacity,
                popup: None,
            },
        }
    }
}

/// Zone-of-impact radius in pixels for a body's radius in meters
pub fn zone_radius(body: &WaterBody, divisor: f64) -> f64 {
    body.radius / divisor
}

/// Base map plus markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// One pair per water body, in dataset order
    pub markers: Vec<MarkerPair>,
}

impl MapLayer {
    pub fn from_bodies(bodies: &[WaterBody], config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            markers: bodies
                .iter()
                .map(|body| MarkerPair::for_body(body, config))
                .collect(),
        }
    }
}

/// Escape text for inclusion in HTML content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
