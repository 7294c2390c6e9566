//! Grouped bar chart layout
//!
//! Computes where every bar, grid line and label goes for the "Water
//! Bodies Status" chart. Drawing is left to the caller (a canvas in the
//! web dashboard, text in the terminal).
//!
//! ```text
//!   100 ┤
//!    75 ┤ ▆▆         <- one group per water body
//!    50 ┤ ██▆▆  ...     one bar per series inside a group
//!     0 └─────────
//!        name
//! ```

use serde::Serialize;

use crate::config::ChartConfig;
use crate::dataset::WaterBody;

/// Space reserved around the plot area, in pixels
pub const MARGIN_LEFT: f64 = 50.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 40.0;

/// Fraction of each category band left empty around its bars
const CATEGORY_GAP: f64 = 0.1;
/// Pixels between bars of the same group
const BAR_GAP: f64 = 4.0;
/// Number of y-axis intervals
const Y_INTERVALS: usize = 4;

/// One numeric field plotted across all water bodies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    /// Field name in the dataset (`pollutionLevel`, `waterLevel`)
    pub key: &'static str,
    /// Legend label
    pub label: &'static str,
    /// Fill color
    pub color: String,
    /// One value per water body, in dataset order
    pub values: Vec<f64>,
}

/// The two series the dashboard plots
pub fn status_series(bodies: &[WaterBody], config: &ChartConfig) -> Vec<BarSeries> {
    vec![
        BarSeries {
            key: "pollutionLevel",
            label: "Pollution Level",
            color: config.pollution_color.clone(),
            values: bodies.iter().map(|b| b.pollution_level).collect(),
        },
        BarSeries {
            key: "waterLevel",
            label: "Water Level",
            color: config.water_color.clone(),
            values: bodies.iter().map(|b| b.water_level).collect(),
        },
    ]
}

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A positioned bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Category (water body) index
    pub group: usize,
    /// Series index
    pub series: usize,
    pub value: f64,
    pub rect: Rect,
}

/// A y-axis tick with its horizontal grid line position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

/// A category label under the x axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLabel {
    pub text: String,
    /// Center of the category band
    pub x: f64,
}

/// Complete chart geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot: Rect,
    /// Upper bound of the value axis; the lower bound is always 0
    pub y_max: f64,
    pub ticks: Vec<Tick>,
    pub labels: Vec<CategoryLabel>,
    /// Bars grouped by category, then by series
    pub bars: Vec<Bar>,
    band_width: f64,
}

impl BarChartLayout {
    /// Lay out `series` over `categories` in a `width` x `height` canvas.
    ///
    /// Series shorter than `categories` simply have no bar for the
    /// missing positions.
    pub fn new(categories: &[String], series: &[BarSeries], width: f64, height: f64) -> Self {
        let plot = Rect {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        };

        let data_max = series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let step = nice_step(data_max / Y_INTERVALS as f64);
        let y_max = step * Y_INTERVALS as f64;

        let ticks = (0..=Y_INTERVALS)
            .map(|i| {
                let value = step * i as f64;
                Tick {
                    value,
                    y: plot.bottom() - value / y_max * plot.height,
                }
            })
            .collect();

        let band_width = if categories.is_empty() {
            0.0
        } else {
            plot.width / categories.len() as f64
        };

        let labels = categories
            .iter()
            .enumerate()
            .map(|(i, text)| CategoryLabel {
                text: text.clone(),
                x: plot.x + band_width * (i as f64 + 0.5),
            })
            .collect();

        let mut bars = Vec::with_capacity(categories.len() * series.len());
        if !series.is_empty() {
            let inner = band_width * (1.0 - 2.0 * CATEGORY_GAP);
            let gaps = BAR_GAP * (series.len() - 1) as f64;
            let bar_width = ((inner - gaps) / series.len() as f64).max(1.0);

            for group in 0..categories.len() {
                let band_start = plot.x + band_width * group as f64 + band_width * CATEGORY_GAP;
                for (s, data) in series.iter().enumerate() {
                    let Some(&value) = data.values.get(group) else {
                        continue;
                    };
                    let clamped = if value.is_finite() { value.clamp(0.0, y_max) } else { 0.0 };
                    let bar_height = clamped / y_max * plot.height;
                    bars.push(Bar {
                        group,
                        series: s,
                        value,
                        rect: Rect {
                            x: band_start + s as f64 * (bar_width + BAR_GAP),
                            y: plot.bottom() - bar_height,
                            width: bar_width,
                            height: bar_height,
                        },
                    });
                }
            }
        }

        Self {
            width,
            height,
            plot,
            y_max,
            ticks,
            labels,
            bars,
            band_width,
        }
    }

    /// Category under a canvas x coordinate, for the hover tooltip
    pub fn group_at(&self, x: f64, y: f64) -> Option<usize> {
        if self.labels.is_empty() || !self.plot.contains(x, y) {
            return None;
        }
        let group = ((x - self.plot.x) / self.band_width) as usize;
        (group < self.labels.len()).then_some(group)
    }

    /// Band of a category, for the hover highlight
    pub fn band(&self, group: usize) -> Option<Rect> {
        (group < self.labels.len()).then(|| Rect {
            x: self.plot.x + self.band_width * group as f64,
            y: self.plot.y,
            width: self.band_width,
            height: self.plot.height,
        })
    }

    pub fn bars_in_group(&self, group: usize) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(move |b| b.group == group)
    }
}

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn seed_layout() -> BarChartLayout {
        let bodies = Dataset::seed().bodies();
        let names: Vec<String> = bodies.iter().map(|b| b.name.clone()).collect();
        let series = status_series(bodies, &ChartConfig::default());
        BarChartLayout::new(&names, &series, 800.0, 320.0)
    }

    #[test]
    fn test_status_series() {
        let series = status_series(Dataset::seed().bodies(), &ChartConfig::default());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Pollution Level");
        assert_eq!(series[0].values, vec![75.0, 65.0, 30.0, 50.0]);
        assert_eq!(series[1].label, "Water Level");
        assert_eq!(series[1].values, vec![60.0, 70.0, 90.0, 70.0]);
        assert_eq!(series[1].color, "#82ca9d");
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(22.5), 25.0);
        assert_eq!(nice_step(18.75), 20.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
    }

    #[test]
    fn test_seed_axis() {
        let layout = seed_layout();
        assert_eq!(layout.y_max, 100.0);

        let values: Vec<_> = layout.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(layout.ticks[0].y, layout.plot.bottom());
        assert_eq!(layout.ticks[4].y, layout.plot.y);
    }

    #[test]
    fn test_bars_in_dataset_order() {
        let layout = seed_layout();
        assert_eq!(layout.bars.len(), 8);

        let order: Vec<_> = layout.bars.iter().map(|b| (b.group, b.series)).collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)]
        );

        // Left to right
        for pair in layout.bars.windows(2) {
            assert!(pair[0].rect.x < pair[1].rect.x);
        }
    }

    #[test]
    fn test_bar_heights_proportional() {
        let layout = seed_layout();
        let yamuna_pollution = &layout.bars[0];
        let naini_water = &layout.bars[5];

        assert_eq!(yamuna_pollution.value, 75.0);
        assert!((yamuna_pollution.rect.height - 0.75 * layout.plot.height).abs() < 1e-9);
        assert!((naini_water.rect.height - 0.9 * layout.plot.height).abs() < 1e-9);
        assert!((naini_water.rect.bottom() - layout.plot.bottom()).abs() < 1e-9);
    }

    #[test]
    fn test_bars_stay_inside_band() {
        let layout = seed_layout();
        for group in 0..4 {
            let band = layout.band(group).unwrap();
            for bar in layout.bars_in_group(group) {
                assert!(bar.rect.x >= band.x);
                assert!(bar.rect.right() <= band.right() + 1e-9);
            }
        }
    }

    #[test]
    fn test_group_hit_testing() {
        let layout = seed_layout();
        let label = &layout.labels[2];
        let mid_y = layout.plot.y + layout.plot.height / 2.0;

        assert_eq!(layout.group_at(label.x, mid_y), Some(2));
        assert_eq!(layout.group_at(0.0, mid_y), None);
        assert_eq!(layout.group_at(label.x, 0.0), None);
    }

    #[test]
    fn test_empty_chart() {
        let series = status_series(&[], &ChartConfig::default());
        let layout = BarChartLayout::new(&[], &series, 800.0, 320.0);
        assert!(layout.bars.is_empty());
        assert!(layout.labels.is_empty());
        assert_eq!(layout.y_max, 4.0);
        assert_eq!(layout.group_at(400.0, 160.0), None);
        assert_eq!(layout.band(0), None);
    }
}
