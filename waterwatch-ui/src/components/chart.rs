//! Chart Component
//!
//! Grouped bar chart drawn on an HTML5 Canvas, with legend and hover tooltip.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use waterwatch::views::{status_series, BarChartLayout, BarSeries};

use crate::state::GlobalState;

/// Intrinsic canvas size; CSS stretches it to the container
const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 320.0;

const GRID_COLOR: &str = "#ccc";
const AXIS_TEXT_COLOR: &str = "#666";
const HOVER_BAND_COLOR: &str = "rgba(204, 204, 204, 0.35)";

/// Water bodies status chart
#[component]
pub fn BarChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal(None::<usize>);

    let series = status_series(state.bodies(), &state.config.chart);
    let layout = BarChartLayout::new(&state.names(), &series, CANVAS_WIDTH, CANVAS_HEIGHT);
    let layout = store_value(layout);
    let series = store_value(series);

    // Redraw when the canvas mounts or the hovered group changes
    create_effect(move |_| {
        let highlight = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            layout.with_value(|layout| {
                series.with_value(|series| draw_chart(&canvas, layout, series, highlight))
            });
        }
    });

    let on_mouse_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let (x, y) = to_canvas_coords(
            ev.offset_x() as f64,
            ev.offset_y() as f64,
            canvas.client_width() as f64,
            canvas.client_height() as f64,
        );
        let group = layout.with_value(|layout| layout.group_at(x, y));
        if hovered.get_untracked() != group {
            hovered.set(group);
        }
    };

    view! {
        <div class="relative h-full flex flex-col">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full flex-1 min-h-0"
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| hovered.set(None)
            />

            <ChartTooltip hovered=hovered.read_only() series=series />

            <ChartLegend />
        </div>
    }
}

/// Values of the hovered water body
#[component]
fn ChartTooltip(
    hovered: ReadSignal<Option<usize>>,
    series: StoredValue<Vec<BarSeries>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        hovered.get().and_then(|group| {
            let body = state.bodies().get(group)?;
            let lines = series.with_value(|series| tooltip_lines(series, group));
            Some(view! {
                <div class="absolute top-2 right-2 bg-white border border-gray-300 rounded shadow px-3 py-2 text-sm pointer-events-none">
                    <p class="font-semibold mb-1">{body.name.clone()}</p>
                    {lines
                        .into_iter()
                        .map(|(line, color)| view! {
                            <p style=format!("color: {}", color)>{line}</p>
                        })
                        .collect_view()}
                </div>
            })
        })
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let series = status_series(&[], &state.config.chart);

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {series
                .into_iter()
                .map(|s| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3"
                            style=format!("background-color: {}", s.color)
                        />
                        <span class="text-sm" style=format!("color: {}", s.color)>{s.label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Tooltip rows as (text, color), in series order
fn tooltip_lines(series: &[BarSeries], group: usize) -> Vec<(String, String)> {
    series
        .iter()
        .filter_map(|s| {
            let value = s.values.get(group)?;
            Some((format!("{} : {}", s.label, value), s.color.clone()))
        })
        .collect()
}

/// Map a mouse position in CSS pixels to intrinsic canvas pixels
fn to_canvas_coords(x: f64, y: f64, client_width: f64, client_height: f64) -> (f64, f64) {
    let sx = if client_width > 0.0 { CANVAS_WIDTH / client_width } else { 1.0 };
    let sy = if client_height > 0.0 { CANVAS_HEIGHT / client_height } else { 1.0 };
    (x * sx, y * sy)
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    layout: &BarChartLayout,
    series: &[BarSeries],
    highlight: Option<usize>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => {
            web_sys::console::warn_1(&"2d canvas context unavailable".into());
            return;
        }
    };

    let plot = layout.plot;

    // Clear canvas
    ctx.clear_rect(0.0, 0.0, layout.width, layout.height);

    // Hovered category band
    if let Some(band) = highlight.and_then(|g| layout.band(g)) {
        ctx.set_fill_style(&HOVER_BAND_COLOR.into());
        ctx.fill_rect(band.x, band.y, band.width, band.height);
    }

    // Dashed cartesian grid
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    let dash = js_sys::Array::of2(&JsValue::from(3.0), &JsValue::from(3.0));
    let _ = ctx.set_line_dash(&dash);

    for tick in &layout.ticks {
        ctx.begin_path();
        ctx.move_to(plot.x, tick.y);
        ctx.line_to(plot.right(), tick.y);
        ctx.stroke();
    }
    for i in 0..=layout.labels.len() {
        let x = match layout.band(i) {
            Some(band) => band.x,
            None => plot.right(),
        };
        ctx.begin_path();
        ctx.move_to(x, plot.y);
        ctx.line_to(x, plot.bottom());
        ctx.stroke();
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Y-axis labels
    ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    for tick in &layout.ticks {
        let _ = ctx.fill_text(&format!("{}", tick.value), plot.x - 8.0, tick.y + 4.0);
    }

    // Bars
    for bar in &layout.bars {
        if let Some(s) = series.get(bar.series) {
            ctx.set_fill_style(&s.color.as_str().into());
            ctx.fill_rect(bar.rect.x, bar.rect.y, bar.rect.width, bar.rect.height);
        }
    }

    // X-axis labels
    ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
    ctx.set_text_align("center");
    for label in &layout.labels {
        let _ = ctx.fill_text(&label.text, label.x, plot.bottom() + 20.0);
    }

    if layout.labels.is_empty() {
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(
            "No water bodies to display",
            plot.x + plot.width / 2.0,
            plot.y + plot.height / 2.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waterwatch::{ChartConfig, Dataset};

    #[test]
    fn test_canvas_coordinate_scaling() {
        assert_eq!(to_canvas_coords(400.0, 160.0, 400.0, 160.0), (800.0, 320.0));
        assert_eq!(to_canvas_coords(100.0, 50.0, 800.0, 320.0), (100.0, 50.0));
        // Not laid out yet
        assert_eq!(to_canvas_coords(10.0, 10.0, 0.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn test_tooltip_lines() {
        let series = status_series(Dataset::seed().bodies(), &ChartConfig::default());

        let lines = tooltip_lines(&series, 0);
        assert_eq!(
            lines,
            vec![
                ("Pollution Level : 75".to_string(), "#8884d8".to_string()),
                ("Water Level : 60".to_string(), "#82ca9d".to_string()),
            ]
        );

        assert!(tooltip_lines(&series, 4).is_empty());
    }
}
