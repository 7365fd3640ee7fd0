//! Chart Components
//!
//! Canvas-rendered charts: multi-series lines, stacked areas, horizontal
//! bars and radar polygons. All drawing happens on an HTML5 canvas 2d
//! context; scaling math lives in plain helpers at the bottom.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Chart background, matching the panel surface.
const CHART_BG: &str = "#0d1322";
/// Grid line color.
const GRID: &str = "#263048";
/// Axis label color.
const AXIS_TEXT: &str = "#9ca3af";

const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// One plotted series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<f64>,
    pub dashed: bool,
    pub filled: bool,
}

impl Series {
    pub fn line(name: impl Into<String>, color: &'static str, points: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            color,
            points,
            dashed: false,
            filled: false,
        }
    }

    pub fn dashed(name: impl Into<String>, color: &'static str, points: Vec<f64>) -> Self {
        Series {
            dashed: true,
            ..Series::line(name, color, points)
        }
    }

    pub fn area(name: impl Into<String>, color: &'static str, points: Vec<f64>) -> Self {
        Series {
            filled: true,
            ..Series::line(name, color, points)
        }
    }
}

/// One horizontal bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarItem {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Multi-series line chart with category x-axis.
#[component]
pub fn LineChart(
    #[prop(into)] labels: MaybeSignal<Vec<String>>,
    #[prop(into)] series: MaybeSignal<Vec<Series>>,
    #[prop(default = 340)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend_series = series.clone();

    create_effect(move |_| {
        let labels = labels.get();
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &labels, &series);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height
                class="w-full rounded-lg"
            />
            <ChartLegend series=legend_series />
        </div>
    }
}

/// Stacked area chart; series are stacked bottom to top in the order given.
#[component]
pub fn StackedAreaChart(
    #[prop(into)] labels: MaybeSignal<Vec<String>>,
    #[prop(into)] series: MaybeSignal<Vec<Series>>,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend_series = series.clone();

    create_effect(move |_| {
        let labels = labels.get();
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_stacked_area(&canvas, &labels, &series);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height
                class="w-full rounded-lg"
            />
            <ChartLegend series=legend_series />
        </div>
    }
}

/// Horizontal bar chart with per-bar colors and value labels.
#[component]
pub fn BarChart(#[prop(into)] items: MaybeSignal<Vec<BarItem>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let items = items.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &items);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="800" height="240" class="w-full rounded-lg" />
    }
}

/// Radar chart over named 0-100 axes.
#[component]
pub fn RadarChart(
    #[prop(into)] axes: MaybeSignal<Vec<String>>,
    #[prop(into)] series: MaybeSignal<Vec<Series>>,
    #[prop(default = 320)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend_series = series.clone();

    create_effect(move |_| {
        let axes = axes.get();
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_radar(&canvas, &axes, &series);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height
                class="w-full rounded-lg"
            />
            <ChartLegend series=legend_series />
        </div>
    }
}

/// Legend row showing series colors
#[component]
fn ChartLegend(#[prop(into)] series: MaybeSignal<Vec<Series>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {move || {
                series.get()
                    .into_iter()
                    .map(|s| {
                        view! {
                            <div class="flex items-center gap-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", s.color)
                                />
                                <span class="text-sm text-gray-300">{s.name}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&CHART_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Horizontal grid lines with y-axis labels from `max` (top) to `min`.
fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, min: f64, max: f64) {
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 8.0, y + 4.0);
    }
}

/// Category labels along the x-axis, thinned so at most ~8 are drawn.
fn draw_x_labels(ctx: &CanvasRenderingContext2d, width: f64, height: f64, labels: &[String]) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let step = label_step(labels.len(), 8);

    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in labels.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let x = x_at(i, labels.len(), MARGIN_LEFT, chart_width);
        let _ = ctx.fill_text(label, x - 14.0, height - 12.0);
    }
}

fn set_dash(ctx: &CanvasRenderingContext2d, on: bool) {
    let segments = if on {
        js_sys::Array::of2(&6.0.into(), &4.0.into())
    } else {
        js_sys::Array::new()
    };
    let _ = ctx.set_line_dash(&segments);
}

fn draw_line_chart(canvas: &HtmlCanvasElement, labels: &[String], series: &[Series]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    clear(&ctx, width, height);

    if series.iter().all(|s| s.points.is_empty()) {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for &v in &s.points {
            min = min.min(v);
            max = max.max(v);
        }
    }
    let (min, max) = padded_bounds(min, max);

    draw_grid(&ctx, width, height, min, max);
    draw_x_labels(&ctx, width, height, labels);

    for s in series {
        if s.points.is_empty() {
            continue;
        }
        let n = s.points.len();

        if s.filled {
            ctx.set_global_alpha(0.18);
            ctx.set_fill_style(&s.color.into());
            ctx.begin_path();
            for (i, &v) in s.points.iter().enumerate() {
                let x = x_at(i, n, MARGIN_LEFT, chart_width);
                let y = y_at(v, min, max, MARGIN_TOP, chart_height);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            let last_x = x_at(n - 1, n, MARGIN_LEFT, chart_width);
            ctx.line_to(last_x, MARGIN_TOP + chart_height);
            ctx.line_to(MARGIN_LEFT, MARGIN_TOP + chart_height);
            ctx.close_path();
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }

        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.5);
        set_dash(&ctx, s.dashed);
        ctx.begin_path();
        for (i, &v) in s.points.iter().enumerate() {
            let x = x_at(i, n, MARGIN_LEFT, chart_width);
            let y = y_at(v, min, max, MARGIN_TOP, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
        set_dash(&ctx, false);

        ctx.set_fill_style(&s.color.into());
        for (i, &v) in s.points.iter().enumerate() {
            let x = x_at(i, n, MARGIN_LEFT, chart_width);
            let y = y_at(v, min, max, MARGIN_TOP, chart_height);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}

fn draw_stacked_area(canvas: &HtmlCanvasElement, labels: &[String], series: &[Series]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    clear(&ctx, width, height);

    let n = series.first().map(|s| s.points.len()).unwrap_or(0);
    if n == 0 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    // Cumulative tops per stacking layer.
    let mut tops: Vec<Vec<f64>> = Vec::with_capacity(series.len());
    let mut running = vec![0.0; n];
    for s in series {
        for (i, &v) in s.points.iter().enumerate().take(n) {
            running[i] += v;
        }
        tops.push(running.clone());
    }

    let total_max = running.iter().cloned().fold(0.0, f64::max);
    let (min, max) = padded_bounds(0.0, total_max.max(1.0));
    let min = min.max(0.0);

    draw_grid(&ctx, width, height, min, max);
    draw_x_labels(&ctx, width, height, labels);

    for (layer, s) in series.iter().enumerate() {
        let top = &tops[layer];
        let below = if layer == 0 { None } else { Some(&tops[layer - 1]) };

        ctx.set_global_alpha(0.25);
        ctx.set_fill_style(&s.color.into());
        ctx.begin_path();
        for (i, &v) in top.iter().enumerate() {
            let x = x_at(i, n, MARGIN_LEFT, chart_width);
            let y = y_at(v, min, max, MARGIN_TOP, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        for i in (0..n).rev() {
            let x = x_at(i, n, MARGIN_LEFT, chart_width);
            let base = below.map(|b| b[i]).unwrap_or(0.0);
            let y = y_at(base, min, max, MARGIN_TOP, chart_height);
            ctx.line_to(x, y);
        }
        ctx.close_path();
        ctx.fill();
        ctx.set_global_alpha(1.0);

        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, &v) in top.iter().enumerate() {
            let x = x_at(i, n, MARGIN_LEFT, chart_width);
            let y = y_at(v, min, max, MARGIN_TOP, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, items: &[BarItem]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let rows = items.len() as u32;
    canvas.set_height((rows * 36 + 24).max(80));

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    clear(&ctx, width, height);

    if items.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let label_width = 190.0;
    let value_width = 56.0;
    let bar_span = width - label_width - value_width - 20.0;
    let max = items.iter().map(|i| i.value).fold(1.0, f64::max);

    ctx.set_font("13px sans-serif");
    for (row, item) in items.iter().enumerate() {
        let y = 16.0 + row as f64 * 36.0;

        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&item.label, 8.0, y + 14.0);

        // Track, then the value bar over it.
        ctx.set_fill_style(&GRID.into());
        ctx.fill_rect(label_width, y + 4.0, bar_span, 12.0);

        let bar = (item.value / max) * bar_span;
        ctx.set_fill_style(&item.color.as_str().into());
        ctx.fill_rect(label_width, y + 4.0, bar, 12.0);

        ctx.set_fill_style(&"#e5e7eb".into());
        let _ = ctx.fill_text(
            &format!("{:.0}", item.value),
            label_width + bar_span + 12.0,
            y + 14.0,
        );
    }
}

fn draw_radar(canvas: &HtmlCanvasElement, axes: &[String], series: &[Series]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    clear(&ctx, width, height);

    let n = axes.len();
    if n < 3 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height / 2.0 - 44.0).max(40.0);
    let angle_of = |i: usize| -> f64 {
        -std::f64::consts::FRAC_PI_2 + (i as f64 / n as f64) * std::f64::consts::PI * 2.0
    };

    // Concentric rings at 25/50/75/100 and the spokes.
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        let r = radius * ring as f64 / 4.0;
        ctx.begin_path();
        for i in 0..=n {
            let angle = angle_of(i % n);
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }
    for i in 0..n {
        let angle = angle_of(i);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(cx + radius * angle.cos(), cy + radius * angle.sin());
        ctx.stroke();
    }

    // Axis labels just beyond the outer ring.
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (i, label) in axes.iter().enumerate() {
        let angle = angle_of(i);
        let x = cx + (radius + 20.0) * angle.cos();
        let y = cy + (radius + 20.0) * angle.sin() + 4.0;
        let _ = ctx.fill_text(label, x, y);
    }
    ctx.set_text_align("start");

    // Series polygons, values on a fixed 0-100 scale.
    for s in series {
        if s.points.len() < n {
            continue;
        }
        ctx.set_global_alpha(0.2);
        ctx.set_fill_style(&s.color.into());
        ctx.begin_path();
        for i in 0..=n {
            let idx = i % n;
            let angle = angle_of(idx);
            let r = radius * (s.points[idx].clamp(0.0, 100.0) / 100.0);
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.fill();
        ctx.set_global_alpha(1.0);

        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for i in 0..=n {
            let idx = i % n;
            let angle = angle_of(idx);
            let r = radius * (s.points[idx].clamp(0.0, 100.0) / 100.0);
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data available", width / 2.0 - 64.0, height / 2.0);
}

/// Pad the value range by 10% on each side; widen degenerate ranges.
fn padded_bounds(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    let (min, max) = (min - padding, max + padding);
    if min == max {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// X pixel for category `i` of `n`, spread across the chart span.
fn x_at(i: usize, n: usize, left: f64, span: f64) -> f64 {
    if n <= 1 {
        return left + span / 2.0;
    }
    left + (i as f64 / (n - 1) as f64) * span
}

/// Y pixel for a value, inverted because canvas y grows downward.
fn y_at(value: f64, min: f64, max: f64, top: f64, span: f64) -> f64 {
    top + ((max - value) / (max - min)) * span
}

/// Keep every `step`-th label so at most `max_labels` are drawn.
fn label_step(n: usize, max_labels: usize) -> usize {
    if n <= max_labels {
        1
    } else {
        n.div_ceil(max_labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pad_by_ten_percent() {
        let (min, max) = padded_bounds(0.0, 100.0);
        assert_eq!(min, -10.0);
        assert_eq!(max, 110.0);
    }

    #[test]
    fn degenerate_bounds_widen() {
        let (min, max) = padded_bounds(50.0, 50.0);
        assert!(min < 50.0 && max > 50.0);
        assert!(max - min >= 2.0);
    }

    #[test]
    fn x_positions_span_chart() {
        assert_eq!(x_at(0, 5, 50.0, 700.0), 50.0);
        assert_eq!(x_at(4, 5, 50.0, 700.0), 750.0);
        // A single category centers.
        assert_eq!(x_at(0, 1, 50.0, 700.0), 400.0);
    }

    #[test]
    fn y_position_inverts_axis() {
        // Max lands at the top edge, min at the bottom.
        assert_eq!(y_at(100.0, 0.0, 100.0, 20.0, 300.0), 20.0);
        assert_eq!(y_at(0.0, 0.0, 100.0, 20.0, 300.0), 320.0);
        assert_eq!(y_at(50.0, 0.0, 100.0, 20.0, 300.0), 170.0);
    }

    #[test]
    fn label_step_thins_dense_axes() {
        assert_eq!(label_step(6, 8), 1);
        assert_eq!(label_step(8, 8), 1);
        assert_eq!(label_step(13, 8), 2);
        assert_eq!(label_step(24, 8), 3);
    }
}
