//! Cartesian Charts
//!
//! Bar, line and area charts over labeled periods, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::ChartPoint;

pub(crate) const MARGIN_LEFT: f64 = 60.0;
pub(crate) const MARGIN_RIGHT: f64 = 20.0;
pub(crate) const MARGIN_TOP: f64 = 20.0;
pub(crate) const MARGIN_BOTTOM: f64 = 40.0;

const GRID_COLOR: &str = "#f0f0f0";
const AXIS_TEXT_COLOR: &str = "#6b7280";
const EMPTY_TEXT_COLOR: &str = "#6b7280";

/// Bar chart over labeled periods
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(default = "#3b82f6")] color: &'static str,
    /// Suffix appended to y-axis labels (e.g. "초")
    #[prop(default = "")]
    unit: &'static str,
    #[prop(default = 800)] width: u32,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &points, color, unit);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=width height=height class="w-full" />
    }
}

/// Line chart over labeled periods
#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(default = "#3b82f6")] color: &'static str,
    #[prop(default = 800)] width: u32,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &points, color);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=width height=height class="w-full" />
    }
}

/// Area chart over labeled periods, filled down to the zero baseline
#[component]
pub fn AreaChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(default = "#7C3AED")] stroke: &'static str,
    #[prop(default = "#C4B5FD")] fill: &'static str,
    #[prop(default = 800)] width: u32,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_area_chart(&canvas, &points, stroke, fill);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=width height=height class="w-full" />
    }
}

// ============ Drawing ============

/// Acquire the 2d context of a canvas
pub(crate) fn chart_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Compact y-axis label: 125000000 becomes "125M", 8500 becomes "8.5K"
pub(crate) fn axis_label(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.0}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// X slot center for index `i` of `count` categories
pub(crate) fn slot_center(i: usize, count: usize, chart_width: f64) -> f64 {
    MARGIN_LEFT + (i as f64 + 0.5) / count as f64 * chart_width
}

/// Y pixel for a value within `[min, max]`
pub(crate) fn y_position(value: f64, min: f64, max: f64, chart_height: f64) -> f64 {
    MARGIN_TOP + (max - value) / (max - min) * chart_height
}

/// White background, gridlines and y-axis labels shared by every chart
pub(crate) fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    min: f64,
    max: f64,
    unit: &str,
) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(MARGIN_LEFT + chart_width, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("{}{}", axis_label(value), unit), 5.0, y + 4.0);
    }
}

/// Period labels along the x-axis
pub(crate) fn draw_x_labels(
    ctx: &CanvasRenderingContext2d,
    points: &[ChartPoint],
    width: f64,
    height: f64,
) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;

    ctx.set_fill_style_str(AXIS_TEXT_COLOR);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let _ = ctx.fill_text(&point.period, x, height - 10.0);
    }
    ctx.set_text_align("left");
}

pub(crate) fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(EMPTY_TEXT_COLOR);
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("No data for selected range", width / 2.0, height / 2.0);
    ctx.set_text_align("left");
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint], color: &str, unit: &str) {
    let ctx = match chart_context(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Bars rise from zero
    let max = points.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.value));
    let max = if max > 0.0 { max * 1.1 } else { 1.0 };

    draw_frame(&ctx, width, height, 0.0, max, unit);

    let slot = chart_width / points.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style_str(color);
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width) - bar_width / 2.0;
        let y = y_position(point.value, 0.0, max, chart_height);
        ctx.fill_rect(x, y, bar_width, MARGIN_TOP + chart_height - y);
    }

    draw_x_labels(&ctx, points, width, height);
}

fn draw_line_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint], color: &str) {
    let ctx = match chart_context(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.value);
        max = max.max(point.value);
    }

    // Pad the y range so the line stays off the frame edges
    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;

    draw_frame(&ctx, width, height, min, max, "");

    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let y = y_position(point.value, min, max, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style_str(color);
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let y = y_position(point.value, min, max, chart_height);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    draw_x_labels(&ctx, points, width, height);
}

fn draw_area_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint], stroke: &str, fill: &str) {
    let ctx = match chart_context(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let max = points.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.value));
    let max = if max > 0.0 { max * 1.1 } else { 1.0 };

    draw_frame(&ctx, width, height, 0.0, max, "");

    let baseline = MARGIN_TOP + chart_height;

    ctx.set_fill_style_str(fill);
    ctx.begin_path();
    ctx.move_to(slot_center(0, points.len(), chart_width), baseline);
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let y = y_position(point.value, 0.0, max, chart_height);
        ctx.line_to(x, y);
    }
    ctx.line_to(slot_center(points.len() - 1, points.len(), chart_width), baseline);
    ctx.close_path();
    ctx.fill();

    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let y = y_position(point.value, 0.0, max, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    draw_x_labels(&ctx, points, width, height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_label_abbreviates() {
        assert_eq!(axis_label(125000000.0), "125M");
        assert_eq!(axis_label(8500.0), "8.5K");
        assert_eq!(axis_label(180.0), "180");
        assert_eq!(axis_label(0.0), "0");
    }

    #[test]
    fn test_slot_centers_divide_evenly() {
        let chart_width = 700.0;
        assert_eq!(slot_center(0, 7, chart_width), MARGIN_LEFT + 50.0);
        assert_eq!(slot_center(6, 7, chart_width), MARGIN_LEFT + 650.0);
        // Single category sits in the middle
        assert_eq!(slot_center(0, 1, chart_width), MARGIN_LEFT + 350.0);
    }

    #[test]
    fn test_y_position_is_inverted() {
        let chart_height = 240.0;
        assert_eq!(y_position(0.0, 0.0, 100.0, chart_height), MARGIN_TOP + 240.0);
        assert_eq!(y_position(100.0, 0.0, 100.0, chart_height), MARGIN_TOP);
        assert_eq!(y_position(50.0, 0.0, 100.0, chart_height), MARGIN_TOP + 120.0);
    }
}
