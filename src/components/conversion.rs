//! Conversion Charts
//!
//! Grouped bars with a conversion-rate line on a secondary axis, and
//! stacked funnel areas from clicks down to purchases.

use leptos::*;
use web_sys::HtmlCanvasElement;

use crate::api::types::ConversionPoint;

use super::chart::{axis_label, chart_context, draw_empty_message};

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GRID_COLOR: &str = "#f0f0f0";
const AXIS_TEXT_COLOR: &str = "#6b7280";

const CART_COLOR: &str = "#A78BFA";
const PURCHASE_COLOR: &str = "#7C3AED";
const RATE_COLOR: &str = "#F59E0B";
const CLICKS_STROKE: &str = "#E5E7EB";
const CLICKS_FILL: &str = "#F3F4F6";
const CART_FILL: &str = "#C4B5FD";

/// Cart additions and purchases as grouped bars, conversion rate as a
/// line against the right axis
#[component]
pub fn ConversionTrendChart(
    #[prop(into)] data: Signal<Vec<ConversionPoint>>,
    #[prop(default = 800)] width: u32,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_conversion_trend(&canvas, &points);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=width height=height class="w-full" />
        <div class="flex items-center justify-center gap-4 mt-2 text-xs text-gray-600">
            <LegendEntry color=CART_COLOR label="장바구니 추가" />
            <LegendEntry color=PURCHASE_COLOR label="구매" />
            <LegendEntry color=RATE_COLOR label="전환율 (%)" />
        </div>
    }
}

/// Clicks, cart additions and purchases as stacked areas
#[component]
pub fn ConversionAreaChart(
    #[prop(into)] data: Signal<Vec<ConversionPoint>>,
    #[prop(default = 800)] width: u32,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_conversion_areas(&canvas, &points);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=width height=height class="w-full" />
        <div class="flex items-center justify-center gap-4 mt-2 text-xs text-gray-600">
            <LegendEntry color=CLICKS_STROKE label="클릭" />
            <LegendEntry color=CART_COLOR label="장바구니 추가" />
            <LegendEntry color=PURCHASE_COLOR label="구매" />
        </div>
    }
}

#[component]
fn LegendEntry(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <span class="flex items-center gap-1">
            <span
                class="w-3 h-3 rounded-full inline-block"
                style=format!("background-color: {}", color)
            ></span>
            {label}
        </span>
    }
}

/// Cumulative stack tops for one point: clicks, then cart additions,
/// then purchases
fn stacked_totals(point: &ConversionPoint) -> (f64, f64, f64) {
    let clicks = point.clicks as f64;
    let carts = clicks + point.cart_adds as f64;
    let purchases = carts + point.purchases as f64;
    (clicks, carts, purchases)
}

fn slot_center(i: usize, count: usize, chart_width: f64) -> f64 {
    MARGIN_LEFT + (i as f64 + 0.5) / count as f64 * chart_width
}

fn y_position(value: f64, max: f64, chart_height: f64) -> f64 {
    MARGIN_TOP + (max - value) / max * chart_height
}

fn draw_grid(
    ctx: &web_sys::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    left_max: f64,
    right_max: Option<f64>,
) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(MARGIN_LEFT + chart_width, y);
        ctx.stroke();

        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        let left_value = left_max - (i as f64 / 5.0) * left_max;
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&axis_label(left_value), 5.0, y + 4.0);

        if let Some(right_max) = right_max {
            let right_value = right_max - (i as f64 / 5.0) * right_max;
            let _ = ctx.fill_text(&format!("{:.1}", right_value), width - MARGIN_RIGHT + 8.0, y + 4.0);
        }
    }
}

fn draw_x_labels(
    ctx: &web_sys::CanvasRenderingContext2d,
    points: &[ConversionPoint],
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

fn draw_conversion_trend(canvas: &HtmlCanvasElement, points: &[ConversionPoint]) {
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

    let bar_max = points
        .iter()
        .fold(f64::NEG_INFINITY, |m, p| m.max(p.cart_adds as f64).max(p.purchases as f64));
    let bar_max = if bar_max > 0.0 { bar_max * 1.1 } else { 1.0 };

    let rate_max = points.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.conversion_rate));
    let rate_max = if rate_max > 0.0 { rate_max * 1.1 } else { 1.0 };

    draw_grid(&ctx, width, height, bar_max, Some(rate_max));

    let slot = chart_width / points.len() as f64;
    let bar_width = slot * 0.25;

    for (i, point) in points.iter().enumerate() {
        let center = slot_center(i, points.len(), chart_width);
        let baseline = MARGIN_TOP + chart_height;

        let cart_y = y_position(point.cart_adds as f64, bar_max, chart_height);
        ctx.set_fill_style_str(CART_COLOR);
        ctx.fill_rect(center - bar_width, cart_y, bar_width, baseline - cart_y);

        let purchase_y = y_position(point.purchases as f64, bar_max, chart_height);
        ctx.set_fill_style_str(PURCHASE_COLOR);
        ctx.fill_rect(center, purchase_y, bar_width, baseline - purchase_y);
    }

    ctx.set_stroke_style_str(RATE_COLOR);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let y = y_position(point.conversion_rate, rate_max, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style_str(RATE_COLOR);
    for (i, point) in points.iter().enumerate() {
        let x = slot_center(i, points.len(), chart_width);
        let y = y_position(point.conversion_rate, rate_max, chart_height);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    draw_x_labels(&ctx, points, width, height);
}

fn draw_conversion_areas(canvas: &HtmlCanvasElement, points: &[ConversionPoint]) {
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

    let max = points
        .iter()
        .fold(f64::NEG_INFINITY, |m, p| m.max(stacked_totals(p).2));
    let max = if max > 0.0 { max * 1.1 } else { 1.0 };

    draw_grid(&ctx, width, height, max, None);

    let tops: Vec<(f64, f64, f64)> = points.iter().map(stacked_totals).collect();

    let bands = [
        (CLICKS_STROKE, CLICKS_FILL, 0),
        (CART_COLOR, CART_FILL, 1),
        (PURCHASE_COLOR, CART_COLOR, 2),
    ];

    for (stroke, fill, layer) in bands {
        let upper = |t: &(f64, f64, f64)| match layer {
            0 => t.0,
            1 => t.1,
            _ => t.2,
        };
        let lower = |t: &(f64, f64, f64)| match layer {
            0 => 0.0,
            1 => t.0,
            _ => t.1,
        };

        ctx.set_fill_style_str(fill);
        ctx.begin_path();
        for (i, top) in tops.iter().enumerate() {
            let x = slot_center(i, points.len(), chart_width);
            let y = y_position(upper(top), max, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        for (i, top) in tops.iter().enumerate().rev() {
            let x = slot_center(i, points.len(), chart_width);
            let y = y_position(lower(top), max, chart_height);
            ctx.line_to(x, y);
        }
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, top) in tops.iter().enumerate() {
            let x = slot_center(i, points.len(), chart_width);
            let y = y_position(upper(top), max, chart_height);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    draw_x_labels(&ctx, points, width, height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_totals_accumulate() {
        let point = ConversionPoint {
            period: "1월".to_string(),
            cart_adds: 850,
            purchases: 290,
            conversion_rate: 34.1,
            clicks: 12000,
        };
        let (clicks, carts, purchases) = stacked_totals(&point);
        assert_eq!(clicks, 12000.0);
        assert_eq!(carts, 12850.0);
        assert_eq!(purchases, 13140.0);
    }
}
