//! Donut Chart
//!
//! Proportional ring chart with an optional legend.

use leptos::*;
use web_sys::HtmlCanvasElement;

use super::chart::chart_context;

const RING_WIDTH: f64 = 28.0;
const EMPTY_RING_COLOR: &str = "#EDEDED";

/// One ring segment
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

impl DonutSlice {
    pub fn new(label: &str, value: f64, color: &'static str) -> Self {
        Self {
            label: label.to_string(),
            value,
            color,
        }
    }
}

/// Each slice's share of the whole, in `[0, 1]`
fn shares(slices: &[DonutSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return vec![0.0; slices.len()];
    }
    slices.iter().map(|s| s.value / total).collect()
}

#[component]
pub fn DonutChart(
    #[prop(into)] slices: Signal<Vec<DonutSlice>>,
    #[prop(default = 240)] size: u32,
    #[prop(default = false)] show_legend: bool,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = slices.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &slices);
        }
    });

    let legend = move || {
        if !show_legend {
            return None;
        }
        Some(view! {
            <div class="flex flex-wrap items-center justify-center gap-3 mt-2 text-sm text-gray-600">
                {move || {
                    slices
                        .get()
                        .iter()
                        .map(|slice| {
                            view! {
                                <span class="flex items-center gap-1">
                                    <span
                                        class="w-3 h-3 rounded-full inline-block"
                                        style=format!("background-color: {}", slice.color)
                                    ></span>
                                    {format!("{} {}%", slice.label, slice.value)}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        })
    };

    view! {
        <div class="flex flex-col items-center">
            <canvas node_ref=canvas_ref width=size height=size />
            {legend}
        </div>
    }
}

fn draw_donut(canvas: &HtmlCanvasElement, slices: &[DonutSlice]) {
    let ctx = match chart_context(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - RING_WIDTH / 2.0 - 4.0;

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_width(RING_WIDTH);

    let shares = shares(slices);
    if shares.iter().all(|share| *share == 0.0) {
        ctx.set_stroke_style_str(EMPTY_RING_COLOR);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.stroke();
        return;
    }

    // Segments begin at twelve o'clock and run clockwise
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (slice, share) in slices.iter().zip(shares) {
        let end = start + share * std::f64::consts::PI * 2.0;
        ctx.set_stroke_style_str(slice.color);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.stroke();
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_one() {
        let slices = vec![
            DonutSlice::new("온라인", 60.0, "#7C3AED"),
            DonutSlice::new("오프라인", 25.0, "#A78BFA"),
            DonutSlice::new("기타", 15.0, "#E5E7EB"),
        ];
        let shares = shares(&slices);
        assert_eq!(shares, vec![0.6, 0.25, 0.15]);
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_of_empty_total() {
        let slices = vec![
            DonutSlice::new("남성", 0.0, "#7857FF"),
            DonutSlice::new("여성", 0.0, "#D7D7D7"),
        ];
        assert_eq!(shares(&slices), vec![0.0, 0.0]);
        assert!(shares(&[]).is_empty());
    }
}
