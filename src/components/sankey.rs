//! Traffic Flow Diagram
//!
//! Sankey-style rendering of acquisition channels. Node columns follow
//! link depth, node heights and link widths are proportional to flow
//! volume.

use leptos::*;
use web_sys::HtmlCanvasElement;

use crate::api::types::TrafficFlow;

use super::chart::{chart_context, draw_empty_message};

const NODE_WIDTH: f64 = 20.0;
const NODE_PADDING: f64 = 10.0;
const EDGE_INSET: f64 = 10.0;
const LABEL_COLOR: &str = "#374151";

#[component]
pub fn TrafficFlowChart(
    #[prop(into)] data: Signal<TrafficFlow>,
    #[prop(default = 800)] width: u32,
    #[prop(default = 400)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let flow = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_traffic_flow(&canvas, &flow);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width=width height=height class="w-full" />
    }
}

fn node_color(name: &str) -> &'static str {
    match name {
        "검색엔진" => "#10b981",
        "SNS 광고" => "#3b82f6",
        "직접 방문" => "#f59e0b",
        "이메일" => "#8b5cf6",
        "홈페이지" => "#6366f1",
        "상품 페이지" => "#ec4899",
        "회원가입" => "#22c55e",
        "구매" => "#ef4444",
        _ => "#6b7280",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NodeLayout {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LinkLayout {
    pub source: usize,
    pub target: usize,
    /// Band center at the source's right edge
    pub sy: f64,
    /// Band center at the target's left edge
    pub ty: f64,
    pub width: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FlowLayout {
    pub nodes: Vec<NodeLayout>,
    pub links: Vec<LinkLayout>,
}

/// Column of each node: longest link path from a source, with sinks
/// pushed to the last column
fn node_depths(count: usize, flow: &TrafficFlow) -> Vec<usize> {
    let mut depths = vec![0usize; count];
    for _ in 0..count {
        for link in &flow.links {
            if link.source < count && link.target < count {
                depths[link.target] = depths[link.target].max(depths[link.source] + 1);
            }
        }
    }

    let max_depth = depths.iter().copied().max().unwrap_or(0);
    let mut has_outgoing = vec![false; count];
    for link in &flow.links {
        if link.source < count {
            has_outgoing[link.source] = true;
        }
    }
    for (depth, outgoing) in depths.iter_mut().zip(has_outgoing) {
        if !outgoing {
            *depth = max_depth;
        }
    }
    depths
}

/// Volume through each node: the larger of incoming and outgoing sums
fn node_values(count: usize, flow: &TrafficFlow) -> Vec<f64> {
    let mut incoming = vec![0.0f64; count];
    let mut outgoing = vec![0.0f64; count];
    for link in &flow.links {
        if link.source < count && link.target < count {
            outgoing[link.source] += link.value;
            incoming[link.target] += link.value;
        }
    }
    incoming
        .into_iter()
        .zip(outgoing)
        .map(|(i, o)| i.max(o))
        .collect()
}

pub(crate) fn compute_layout(flow: &TrafficFlow, width: f64, height: f64) -> FlowLayout {
    let count = flow.nodes.len();
    if count == 0 {
        return FlowLayout::default();
    }

    let depths = node_depths(count, flow);
    let values = node_values(count, flow);
    let max_depth = depths.iter().copied().max().unwrap_or(0);

    let inner_width = width - 2.0 * EDGE_INSET;
    let inner_height = height - 2.0 * EDGE_INSET;

    // Columns in depth order, nodes keeping their declaration order
    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); max_depth + 1];
    for (index, depth) in depths.iter().enumerate() {
        columns[*depth].push(index);
    }

    // One vertical scale for the whole diagram, set by the fullest column
    let mut ky = f64::INFINITY;
    for column in &columns {
        let total: f64 = column.iter().map(|i| values[*i]).sum();
        if total > 0.0 {
            let available = inner_height - (column.len() - 1) as f64 * NODE_PADDING;
            ky = ky.min(available / total);
        }
    }
    if !ky.is_finite() {
        ky = 0.0;
    }

    let mut nodes = vec![
        NodeLayout {
            x0: 0.0,
            x1: 0.0,
            y0: 0.0,
            y1: 0.0,
        };
        count
    ];

    for (depth, column) in columns.iter().enumerate() {
        let x0 = if max_depth == 0 {
            EDGE_INSET
        } else {
            EDGE_INSET + depth as f64 / max_depth as f64 * (inner_width - NODE_WIDTH)
        };

        let column_height: f64 = column.iter().map(|i| values[*i] * ky).sum::<f64>()
            + (column.len().saturating_sub(1)) as f64 * NODE_PADDING;
        let mut y = EDGE_INSET + (inner_height - column_height) / 2.0;

        for index in column {
            let height = values[*index] * ky;
            nodes[*index] = NodeLayout {
                x0,
                x1: x0 + NODE_WIDTH,
                y0: y,
                y1: y + height,
            };
            y += height + NODE_PADDING;
        }
    }

    // Stack link bands down each node edge in declaration order
    let mut out_offsets: Vec<f64> = nodes.iter().map(|n| n.y0).collect();
    let mut in_offsets: Vec<f64> = nodes.iter().map(|n| n.y0).collect();
    let mut links = Vec::with_capacity(flow.links.len());
    for link in &flow.links {
        if link.source >= count || link.target >= count {
            continue;
        }
        let band = link.value * ky;
        let sy = out_offsets[link.source] + band / 2.0;
        let ty = in_offsets[link.target] + band / 2.0;
        out_offsets[link.source] += band;
        in_offsets[link.target] += band;
        links.push(LinkLayout {
            source: link.source,
            target: link.target,
            sy,
            ty,
            width: band,
        });
    }

    FlowLayout { nodes, links }
}

fn draw_traffic_flow(canvas: &HtmlCanvasElement, flow: &TrafficFlow) {
    let ctx = match chart_context(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    if flow.nodes.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    let layout = compute_layout(flow, width, height);

    // Links under nodes, tinted by their source channel
    ctx.set_global_alpha(0.5);
    for link in &layout.links {
        let source = &layout.nodes[link.source];
        let target = &layout.nodes[link.target];
        let mid = (source.x1 + target.x0) / 2.0;

        ctx.set_stroke_style_str(node_color(&flow.nodes[link.source]));
        ctx.set_line_width(link.width.max(1.0));
        ctx.begin_path();
        ctx.move_to(source.x1, link.sy);
        ctx.bezier_curve_to(mid, link.sy, mid, link.ty, target.x0, link.ty);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);

    for (index, node) in layout.nodes.iter().enumerate() {
        ctx.set_fill_style_str(node_color(&flow.nodes[index]));
        ctx.fill_rect(node.x0, node.y0, node.x1 - node.x0, node.y1 - node.y0);
    }

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("500 12px sans-serif");
    for (index, node) in layout.nodes.iter().enumerate() {
        let y = (node.y0 + node.y1) / 2.0 + 4.0;
        if node.x0 < width / 2.0 {
            ctx.set_text_align("left");
            let _ = ctx.fill_text(&flow.nodes[index], node.x1 + 6.0, y);
        } else {
            ctx.set_text_align("right");
            let _ = ctx.fill_text(&flow.nodes[index], node.x0 - 6.0, y);
        }
    }
    ctx.set_text_align("left");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn test_columns_span_the_canvas() {
        let flow = mock::traffic_flow();
        let layout = compute_layout(&flow, 800.0, 400.0);

        // Channels on the left edge
        for index in 0..4 {
            assert_eq!(layout.nodes[index].x0, EDGE_INSET);
        }
        // Landing pages in the middle column
        assert_eq!(layout.nodes[4].x0, 390.0);
        assert_eq!(layout.nodes[5].x0, 390.0);
        // Outcomes flush against the right edge
        assert_eq!(layout.nodes[6].x1, 790.0);
        assert_eq!(layout.nodes[7].x1, 790.0);
    }

    #[test]
    fn test_node_heights_follow_volume() {
        let flow = mock::traffic_flow();
        let layout = compute_layout(&flow, 800.0, 400.0);

        let height = |i: usize| layout.nodes[i].y1 - layout.nodes[i].y0;

        // 홈페이지 carries the most volume
        for index in 0..flow.nodes.len() {
            if index != 4 {
                assert!(height(4) > height(index));
            }
        }
        // Heights scale linearly with volume: 홈페이지 8600 vs 검색엔진 5500
        assert!((height(4) / height(0) - 8600.0 / 5500.0).abs() < 1e-9);
    }

    #[test]
    fn test_link_bands_fill_their_source() {
        let flow = mock::traffic_flow();
        let layout = compute_layout(&flow, 800.0, 400.0);

        let outgoing: f64 = layout
            .links
            .iter()
            .filter(|l| l.source == 0)
            .map(|l| l.width)
            .sum();
        let node_height = layout.nodes[0].y1 - layout.nodes[0].y0;
        assert!((outgoing - node_height).abs() < 1e-9);

        // Bands stay inside the node edge
        for link in &layout.links {
            let node = &layout.nodes[link.source];
            assert!(link.sy - link.width / 2.0 >= node.y0 - 1e-9);
            assert!(link.sy + link.width / 2.0 <= node.y1 + 1e-9);
        }
    }

    #[test]
    fn test_empty_flow_has_no_layout() {
        let flow = TrafficFlow {
            nodes: vec![],
            links: vec![],
        };
        assert_eq!(compute_layout(&flow, 800.0, 400.0), FlowLayout::default());
    }

    #[test]
    fn test_unknown_channel_gets_fallback_color() {
        assert_eq!(node_color("검색엔진"), "#10b981");
        assert_eq!(node_color("제휴"), "#6b7280");
    }
}
