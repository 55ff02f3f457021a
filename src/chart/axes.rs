//! Grid lines and axis labels.

use crate::chart::config::ChartConfig;
use crate::chart::geometry::{self, VERTICAL_SHRINK};
use crate::chart::hooks::{
    GridLinesContext, HorizontalLabelsContext, RenderHooks, VerticalLabelsContext,
};
use crate::format::format_fixed;
use crate::models::ChartData;
use crate::svg::{Line, Node, Text, TextAnchor};

const LABEL_FONT_SIZE: f64 = 12.0;

/// Horizontal grid lines, `segments + 1` of them including the baseline.
pub(crate) fn render_grid_lines(config: &ChartConfig, hooks: &RenderHooks) -> Node {
    let ctx = GridLinesContext {
        count: config.segments,
        width: config.width,
        height: config.height,
        padding_top: config.padding_top,
        padding_right: config.padding_right,
        stroke: (config.color)(0.2),
    };
    let lines = match &hooks.grid_lines {
        Some(renderer) => renderer.render(&ctx),
        None => grid_lines(&ctx),
    };
    Node::Group(lines)
}

fn grid_lines(ctx: &GridLinesContext) -> Vec<Node> {
    let base_position = ctx.height * VERTICAL_SHRINK;
    (0..=ctx.count)
        .map(|i| {
            let y = base_position / (ctx.count as f64) * (i as f64) + ctx.padding_top;
            Node::Line(Line {
                x1: ctx.padding_right,
                y1: y,
                x2: ctx.width,
                y2: y,
                stroke: ctx.stroke,
                stroke_width: 1.0,
                stroke_dasharray: Some("5, 10".to_string()),
            })
        })
        .collect()
}

/// Y-value labels along the left edge of the plot, one per grid step.
pub(crate) fn render_horizontal_labels(
    data: &ChartData,
    config: &ChartConfig,
    hooks: &RenderHooks,
) -> Node {
    let ctx = HorizontalLabelsContext {
        count: config.segments,
        data: &data.datasets[0].data,
        height: config.height,
        padding_top: config.padding_top,
        padding_right: config.padding_right,
    };
    let labels = match &hooks.horizontal_labels {
        Some(renderer) => renderer.render(&ctx),
        None => horizontal_labels(&ctx, config),
    };
    Node::Group(labels)
}

fn horizontal_labels(ctx: &HorizontalLabelsContext<'_>, config: &ChartConfig) -> Vec<Node> {
    let count = ctx.count;
    let scaler = geometry::calc_scaler(ctx.data, config.from_zero);
    let min = ctx.data.iter().copied().fold(f64::INFINITY, f64::min);
    let low = if config.from_zero { min.min(0.0) } else { min };
    let base_position = ctx.height * VERTICAL_SHRINK;
    let fill = (config.label_color_fn())(1.0);

    // A single segment collapses to one label at the baseline.
    let steps = if count == 1 { 1 } else { count + 1 };
    (0..steps)
        .map(|i| {
            let value = scaler / (count as f64) * (i as f64) + low;
            let display = match &config.format_y_label {
                Some(f) => f(value),
                None => format_fixed(value, config.decimal_places, &config.locale),
            };
            Node::Text(Text {
                x: ctx.padding_right - config.y_labels_offset,
                y: base_position - base_position / (count as f64) * (i as f64)
                    + ctx.padding_top
                    + LABEL_FONT_SIZE,
                content: format!("{}{}{}", config.y_axis_label, display, config.y_axis_suffix),
                fill,
                font_size: LABEL_FONT_SIZE,
                anchor: TextAnchor::End,
                rotation: config.horizontal_label_rotation,
            })
        })
        .collect()
}

/// Category labels beneath the bars, one per label.
pub(crate) fn render_vertical_labels(
    data: &ChartData,
    config: &ChartConfig,
    hooks: &RenderHooks,
) -> Node {
    let ctx = VerticalLabelsContext {
        labels: &data.labels,
        width: config.width,
        height: config.height,
        padding_top: config
            .padding_top_vertical_labels
            .unwrap_or(config.padding_top),
        padding_right: config.padding_right,
        horizontal_offset: geometry::bar_width(config.bar_percentage),
    };
    let labels = match &hooks.vertical_labels {
        Some(renderer) => renderer.render(&ctx),
        None => vertical_labels(&ctx, config),
    };
    Node::Group(labels)
}

fn vertical_labels(ctx: &VerticalLabelsContext<'_>, config: &ChartConfig) -> Vec<Node> {
    let count = ctx.labels.len() as f64;
    let fill = (config.label_color_fn())(1.0);
    let anchor = if config.vertical_label_rotation == 0.0 {
        TextAnchor::Middle
    } else {
        TextAnchor::Start
    };
    ctx.labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let display = match &config.format_x_label {
                Some(f) => f(label),
                None => label.clone(),
            };
            Node::Text(Text {
                x: (ctx.width - ctx.padding_right) / count * (i as f64)
                    + ctx.padding_right
                    + ctx.horizontal_offset,
                y: ctx.height * VERTICAL_SHRINK
                    + ctx.padding_top
                    + LABEL_FONT_SIZE * 2.0
                    + config.x_labels_offset,
                content: format!("{}{}", display, config.x_axis_label),
                fill,
                font_size: LABEL_FONT_SIZE,
                anchor,
                rotation: config.vertical_label_rotation,
            })
        })
        .collect()
}
