//! The bar layer and its decorations: bars, bar-top caps, value labels.

use crate::chart::config::ChartConfig;
use crate::chart::geometry;
use crate::chart::hooks::{BarContext, BarTopContext, RenderHooks};
use crate::chart::paint::{FILL_SHADOW_GRADIENT_ID, custom_color_id};
use crate::models::ChartData;
use crate::svg::{Fill, Node, Rect, Text, TextAnchor};

/// One rect per value of the primary dataset.
pub(crate) fn render_bars(data: &ChartData, config: &ChartConfig, hooks: &RenderHooks) -> Node {
    let values = &data.datasets[0].data;
    let values2 = data.comparison_data();
    let height = config.height;
    let base_height = geometry::calc_base_height(values, height, config.from_zero);
    let base_height2 = geometry::calc_base_height(&values2, height, config.from_zero);
    let bar_width = geometry::bar_width(config.bar_percentage);

    let bars = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let ctx = BarContext {
                index: i,
                data: values,
                data2: &values2,
                width: config.width,
                height,
                padding_top: config.padding_top,
                padding_right: config.padding_right,
                bar_width,
                base_height,
                bar_height: geometry::calc_height(value, values, height, config.from_zero),
                base_height2,
                bar_height2: geometry::calc_height(values2[i], &values2, height, config.from_zero),
                bar_radius: config.bar_radius,
                bar_radius_x: config.bar_radius_x,
                bar_radius_y: config.bar_radius_y,
                with_custom_bar_color_from_data: config.with_custom_bar_color_from_data,
            };
            match &hooks.bar {
                Some(renderer) => renderer.render(&ctx),
                None => render_bar(&ctx),
            }
        })
        .collect();
    Node::Group(bars)
}

fn render_bar(ctx: &BarContext<'_>) -> Node {
    let (rx, ry) = geometry::corner_radii(ctx.bar_radius, ctx.bar_radius_x, ctx.bar_radius_y);
    let fill = if ctx.with_custom_bar_color_from_data {
        Fill::Url(custom_color_id(0, ctx.index))
    } else {
        Fill::Url(FILL_SHADOW_GRADIENT_ID.to_string())
    };
    Node::Rect(Rect {
        x: geometry::bar_x(
            ctx.index,
            ctx.data.len(),
            ctx.width,
            ctx.padding_right,
            ctx.bar_width,
        ),
        y: geometry::bar_y(ctx.base_height, ctx.bar_height, ctx.padding_top),
        width: ctx.bar_width,
        height: geometry::bar_draw_height(ctx.bar_height),
        rx,
        ry,
        fill,
    })
}

fn bar_top_contexts<'a>(
    values: &'a [f64],
    config: &ChartConfig,
) -> impl Iterator<Item = BarTopContext<'a>> {
    let height = config.height;
    let base_height = geometry::calc_base_height(values, height, config.from_zero);
    let bar_width = geometry::bar_width(config.bar_percentage);
    let color = (config.color)(0.6);
    let from_zero = config.from_zero;
    let (width, padding_top, padding_right) =
        (config.width, config.padding_top, config.padding_right);
    values.iter().enumerate().map(move |(i, &value)| BarTopContext {
        index: i,
        data: values,
        width,
        height,
        padding_top,
        padding_right,
        bar_width,
        base_height,
        bar_height: geometry::calc_height(value, values, height, from_zero),
        color,
    })
}

/// A thin cap at the top edge of each bar.
pub(crate) fn render_bar_tops(data: &ChartData, config: &ChartConfig, hooks: &RenderHooks) -> Node {
    let caps = bar_top_contexts(&data.datasets[0].data, config)
        .map(|ctx| match &hooks.bar_top {
            Some(renderer) => renderer.render(&ctx),
            None => render_bar_top(&ctx),
        })
        .collect();
    Node::Group(caps)
}

fn render_bar_top(ctx: &BarTopContext<'_>) -> Node {
    Node::Rect(Rect {
        x: geometry::bar_x(
            ctx.index,
            ctx.data.len(),
            ctx.width,
            ctx.padding_right,
            ctx.bar_width,
        ),
        y: (ctx.base_height - ctx.bar_height) * geometry::VERTICAL_SHRINK + ctx.padding_top,
        width: ctx.bar_width,
        height: 2.0,
        rx: None,
        ry: None,
        fill: Fill::Color(ctx.color),
    })
}

/// The raw data value as centered text immediately above each bar top.
pub(crate) fn render_values_on_top_of_bars(
    data: &ChartData,
    config: &ChartConfig,
    hooks: &RenderHooks,
) -> Node {
    let labels = bar_top_contexts(&data.datasets[0].data, config)
        .map(|ctx| match &hooks.value_label {
            Some(renderer) => renderer.render(&ctx),
            None => render_value_on_top_of_bar(&ctx),
        })
        .collect();
    Node::Group(labels)
}

fn render_value_on_top_of_bar(ctx: &BarTopContext<'_>) -> Node {
    // Centered on the bar: the bar's left edge sits half a bar width past the
    // slot origin, so the text anchor lands another half width to the right.
    let x = ctx.padding_right
        + (ctx.index as f64) * (ctx.width - ctx.padding_right) / (ctx.data.len() as f64)
        + ctx.bar_width;
    Node::Text(Text {
        x,
        y: (ctx.base_height - ctx.bar_height) * geometry::VERTICAL_SHRINK + ctx.padding_top - 1.0,
        content: format_raw_value(ctx.data[ctx.index]),
        fill: ctx.color,
        font_size: 12.0,
        anchor: TextAnchor::Middle,
        rotation: 0.0,
    })
}

/// Render a raw value the way the data carries it: integers without a
/// decimal point.
fn format_raw_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1.0e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
