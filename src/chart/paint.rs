//! Paint resources: the background gradient, the shared bar fill gradient,
//! and per-dataset custom color gradients.

use crate::chart::config::ChartConfig;
use crate::chart::hooks::{ColorContext, RenderHooks};
use crate::models::ChartData;
use crate::svg::{GradientUnits, LinearGradient, Node, Stop};

/// Paint id of the background gradient.
pub const BACKGROUND_GRADIENT_ID: &str = "backgroundGradient";

/// Paint id of the shared bar fill gradient.
pub const FILL_SHADOW_GRADIENT_ID: &str = "fillShadowGradient";

/// Paint id of the custom gradient for one (dataset, value) pair.
pub fn custom_color_id(dataset_index: usize, color_index: usize) -> String {
    format!("customColor_{dataset_index}_{color_index}")
}

/// The two global paint resources every chart registers: a diagonal
/// background gradient and the vertical fill gradient default bars use.
pub(crate) fn render_defs(config: &ChartConfig) -> Node {
    let background = LinearGradient {
        id: BACKGROUND_GRADIENT_ID.to_string(),
        x1: 0.0,
        y1: config.height,
        x2: config.width,
        y2: 0.0,
        units: GradientUnits::UserSpaceOnUse,
        stops: vec![
            Stop {
                offset: 0.0,
                color: config.background_gradient_from,
                opacity: config.background_gradient_from_opacity,
            },
            Stop {
                offset: 1.0,
                color: config.background_gradient_to,
                opacity: config.background_gradient_to_opacity,
            },
        ],
    };
    let fill_shadow = LinearGradient {
        id: FILL_SHADOW_GRADIENT_ID.to_string(),
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: config.height,
        units: GradientUnits::UserSpaceOnUse,
        stops: vec![
            Stop {
                offset: 0.0,
                color: config.fill_shadow_from(),
                opacity: config.fill_shadow_gradient_from_opacity,
            },
            Stop {
                offset: 1.0,
                color: config.fill_shadow_to(),
                opacity: config.fill_shadow_gradient_to_opacity,
            },
        ],
    };
    Node::Defs(vec![
        Node::LinearGradient(background),
        Node::LinearGradient(fill_shadow),
    ])
}

/// Register one gradient per declared per-value color, addressable as
/// `(dataset index, color index)`. For each color two samples are derived:
/// high opacity (factor 1.0) and low opacity (factor 0.1). Flat mode repeats
/// the high sample in both stops; gradient mode fades to transparent.
pub(crate) fn render_custom_colors(
    data: &ChartData,
    flat_color: bool,
    hooks: &RenderHooks,
) -> Vec<Node> {
    data.datasets
        .iter()
        .enumerate()
        .filter(|(_, dataset)| !dataset.colors.is_empty())
        .map(|(dataset_index, dataset)| {
            let gradients = dataset
                .colors
                .iter()
                .enumerate()
                .map(|(color_index, color)| {
                    let ctx = ColorContext {
                        dataset_index,
                        color_index,
                        high_opacity_color: color(1.0),
                        low_opacity_color: color(0.1),
                        flat_color,
                    };
                    match &hooks.color {
                        Some(renderer) => renderer.render(&ctx),
                        None => render_color(&ctx),
                    }
                })
                .collect();
            Node::Defs(gradients)
        })
        .collect()
}

fn render_color(ctx: &ColorContext) -> Node {
    let second = if ctx.flat_color {
        Stop {
            offset: 1.0,
            color: ctx.high_opacity_color,
            opacity: 1.0,
        }
    } else {
        Stop {
            offset: 1.0,
            color: ctx.low_opacity_color,
            opacity: 0.0,
        }
    };
    Node::LinearGradient(LinearGradient {
        id: custom_color_id(ctx.dataset_index, ctx.color_index),
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 1.0,
        units: GradientUnits::ObjectBoundingBox,
        stops: vec![
            Stop {
                offset: 0.0,
                color: ctx.high_opacity_color,
                opacity: 1.0,
            },
            second,
        ],
    })
}
