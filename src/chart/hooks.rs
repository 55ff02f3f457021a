//! Override strategies for the chart's visual sub-elements.
//!
//! Each sub-element has a strategy trait with a built-in default. A hook
//! receives exactly the computed inputs the built-in renderer would have
//! used, and its return value entirely replaces the built-in primitive(s)
//! without altering the composition order. Closures with the matching
//! signature implement the traits via blanket impls.

use crate::chart::config::ChartConfig;
use crate::style::Rgba;
use crate::svg::Node;

/// Geometry for one bar. `base_height2`/`bar_height2` come from the optional
/// comparison series (falling back to the primary series) and are consumed by
/// override renderers only; the default bar ignores them.
#[derive(Debug, Clone)]
pub struct BarContext<'a> {
    pub index: usize,
    pub data: &'a [f64],
    pub data2: &'a [f64],
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    pub bar_width: f64,
    pub base_height: f64,
    pub bar_height: f64,
    pub base_height2: f64,
    pub bar_height2: f64,
    pub bar_radius: f64,
    pub bar_radius_x: Option<f64>,
    pub bar_radius_y: Option<f64>,
    pub with_custom_bar_color_from_data: bool,
}

/// Geometry for one bar-top cap or one value label.
#[derive(Debug, Clone)]
pub struct BarTopContext<'a> {
    pub index: usize,
    pub data: &'a [f64],
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    pub bar_width: f64,
    pub base_height: f64,
    pub bar_height: f64,
    /// Tint the built-in renderer would use.
    pub color: Rgba,
}

/// One (dataset, value) color pair sampled for gradient registration.
#[derive(Debug, Clone)]
pub struct ColorContext {
    pub dataset_index: usize,
    pub color_index: usize,
    pub high_opacity_color: Rgba,
    pub low_opacity_color: Rgba,
    pub flat_color: bool,
}

/// Inputs for the horizontal grid line group.
#[derive(Debug, Clone)]
pub struct GridLinesContext {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    pub stroke: Rgba,
}

/// Inputs for the y-value label group.
#[derive(Debug, Clone)]
pub struct HorizontalLabelsContext<'a> {
    pub count: usize,
    pub data: &'a [f64],
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
}

/// Inputs for the category label group.
#[derive(Debug, Clone)]
pub struct VerticalLabelsContext<'a> {
    pub labels: &'a [String],
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    /// Horizontal shift centering labels under their bars.
    pub horizontal_offset: f64,
}

pub trait BarRenderer: Send + Sync {
    fn render(&self, ctx: &BarContext<'_>) -> Node;
}

pub trait BarTopRenderer: Send + Sync {
    fn render(&self, ctx: &BarTopContext<'_>) -> Node;
}

pub trait ValueLabelRenderer: Send + Sync {
    fn render(&self, ctx: &BarTopContext<'_>) -> Node;
}

pub trait ColorRenderer: Send + Sync {
    fn render(&self, ctx: &ColorContext) -> Node;
}

pub trait DefsRenderer: Send + Sync {
    fn render(&self, config: &ChartConfig) -> Node;
}

pub trait GridLinesRenderer: Send + Sync {
    fn render(&self, ctx: &GridLinesContext) -> Vec<Node>;
}

pub trait HorizontalLabelsRenderer: Send + Sync {
    fn render(&self, ctx: &HorizontalLabelsContext<'_>) -> Vec<Node>;
}

pub trait VerticalLabelsRenderer: Send + Sync {
    fn render(&self, ctx: &VerticalLabelsContext<'_>) -> Vec<Node>;
}

impl<F> BarRenderer for F
where
    F: Fn(&BarContext<'_>) -> Node + Send + Sync,
{
    fn render(&self, ctx: &BarContext<'_>) -> Node {
        self(ctx)
    }
}

impl<F> BarTopRenderer for F
where
    F: Fn(&BarTopContext<'_>) -> Node + Send + Sync,
{
    fn render(&self, ctx: &BarTopContext<'_>) -> Node {
        self(ctx)
    }
}

/// Closures cannot distinguish the bar-top and value-label traits by
/// signature alone; wrap one in `ValueLabelFn` when both hooks are closures.
pub struct ValueLabelFn<F>(pub F);

impl<F> ValueLabelRenderer for ValueLabelFn<F>
where
    F: Fn(&BarTopContext<'_>) -> Node + Send + Sync,
{
    fn render(&self, ctx: &BarTopContext<'_>) -> Node {
        (self.0)(ctx)
    }
}

impl<F> ColorRenderer for F
where
    F: Fn(&ColorContext) -> Node + Send + Sync,
{
    fn render(&self, ctx: &ColorContext) -> Node {
        self(ctx)
    }
}

impl<F> DefsRenderer for F
where
    F: Fn(&ChartConfig) -> Node + Send + Sync,
{
    fn render(&self, config: &ChartConfig) -> Node {
        self(config)
    }
}

impl<F> GridLinesRenderer for F
where
    F: Fn(&GridLinesContext) -> Vec<Node> + Send + Sync,
{
    fn render(&self, ctx: &GridLinesContext) -> Vec<Node> {
        self(ctx)
    }
}

impl<F> HorizontalLabelsRenderer for F
where
    F: Fn(&HorizontalLabelsContext<'_>) -> Vec<Node> + Send + Sync,
{
    fn render(&self, ctx: &HorizontalLabelsContext<'_>) -> Vec<Node> {
        self(ctx)
    }
}

impl<F> VerticalLabelsRenderer for F
where
    F: Fn(&VerticalLabelsContext<'_>) -> Vec<Node> + Send + Sync,
{
    fn render(&self, ctx: &VerticalLabelsContext<'_>) -> Vec<Node> {
        self(ctx)
    }
}

/// Caller-supplied replacements, one optional slot per visual sub-element.
/// Empty by default; every unset slot falls back to the built-in renderer.
#[derive(Default)]
pub struct RenderHooks {
    pub bar: Option<Box<dyn BarRenderer>>,
    pub bar_top: Option<Box<dyn BarTopRenderer>>,
    pub value_label: Option<Box<dyn ValueLabelRenderer>>,
    pub color: Option<Box<dyn ColorRenderer>>,
    pub defs: Option<Box<dyn DefsRenderer>>,
    pub grid_lines: Option<Box<dyn GridLinesRenderer>>,
    pub horizontal_labels: Option<Box<dyn HorizontalLabelsRenderer>>,
    pub vertical_labels: Option<Box<dyn VerticalLabelsRenderer>>,
}

impl RenderHooks {
    pub fn new() -> Self {
        RenderHooks::default()
    }

    pub fn bar(mut self, renderer: impl BarRenderer + 'static) -> Self {
        self.bar = Some(Box::new(renderer));
        self
    }

    pub fn bar_top(mut self, renderer: impl BarTopRenderer + 'static) -> Self {
        self.bar_top = Some(Box::new(renderer));
        self
    }

    pub fn value_label(mut self, renderer: impl ValueLabelRenderer + 'static) -> Self {
        self.value_label = Some(Box::new(renderer));
        self
    }

    pub fn color(mut self, renderer: impl ColorRenderer + 'static) -> Self {
        self.color = Some(Box::new(renderer));
        self
    }

    pub fn defs(mut self, renderer: impl DefsRenderer + 'static) -> Self {
        self.defs = Some(Box::new(renderer));
        self
    }

    pub fn grid_lines(mut self, renderer: impl GridLinesRenderer + 'static) -> Self {
        self.grid_lines = Some(Box::new(renderer));
        self
    }

    pub fn horizontal_labels(mut self, renderer: impl HorizontalLabelsRenderer + 'static) -> Self {
        self.horizontal_labels = Some(Box::new(renderer));
        self
    }

    pub fn vertical_labels(mut self, renderer: impl VerticalLabelsRenderer + 'static) -> Self {
        self.vertical_labels = Some(Box::new(renderer));
        self
    }
}
