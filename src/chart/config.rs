//! Chart configuration: dimensions, paddings, toggles, colors, formatters.

use std::fmt;
use std::sync::Arc;

use crate::error::ChartError;
use crate::style::{ColorFn, Rgba, solid_color};

/// Formats a y-axis value into its display string.
pub type YLabelFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Formats an x-axis category label into its display string.
pub type XLabelFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Full render configuration. Supplied wholesale on each render; the chart
/// holds no state of its own.
#[derive(Clone)]
pub struct ChartConfig {
    /// Drawing surface width in pixels.
    pub width: f64,
    /// Drawing surface height in pixels.
    pub height: f64,
    /// Vertical inset above the plot.
    pub padding_top: f64,
    /// Horizontal inset reserved on the left for the y-label column. The
    /// name is historical; bars start after this allocation.
    pub padding_right: f64,
    /// Corner radius of the background rect.
    pub border_radius: f64,

    /// Uniform bar corner radius; zero means square corners.
    pub bar_radius: f64,
    /// Per-axis x radius, overriding `bar_radius` when set.
    pub bar_radius_x: Option<f64>,
    /// Per-axis y radius, overriding `bar_radius` when set.
    pub bar_radius_y: Option<f64>,
    /// Fraction of the nominal 32 px bar width actually drawn.
    pub bar_percentage: f64,

    /// Decimal places of the default y-label formatter.
    pub decimal_places: usize,
    /// Horizontal grid line count (and y-label step count).
    pub segments: usize,
    /// Locale tag for the default y-label formatter (`"en"`, `"de"`, ...).
    pub locale: String,
    /// Prefix prepended to every y label.
    pub y_axis_label: String,
    /// Suffix appended to every y label.
    pub y_axis_suffix: String,
    /// Suffix appended to every x label.
    pub x_axis_label: String,
    /// Rotation of y-value labels, degrees.
    pub horizontal_label_rotation: f64,
    /// Rotation of category labels, degrees.
    pub vertical_label_rotation: f64,
    /// Gap between the y-label column and the plot.
    pub y_labels_offset: f64,
    /// Extra vertical offset for category labels.
    pub x_labels_offset: f64,
    /// Separate top padding for category labels; falls back to `padding_top`.
    pub padding_top_vertical_labels: Option<f64>,

    /// Scale from zero instead of from the series minimum.
    pub from_zero: bool,
    /// Draw horizontal grid lines.
    pub with_inner_lines: bool,
    /// Draw y-value labels.
    pub with_horizontal_labels: bool,
    /// Draw category labels.
    pub with_vertical_labels: bool,
    /// Draw the 2 px cap at the top of each bar.
    pub show_bar_tops: bool,
    /// Draw the raw value above each bar.
    pub show_values_on_top_of_bars: bool,
    /// Fill bars from per-value dataset colors instead of the shared paint.
    pub with_custom_bar_color_from_data: bool,
    /// Repeat the high-opacity stop in custom gradients, producing solid fills.
    pub flat_color: bool,

    /// Base color generator for grid lines, bar tops, and value labels.
    pub color: ColorFn,
    /// Label color generator; falls back to `color`.
    pub label_color: Option<ColorFn>,
    pub background_gradient_from: Rgba,
    pub background_gradient_to: Rgba,
    pub background_gradient_from_opacity: f64,
    pub background_gradient_to_opacity: f64,
    /// Start color of the shared bar fill gradient; falls back to `color(1.0)`.
    pub fill_shadow_gradient_from: Option<Rgba>,
    pub fill_shadow_gradient_from_opacity: f64,
    /// End color of the shared bar fill gradient; falls back to the start color.
    pub fill_shadow_gradient_to: Option<Rgba>,
    pub fill_shadow_gradient_to_opacity: f64,

    /// Overrides the default y-label formatter (fixed decimals, locale
    /// grouping).
    pub format_y_label: Option<YLabelFormatter>,
    /// Overrides the default x-label formatter (identity).
    pub format_x_label: Option<XLabelFormatter>,
}

impl ChartConfig {
    pub fn new(width: f64, height: f64) -> Self {
        ChartConfig {
            width,
            height,
            ..ChartConfig::default()
        }
    }

    /// Reject dimensions and factors the geometry cannot work with.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.bar_percentage > 0.0) || !self.bar_percentage.is_finite() {
            return Err(ChartError::InvalidBarPercentage(self.bar_percentage));
        }
        if self.segments == 0 {
            return Err(ChartError::InvalidSegments);
        }
        Ok(())
    }

    pub(crate) fn label_color_fn(&self) -> &ColorFn {
        self.label_color.as_ref().unwrap_or(&self.color)
    }

    pub(crate) fn fill_shadow_from(&self) -> Rgba {
        self.fill_shadow_gradient_from
            .unwrap_or_else(|| (self.color)(1.0))
    }

    pub(crate) fn fill_shadow_to(&self) -> Rgba {
        self.fill_shadow_gradient_to
            .unwrap_or_else(|| self.fill_shadow_from())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 400.0,
            height: 220.0,
            padding_top: 16.0,
            padding_right: 64.0,
            border_radius: 0.0,
            bar_radius: 0.0,
            bar_radius_x: None,
            bar_radius_y: None,
            bar_percentage: 1.0,
            decimal_places: 2,
            segments: 4,
            locale: "en".to_string(),
            y_axis_label: String::new(),
            y_axis_suffix: String::new(),
            x_axis_label: String::new(),
            horizontal_label_rotation: 0.0,
            vertical_label_rotation: 0.0,
            y_labels_offset: 12.0,
            x_labels_offset: 0.0,
            padding_top_vertical_labels: None,
            from_zero: false,
            with_inner_lines: true,
            with_horizontal_labels: true,
            with_vertical_labels: true,
            show_bar_tops: true,
            show_values_on_top_of_bars: false,
            with_custom_bar_color_from_data: false,
            flat_color: false,
            color: solid_color(Rgba::BLACK),
            label_color: None,
            background_gradient_from: Rgba::WHITE,
            background_gradient_to: Rgba::WHITE,
            background_gradient_from_opacity: 1.0,
            background_gradient_to_opacity: 1.0,
            fill_shadow_gradient_from: None,
            fill_shadow_gradient_from_opacity: 1.0,
            fill_shadow_gradient_to: None,
            fill_shadow_gradient_to_opacity: 0.0,
            format_y_label: None,
            format_x_label: None,
        }
    }
}

impl fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding_top", &self.padding_top)
            .field("padding_right", &self.padding_right)
            .field("bar_percentage", &self.bar_percentage)
            .field("segments", &self.segments)
            .field("from_zero", &self.from_zero)
            .field("with_inner_lines", &self.with_inner_lines)
            .field("with_horizontal_labels", &self.with_horizontal_labels)
            .field("with_vertical_labels", &self.with_vertical_labels)
            .field("show_bar_tops", &self.show_bar_tops)
            .field("show_values_on_top_of_bars", &self.show_values_on_top_of_bars)
            .field(
                "with_custom_bar_color_from_data",
                &self.with_custom_bar_color_from_data,
            )
            .field("flat_color", &self.flat_color)
            .finish_non_exhaustive()
    }
}
