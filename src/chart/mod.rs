//! Bar chart assembly: compose paint defs, grid, labels, and the bar layers
//! into one drawing surface.
//!
//! Rendering is a pure function from (data, config) to a primitive tree,
//! recomputed entirely on every invocation. Every visual sub-element can be
//! replaced through [`RenderHooks`] without changing the composition order.

pub mod axes;
pub mod bars;
pub mod config;
pub mod geometry;
pub mod hooks;
pub mod paint;

use std::fs;
use std::path::Path;

pub use config::ChartConfig;
pub use hooks::RenderHooks;

use crate::error::ChartError;
use crate::models::ChartData;
use crate::svg::{Document, Fill, Node, Rect};

/// A configured bar chart renderer.
pub struct BarChart {
    config: ChartConfig,
    hooks: RenderHooks,
}

impl BarChart {
    pub fn new(config: ChartConfig) -> Self {
        BarChart {
            config,
            hooks: RenderHooks::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: RenderHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render the chart to a primitive tree.
    ///
    /// Layer order, top to bottom of the document: paint defs, custom color
    /// defs, background, grid lines, y-value labels, category labels, bars,
    /// values above bars, bar tops. Each toggle adds or removes exactly its
    /// own group.
    pub fn render(&self, data: &ChartData) -> Result<Document, ChartError> {
        data.validate()?;
        self.config.validate()?;
        let config = &self.config;
        let hooks = &self.hooks;

        let mut doc = Document::new(config.width, config.height);

        let defs = match &hooks.defs {
            Some(renderer) => renderer.render(config),
            None => paint::render_defs(config),
        };
        doc.children.push(defs);
        doc.children
            .extend(paint::render_custom_colors(data, config.flat_color, hooks));

        let border_radius = (config.border_radius > 0.0).then_some(config.border_radius);
        doc.children.push(Node::Rect(Rect {
            x: 0.0,
            y: 0.0,
            width: config.width,
            height: config.height,
            rx: border_radius,
            ry: border_radius,
            fill: Fill::Url(paint::BACKGROUND_GRADIENT_ID.to_string()),
        }));

        if config.with_inner_lines {
            doc.children.push(axes::render_grid_lines(config, hooks));
        }
        if config.with_horizontal_labels {
            doc.children
                .push(axes::render_horizontal_labels(data, config, hooks));
        }
        if config.with_vertical_labels {
            doc.children
                .push(axes::render_vertical_labels(data, config, hooks));
        }

        doc.children.push(bars::render_bars(data, config, hooks));
        if config.show_values_on_top_of_bars {
            doc.children
                .push(bars::render_values_on_top_of_bars(data, config, hooks));
        }
        if config.show_bar_tops {
            doc.children.push(bars::render_bar_tops(data, config, hooks));
        }

        Ok(doc)
    }

    /// Render straight to an SVG string.
    pub fn render_to_string(&self, data: &ChartData) -> Result<String, ChartError> {
        Ok(self.render(data)?.to_svg_string())
    }

    /// Render and write an SVG file.
    pub fn save_svg<P: AsRef<Path>>(&self, data: &ChartData, path: P) -> Result<(), ChartError> {
        let svg = self.render_to_string(data)?;
        fs::write(path, svg)?;
        Ok(())
    }
}

/// Convenience: render with default hooks.
pub fn render(data: &ChartData, config: &ChartConfig) -> Result<Document, ChartError> {
    BarChart::new(config.clone()).render(data)
}
