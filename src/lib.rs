//! barkit
//!
//! A small Rust library for rendering labeled numeric series as SVG bar
//! charts. Pairs with the `barkit` CLI.
//!
//! ### Features
//! - Pure rendering: (data, config) → a tree of drawing primitives, then SVG
//! - Proportional bar scaling with an optional comparison baseline series
//! - Gradient or flat bar fills, per-value colors from the data
//! - Toggleable grid lines, axis labels, bar caps, and value labels
//! - Override hooks to replace any visual sub-element
//!
//! ### Example
//! ```
//! use barkit::{BarChart, ChartConfig, ChartData, Dataset};
//!
//! let data = ChartData::new(
//!     vec!["A".into(), "B".into()],
//!     vec![Dataset::new(vec![10.0, 20.0])],
//! );
//! let chart = BarChart::new(ChartConfig::new(400.0, 220.0));
//! let svg = chart.render_to_string(&data)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), barkit::ChartError>(())
//! ```

pub mod chart;
pub mod error;
pub mod format;
pub mod models;
pub mod style;
pub mod svg;

pub use chart::{BarChart, ChartConfig, RenderHooks, render};
pub use error::ChartError;
pub use models::{ChartData, Dataset};
pub use style::{ColorFn, Rgba, solid_color};
pub use svg::{Document, Node};
