//! Chart input data: labeled, index-aligned numeric series.

use std::fmt;

use serde::Deserialize;

use crate::error::ChartError;
use crate::style::{ColorFn, Rgba, solid_color};

/// One ordered sequence of numeric values sharing the label axis.
///
/// `color` is a per-dataset color generator; `colors` holds per-value
/// overrides used when the chart is configured to take bar colors from the
/// data. Both are optional. In JSON, `colors` is a list of hex strings; the
/// generator is code-level only.
#[derive(Clone, Deserialize)]
#[serde(try_from = "DatasetSpec")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub key: Option<String>,
    pub color: Option<ColorFn>,
    pub colors: Vec<ColorFn>,
}

impl Dataset {
    pub fn new(data: Vec<f64>) -> Self {
        Dataset {
            data,
            key: None,
            color: None,
            colors: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_color(mut self, color: ColorFn) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_colors(mut self, colors: Vec<ColorFn>) -> Self {
        self.colors = colors;
        self
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("data", &self.data)
            .field("key", &self.key)
            .field("color", &self.color.is_some())
            .field("colors", &self.colors.len())
            .finish()
    }
}

/// JSON shape for `Dataset`; per-value colors are hex strings.
#[derive(Deserialize)]
struct DatasetSpec {
    data: Vec<f64>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    colors: Vec<String>,
}

impl TryFrom<DatasetSpec> for Dataset {
    type Error = ChartError;

    fn try_from(spec: DatasetSpec) -> Result<Self, ChartError> {
        let mut colors = Vec::with_capacity(spec.colors.len());
        for hex in &spec.colors {
            let rgba = Rgba::from_hex(hex).ok_or_else(|| ChartError::InvalidColor(hex.clone()))?;
            colors.push(solid_color(rgba));
        }
        Ok(Dataset {
            data: spec.data,
            key: spec.key,
            color: None,
            colors,
        })
    }
}

/// The full chart input: category labels plus one or more datasets.
///
/// The first dataset is the primary series and must be index-aligned with the
/// labels. An optional second dataset acts as a comparison baseline; where it
/// is shorter or absent its values fall back to the first dataset's.
#[derive(Clone, Debug, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        ChartData { labels, datasets }
    }

    /// Check the input shape before any geometry is computed.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.labels.is_empty() {
            return Err(ChartError::EmptyLabels);
        }
        if self.datasets.is_empty() {
            return Err(ChartError::EmptyDatasets);
        }
        let first = &self.datasets[0];
        if first.data.len() != self.labels.len() {
            return Err(ChartError::LengthMismatch {
                dataset: 0,
                labels: self.labels.len(),
                values: first.data.len(),
            });
        }
        for (di, dataset) in self.datasets.iter().enumerate() {
            for (i, v) in dataset.data.iter().enumerate() {
                if !v.is_finite() {
                    return Err(ChartError::NonFiniteValue {
                        dataset: di,
                        index: i,
                    });
                }
            }
        }
        Ok(())
    }

    /// The comparison series value at `i`: the second dataset's value when
    /// present, else the primary value.
    pub(crate) fn comparison_value(&self, i: usize) -> f64 {
        self.datasets
            .get(1)
            .and_then(|d| d.data.get(i))
            .copied()
            .unwrap_or(self.datasets[0].data[i])
    }

    /// The comparison value sequence, padded from the primary series.
    pub(crate) fn comparison_data(&self) -> Vec<f64> {
        (0..self.datasets[0].data.len())
            .map(|i| self.comparison_value(i))
            .collect()
    }
}
