use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, GridSpacing};

/// Optional chart text. Absent fields are omitted from the document and give
/// back their reserved margin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLabels {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
}

/// One legend row: the swatch takes the style of series `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
}

impl LegendEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Layout parameters for one density chart render.
///
/// This type is serializable so callers can keep chart setup next to their
/// data; every omitted field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityChartConfig {
    /// Estimator resolution and vertical scale; curves share a scale only at equal `bins`.
    pub bins: u32,
    /// Kernel bandwidth is `smoothing / bins` in normalized x units.
    pub smoothing: f64,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_grid: GridSpacing,
    pub y_grid: GridSpacing,
    pub labels: ChartLabels,
    pub legend: Vec<LegendEntry>,
    pub colors: IndexMap<String, String>,
}

impl Default for DensityChartConfig {
    fn default() -> Self {
        Self {
            bins: 40,
            smoothing: 1.0,
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
            x_grid: GridSpacing::default(),
            y_grid: GridSpacing::default(),
            labels: ChartLabels::default(),
            legend: Vec::new(),
            colors: IndexMap::new(),
        }
    }
}

impl DensityChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bins(mut self, bins: u32) -> Self {
        self.bins = bins;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, start: f64, end: f64) -> Self {
        self.x_range = AxisRange::new(start, end);
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, low: f64, high: f64) -> Self {
        self.y_range = AxisRange::new(low, high);
        self
    }

    /// Sets the major grid unit of both axes.
    #[must_use]
    pub fn with_major_spacing(mut self, x_major: f64, y_major: f64) -> Self {
        self.x_grid.major = x_major;
        self.y_grid.major = y_major;
        self
    }

    /// Sets how many minor steps make one major step on each axis.
    #[must_use]
    pub fn with_minor_subdivisions(mut self, x_minor: u32, y_minor: u32) -> Self {
        self.x_grid.minor_subdivisions = x_minor;
        self.y_grid.minor_subdivisions = y_minor;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.labels.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.labels.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.labels.x_axis = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.labels.y_axis = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_legend_entry(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.legend.push(LegendEntry::new(key, label));
        self
    }

    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(key.into(), color.into());
        self
    }
}
