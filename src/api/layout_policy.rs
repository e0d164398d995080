use serde::{Deserialize, Serialize};

use crate::core::{DisplaySize, PlotArea, Point};
use crate::error::{ChartError, ChartResult};

use super::ChartLabels;

/// Fixed presentation geometry: canvas, margins and pixel offsets.
///
/// Every value here is in device pixels. The plot area is whatever the margins
/// leave of the display; the top margin grows only for a title/subtitle that
/// is actually present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPolicy {
    pub display: DisplaySize,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_top: f64,
    pub subtitle_margin: f64,
    pub title_margin: f64,
    /// Gap between the plot edge and the start of a tick.
    pub tick_gap_px: f64,
    pub major_tick_px: f64,
    pub minor_tick_px: f64,
    /// Distance from the plot edge to a numeric label, on top of the tick length.
    pub tick_label_gap_px: f64,
    pub legend_swatch_start_px: f64,
    pub legend_swatch_end_px: f64,
    pub legend_label_px: f64,
    pub legend_row_height_px: f64,
    pub title_offset_px: f64,
    pub subtitle_offset_px: f64,
    pub x_axis_label_offset_px: f64,
    pub y_axis_label_offset_px: f64,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            display: DisplaySize::new(800.0, 400.0),
            margin_left: 120.0,
            margin_right: 120.0,
            margin_bottom: 80.0,
            margin_top: 50.0,
            subtitle_margin: 10.0,
            title_margin: 20.0,
            tick_gap_px: 8.0,
            major_tick_px: 12.0,
            minor_tick_px: 6.0,
            tick_label_gap_px: 16.0,
            legend_swatch_start_px: 10.0,
            legend_swatch_end_px: 25.0,
            legend_label_px: 32.0,
            legend_row_height_px: 20.0,
            title_offset_px: 40.0,
            subtitle_offset_px: 20.0,
            x_axis_label_offset_px: 50.0,
            y_axis_label_offset_px: 80.0,
        }
    }
}

impl LayoutPolicy {
    /// Replaces the display size from a `[width, height]` component list.
    pub fn with_display_components(mut self, components: &[f64]) -> ChartResult<Self> {
        self.display = DisplaySize::from_components(components)?;
        Ok(self)
    }

    /// Top margin including the conditional title/subtitle space.
    #[must_use]
    pub fn top_margin(&self, labels: &ChartLabels) -> f64 {
        let mut top = self.margin_top;
        if labels.subtitle.is_some() {
            top += self.subtitle_margin;
        }
        if labels.title.is_some() {
            top += self.title_margin;
        }
        top
    }

    pub fn plot_area(&self, labels: &ChartLabels) -> ChartResult<PlotArea> {
        self.display.validate()?;

        let width = self.display.width - self.margin_left - self.margin_right;
        let height = self.display.height - self.margin_bottom - self.top_margin(labels);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(PlotArea::new(
            Point::new(width, -height),
            Point::new(self.margin_left, self.display.height - self.margin_bottom),
        ))
    }

    #[must_use]
    pub fn tick_length(&self, is_major: bool) -> f64 {
        if is_major {
            self.major_tick_px
        } else {
            self.minor_tick_px
        }
    }
}
