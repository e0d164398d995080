use crate::core::{PlotArea, Point};
use crate::render::{PathPrimitive, TextPrimitive, class_list};

use super::{ChartLabels, DENSITY_CURVE_CLASS, LayoutPolicy, LegendEntry};

/// Legend swatches and their text labels, one row per entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendPrimitives {
    pub swatches: Vec<PathPrimitive>,
    pub labels: Vec<TextPrimitive>,
}

/// Lays out legend rows from the top-right corner of the plot area downwards.
///
/// Swatches carry the series key plus the curve class so a series color rule
/// applies to both the curve and its swatch.
#[must_use]
pub fn build_legend(entries: &[LegendEntry], area: PlotArea, policy: &LayoutPolicy) -> LegendPrimitives {
    let corner = area.to_device_rounded(Point::new(1.0, 1.0));

    let mut out = LegendPrimitives::default();
    for (row, entry) in entries.iter().enumerate() {
        let dy = policy.legend_row_height_px * row as f64;
        out.swatches.push(PathPrimitive::segment(
            corner.nudge(policy.legend_swatch_start_px, dy),
            corner.nudge(policy.legend_swatch_end_px, dy),
            class_list(&[entry.key.as_str(), DENSITY_CURVE_CLASS]),
        ));
        out.labels.push(TextPrimitive::new(
            entry.label.as_str(),
            corner.nudge(policy.legend_label_px, dy),
            class_list(&["label-legend"]),
        ));
    }
    out
}

/// Title, subtitle and axis captions, in that order; absent ones are skipped.
#[must_use]
pub fn build_chart_texts(labels: &ChartLabels, area: PlotArea, policy: &LayoutPolicy) -> Vec<TextPrimitive> {
    let top_center = area.to_device_rounded(Point::new(0.5, 1.0));
    let bottom_center = area.to_device_rounded(Point::new(0.5, 0.0));
    let left_middle = area.to_device_rounded(Point::new(0.0, 0.5));

    let mut texts = Vec::new();
    if let Some(title) = &labels.title {
        texts.push(TextPrimitive::new(
            title.as_str(),
            top_center.nudge(0.0, -policy.title_offset_px),
            class_list(&["title"]),
        ));
    }
    if let Some(subtitle) = &labels.subtitle {
        texts.push(TextPrimitive::new(
            subtitle.as_str(),
            top_center.nudge(0.0, -policy.subtitle_offset_px),
            class_list(&["subtitle"]),
        ));
    }
    if let Some(x_axis) = &labels.x_axis {
        texts.push(TextPrimitive::new(
            x_axis.as_str(),
            bottom_center.nudge(0.0, policy.x_axis_label_offset_px),
            class_list(&["label-axis", "label-x"]),
        ));
    }
    if let Some(y_axis) = &labels.y_axis {
        texts.push(TextPrimitive::new(
            y_axis.as_str(),
            left_middle.nudge(-policy.y_axis_label_offset_px, 0.0),
            class_list(&["label-axis", "label-y", "label-vertical"]),
        ));
    }
    texts
}
