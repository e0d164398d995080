use tracing::{debug, warn};

use crate::core::{DensityCurveParams, SeriesSet};
use crate::error::ChartResult;
use crate::render::{RenderFrame, StyleTheme, Stylesheet};

use super::validation::{validate_config, validate_series};
use super::{
    Axis, DensityChartConfig, LayoutPolicy, build_axis_primitives, build_chart_texts,
    build_curve_paths, build_legend,
};

/// Validates every input and materializes the complete frame.
///
/// Nothing is built until validation has passed, and any later failure
/// discards the partially built frame.
pub fn build_render_frame(
    series: &SeriesSet,
    config: &DensityChartConfig,
    policy: &LayoutPolicy,
    theme: &StyleTheme,
) -> ChartResult<RenderFrame> {
    validate_config(config)?;
    validate_series(series)?;
    theme.validate()?;
    let area = policy.plot_area(&config.labels)?;

    let params = DensityCurveParams {
        bins: config.bins,
        smoothing: config.smoothing,
        x_range: config.x_range,
        y_range: config.y_range,
    };
    debug!(
        series_count = series.len(),
        total_samples = series.total_sample_count(),
        bins = config.bins,
        resolution = params.resolution(),
        "build density frame"
    );
    warn_on_unmatched_keys(series, config);

    let stylesheet = Stylesheet::density_chart(theme).with_series_colors(&config.colors)?;
    let mut frame = RenderFrame::new(policy.display, stylesheet);

    let x_axis = build_axis_primitives(Axis::X, config.x_range, config.x_grid, area, policy)?;
    let y_axis = build_axis_primitives(Axis::Y, config.y_range, config.y_grid, area, policy)?;
    for axis in [x_axis, y_axis] {
        frame.grid_minor.extend(axis.grid_minor);
        frame.grid_major.extend(axis.grid_major);
        frame.ticks.extend(axis.ticks);
        frame.labels.extend(axis.labels);
    }

    frame.paths = build_curve_paths(series, params, area)?;

    let legend = build_legend(&config.legend, area, policy);
    frame.paths.extend(legend.swatches);
    frame.labels.extend(legend.labels);
    frame
        .labels
        .extend(build_chart_texts(&config.labels, area, policy));

    Ok(frame)
}

fn warn_on_unmatched_keys(series: &SeriesSet, config: &DensityChartConfig) {
    for entry in &config.legend {
        if !series.contains(&entry.key) {
            warn!(key = %entry.key, "legend entry has no matching series");
        }
    }
    for key in config.colors.keys() {
        if !series.contains(key) {
            warn!(key = %key, "color mapping has no matching series");
        }
    }
}
