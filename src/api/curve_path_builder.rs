use tracing::trace;

use crate::core::{DensityCurveParams, PlotArea, SeriesSet, build_density_curves};
use crate::error::ChartResult;
use crate::render::{PathPrimitive, class_list};

pub const DENSITY_CURVE_CLASS: &str = "density-curve";

/// One device-space polyline per series, in series order.
///
/// Curve points are not snapped to whole pixels.
pub fn build_curve_paths(
    series: &SeriesSet,
    params: DensityCurveParams,
    area: PlotArea,
) -> ChartResult<Vec<PathPrimitive>> {
    let curves = build_density_curves(series, params)?;

    let mut paths = Vec::with_capacity(curves.len());
    for curve in curves {
        trace!(series = %curve.name, points = curve.points.len(), "density curve");
        let points = curve
            .points
            .into_iter()
            .map(|point| area.to_device(point))
            .collect();
        paths.push(PathPrimitive::new(
            points,
            class_list(&[curve.name.as_str(), DENSITY_CURVE_CLASS]),
        )?);
    }
    Ok(paths)
}
