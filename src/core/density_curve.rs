#[cfg(feature = "parallel-curves")]
use rayon::prelude::*;

use crate::core::{AxisRange, KernelDensityEstimator, Point, SeriesSet};
use crate::error::{ChartError, ChartResult};

/// Number of curve sample intervals per bin.
pub const CURVE_RESOLUTION_PER_BIN: u32 = 10;

/// Inputs shared by every curve of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityCurveParams {
    pub bins: u32,
    pub smoothing: f64,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl DensityCurveParams {
    /// Number of intervals across the x range; the curve has `resolution + 1` points.
    #[must_use]
    pub fn resolution(self) -> usize {
        (CURVE_RESOLUTION_PER_BIN as usize) * (self.bins as usize)
    }
}

/// Normalized polyline for one named series.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub name: String,
    pub points: Vec<Point>,
}

/// Samples the density estimate of one series across the x range.
///
/// `x` runs over `i / resolution` for `i in 0..=resolution`; `y` is the estimate
/// rescaled into the configured y range.
pub fn sample_density_curve(samples: &[f64], params: DensityCurveParams) -> ChartResult<Vec<Point>> {
    let y_range = params.y_range.validate('y')?;
    let estimator =
        KernelDensityEstimator::new(samples, params.x_range, params.bins, params.smoothing)?;

    let resolution = params.resolution();
    let steps = resolution as f64;
    Ok((0..=resolution)
        .map(|i| {
            let x = i as f64 / steps;
            Point::new(x, y_range.normalize(estimator.estimate(x)))
        })
        .collect())
}

/// Builds one curve per series, preserving series order.
pub fn build_density_curves(
    series: &SeriesSet,
    params: DensityCurveParams,
) -> ChartResult<Vec<DensityCurve>> {
    let entries: Vec<(&str, &[f64])> = series.iter().collect();

    #[cfg(feature = "parallel-curves")]
    {
        entries
            .par_iter()
            .map(|&(name, samples)| build_single_curve(name, samples, params))
            .collect()
    }

    #[cfg(not(feature = "parallel-curves"))]
    {
        let mut out = Vec::with_capacity(entries.len());
        for (name, samples) in entries {
            out.push(build_single_curve(name, samples, params)?);
        }
        Ok(out)
    }
}

fn build_single_curve(
    name: &str,
    samples: &[f64],
    params: DensityCurveParams,
) -> ChartResult<DensityCurve> {
    let points = sample_density_curve(samples, params).map_err(|err| match err {
        ChartError::InvalidData(message) => {
            ChartError::InvalidData(format!("series `{name}`: {message}"))
        }
        other => other,
    })?;
    Ok(DensityCurve {
        name: name.to_owned(),
        points,
    })
}
