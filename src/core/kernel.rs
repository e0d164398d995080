use std::f64::consts::TAU;

use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};

/// Gaussian kernel with a fixed bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    bandwidth: f64,
    coefficient: f64,
}

impl GaussianKernel {
    pub fn new(bandwidth: f64) -> ChartResult<Self> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(ChartError::InvalidData(
                "kernel bandwidth must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            bandwidth,
            coefficient: 1.0 / (bandwidth * TAU.sqrt()),
        })
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    /// `1/(w*sqrt(2*pi)) * exp(-0.5 * ((x - center)/w)^2)`
    #[must_use]
    pub fn evaluate(self, x: f64, center: f64) -> f64 {
        let z = (x - center) / self.bandwidth;
        self.coefficient * (-0.5 * z * z).exp()
    }
}

/// Kernel density estimate over one sample set, in normalized x space.
///
/// The output is scaled by `1 / (bins * sample_count)`. That is a vertical-scale
/// knob tied to `bins`, not a unit-area normalization: curves rendered with the
/// same `bins` are comparable with each other, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelDensityEstimator {
    kernel: GaussianKernel,
    centers: Vec<f64>,
    scale: f64,
}

impl KernelDensityEstimator {
    /// Builds an estimator whose bandwidth is `smoothing / bins`.
    pub fn new(samples: &[f64], x_range: AxisRange, bins: u32, smoothing: f64) -> ChartResult<Self> {
        if bins == 0 {
            return Err(ChartError::InvalidData("bins must be > 0".to_owned()));
        }
        if samples.is_empty() {
            return Err(ChartError::InvalidData(
                "density estimate needs at least one sample".to_owned(),
            ));
        }
        if samples.iter().any(|sample| !sample.is_finite()) {
            return Err(ChartError::InvalidData(
                "samples must be finite".to_owned(),
            ));
        }
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(ChartError::InvalidData(
                "smoothing must be finite and > 0".to_owned(),
            ));
        }
        let x_range = x_range.validate('x')?;

        let bins = f64::from(bins);
        let kernel = GaussianKernel::new(smoothing / bins)?;
        let centers = samples
            .iter()
            .map(|&sample| x_range.normalize(sample))
            .collect::<Vec<_>>();
        let scale = 1.0 / (bins * centers.len() as f64);

        Ok(Self {
            kernel,
            centers,
            scale,
        })
    }

    #[must_use]
    pub fn kernel(&self) -> GaussianKernel {
        self.kernel
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.centers.len()
    }

    /// Estimated density at normalized position `x`.
    #[must_use]
    pub fn estimate(&self, x: f64) -> f64 {
        let sum: f64 = self
            .centers
            .iter()
            .map(|&center| self.kernel.evaluate(x, center))
            .sum();
        sum * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::GaussianKernel;

    #[test]
    fn kernel_peaks_at_center() {
        let kernel = GaussianKernel::new(0.25).expect("valid kernel");
        let peak = kernel.evaluate(0.5, 0.5);
        assert!(peak > kernel.evaluate(0.6, 0.5));
        assert!(peak > kernel.evaluate(0.4, 0.5));
    }

    #[test]
    fn kernel_is_symmetric_around_center() {
        let kernel = GaussianKernel::new(0.1).expect("valid kernel");
        let left = kernel.evaluate(0.3, 0.5);
        let right = kernel.evaluate(0.7, 0.5);
        assert!((left - right).abs() <= 1e-15);
    }

    #[test]
    fn zero_bandwidth_is_rejected() {
        assert!(GaussianKernel::new(0.0).is_err());
        assert!(GaussianKernel::new(f64::NAN).is_err());
    }
}
