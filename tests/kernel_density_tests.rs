use approx::{assert_abs_diff_eq, assert_relative_eq};
use density_chart::core::{AxisRange, GaussianKernel, KernelDensityEstimator};

const INV_SQRT_TAU: f64 = 0.398_942_280_401_432_7;

#[test]
fn gaussian_kernel_matches_closed_form() {
    let kernel = GaussianKernel::new(0.5).expect("kernel");
    assert_relative_eq!(kernel.evaluate(0.0, 0.0), INV_SQRT_TAU / 0.5, max_relative = 1e-12);
    let expected = INV_SQRT_TAU / 0.5 * (-0.5f64 * 4.0).exp();
    assert_relative_eq!(kernel.evaluate(1.0, 0.0), expected, max_relative = 1e-12);
}

#[test]
fn bandwidth_is_smoothing_over_bins() {
    let estimator =
        KernelDensityEstimator::new(&[0.5], AxisRange::new(0.0, 1.0), 40, 2.0).expect("estimator");
    assert_abs_diff_eq!(estimator.kernel().bandwidth(), 0.05, epsilon = 1e-15);
}

#[test]
fn single_sample_peak_value() {
    let estimator =
        KernelDensityEstimator::new(&[0.5], AxisRange::new(0.0, 1.0), 1, 1.0).expect("estimator");
    assert_relative_eq!(estimator.estimate(0.5), INV_SQRT_TAU, max_relative = 1e-12);
}

#[test]
fn samples_are_normalized_over_the_x_range() {
    let raw = KernelDensityEstimator::new(&[15.0], AxisRange::new(10.0, 20.0), 8, 1.0)
        .expect("estimator");
    let unit = KernelDensityEstimator::new(&[0.5], AxisRange::new(0.0, 1.0), 8, 1.0)
        .expect("estimator");
    for x in [0.0, 0.25, 0.5, 0.9] {
        assert_relative_eq!(raw.estimate(x), unit.estimate(x), max_relative = 1e-12);
    }
}

#[test]
fn duplicated_samples_do_not_change_the_estimate() {
    let range = AxisRange::new(0.0, 1.0);
    let single = KernelDensityEstimator::new(&[0.3], range, 10, 1.0).expect("estimator");
    let tripled = KernelDensityEstimator::new(&[0.3, 0.3, 0.3], range, 10, 1.0).expect("estimator");
    assert_eq!(tripled.sample_count(), 3);
    for x in [0.0, 0.3, 0.42, 1.0] {
        assert_relative_eq!(single.estimate(x), tripled.estimate(x), max_relative = 1e-12);
    }
}

#[test]
fn sample_order_does_not_matter() {
    let range = AxisRange::new(0.0, 1.0);
    let forward = KernelDensityEstimator::new(&[0.1, 0.4, 0.8], range, 20, 1.5).expect("estimator");
    let backward = KernelDensityEstimator::new(&[0.8, 0.4, 0.1], range, 20, 1.5).expect("estimator");
    for x in [0.0, 0.2, 0.5, 0.77] {
        assert_relative_eq!(forward.estimate(x), backward.estimate(x), max_relative = 1e-12);
    }
}

#[test]
fn curve_area_is_one_over_bins_not_one() {
    let bins = 40;
    let estimator = KernelDensityEstimator::new(&[0.5], AxisRange::new(0.0, 1.0), bins, 1.0)
        .expect("estimator");

    let steps = 20_000;
    let dx = 1.0 / steps as f64;
    let area: f64 = (0..steps)
        .map(|i| {
            let left = i as f64 * dx;
            0.5 * (estimator.estimate(left) + estimator.estimate(left + dx)) * dx
        })
        .sum();

    assert_relative_eq!(area, 1.0 / f64::from(bins), max_relative = 1e-4);
}

#[test]
fn invalid_estimator_inputs_are_rejected() {
    let range = AxisRange::new(0.0, 1.0);
    assert!(KernelDensityEstimator::new(&[0.5], range, 0, 1.0).is_err());
    assert!(KernelDensityEstimator::new(&[0.5], range, 10, 0.0).is_err());
    assert!(KernelDensityEstimator::new(&[], range, 10, 1.0).is_err());
    assert!(KernelDensityEstimator::new(&[f64::INFINITY], range, 10, 1.0).is_err());
    assert!(KernelDensityEstimator::new(&[0.5], AxisRange::new(1.0, 1.0), 10, 1.0).is_err());
}
