use density_chart::api::{DensityChartConfig, render_svg};
use density_chart::core::{
    AxisRange, GridSpacing, KernelDensityEstimator, SeriesSet, axis_steps, grid_cell_count,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_sample_estimate_decreases_away_from_sample(
        sample in 0.0f64..1.0,
        bins in 1u32..80,
        smoothing in 0.05f64..4.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let estimator = KernelDensityEstimator::new(
            &[sample],
            AxisRange::new(0.0, 1.0),
            bins,
            smoothing,
        ).expect("estimator");

        let (near, far) = if (a - sample).abs() <= (b - sample).abs() { (a, b) } else { (b, a) };
        prop_assert!(estimator.estimate(sample) >= estimator.estimate(near));
        prop_assert!(estimator.estimate(near) >= estimator.estimate(far));
        prop_assert!(estimator.estimate(far) >= 0.0);
    }

    #[test]
    fn whole_cell_spans_yield_exact_step_counts(
        cells in 1u32..40,
        minor in 1u32..8,
        major in prop::sample::select(vec![0.01, 0.1, 0.2, 0.25, 0.5, 1.0, 2.5, 10.0]),
    ) {
        let range = AxisRange::new(0.0, f64::from(cells) * major);
        let spacing = GridSpacing::new(major, minor);
        prop_assert_eq!(grid_cell_count(range, spacing), (cells * minor) as usize);

        let steps = axis_steps(range, spacing, 'x').expect("steps");
        prop_assert_eq!(steps.len(), (cells * minor + 1) as usize);
        let majors = steps.iter().filter(|s| s.is_major).count();
        prop_assert_eq!(majors, (cells + 1) as usize);
    }

    #[test]
    fn render_is_deterministic_and_fixed_size(
        a in proptest::collection::vec(-0.5f64..1.5, 1..24),
        b in proptest::collection::vec(-0.5f64..1.5, 1..24),
        bins in 1u32..30,
    ) {
        let series = SeriesSet::new().with_series("a", a).with_series("b", b);
        let config = DensityChartConfig::new()
            .with_bins(bins)
            .with_y_range(0.0, 2.0)
            .with_legend_entry("a", "A");
        let first = render_svg(&series, &config).expect("render");
        let second = render_svg(&series, &config).expect("render");
        prop_assert_eq!(&first, &second);
        prop_assert!(first.contains(r#"width="800" height="400" viewBox="0 0 800 400""#));
        prop_assert_eq!(first.matches(r#"class="label-legend""#).count(), 1);
    }
}
