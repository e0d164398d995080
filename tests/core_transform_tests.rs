use density_chart::api::{ChartLabels, LayoutPolicy};
use density_chart::core::{AxisTransform, DisplaySize, PlotArea, Point};
use density_chart::error::ChartError;

#[test]
fn transform_scales_then_offsets_each_axis() {
    let transform = AxisTransform::new(Point::new(560.0, -270.0), Point::new(120.0, 320.0));
    assert_eq!(transform.apply(Point::new(0.0, 0.0)), Point::new(120.0, 320.0));
    assert_eq!(transform.apply(Point::new(1.0, 1.0)), Point::new(680.0, 50.0));
    assert_eq!(transform.apply(Point::new(0.5, 0.5)), Point::new(400.0, 185.0));
}

#[test]
fn nudge_is_a_unit_scale_translation() {
    let point = Point::new(148.0, 320.0).nudge(0.5, -1.0);
    assert_eq!(point, Point::new(148.5, 319.0));
}

#[test]
fn rounding_snaps_ties_to_even() {
    assert_eq!(Point::new(0.5, 1.5).rounded(), Point::new(0.0, 2.0));
    assert_eq!(Point::new(2.4, -2.6).rounded(), Point::new(2.0, -3.0));
}

#[test]
fn default_plot_area_leaves_margins_around_the_plot() {
    let area = LayoutPolicy::default()
        .plot_area(&ChartLabels::default())
        .expect("plot area");
    assert_eq!(area, PlotArea::new(Point::new(560.0, -270.0), Point::new(120.0, 320.0)));
    assert_eq!(area.width(), 560.0);
    assert_eq!(area.height(), 270.0);
}

#[test]
fn display_size_requires_exactly_two_components() {
    let err = DisplaySize::from_components(&[800.0]).expect_err("one component");
    assert!(matches!(err, ChartError::InvalidDisplayComponents { count: 1 }));

    let err = DisplaySize::from_components(&[800.0, 400.0, 1.0]).expect_err("three components");
    assert!(matches!(err, ChartError::InvalidDisplayComponents { count: 3 }));

    let size = DisplaySize::from_components(&[640.0, 480.0]).expect("two components");
    assert_eq!(size, DisplaySize::new(640.0, 480.0));
}

#[test]
fn display_too_small_for_margins_is_rejected() {
    let policy = LayoutPolicy::default()
        .with_display_components(&[200.0, 100.0])
        .expect("valid display");
    let err = policy
        .plot_area(&ChartLabels::default())
        .expect_err("margins exceed display");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}
