use density_chart::api::{
    ChartLabels, LayoutPolicy, LegendEntry, build_chart_texts, build_legend,
};
use density_chart::core::Point;

fn labels(title: bool, subtitle: bool) -> ChartLabels {
    ChartLabels {
        title: title.then(|| "Title".to_owned()),
        subtitle: subtitle.then(|| "Subtitle".to_owned()),
        ..ChartLabels::default()
    }
}

#[test]
fn top_margin_grows_only_for_present_titles() {
    let policy = LayoutPolicy::default();
    let both = policy.top_margin(&labels(true, true));
    assert_eq!(both, 80.0);
    assert_eq!(both - policy.top_margin(&labels(true, false)), 10.0);
    assert_eq!(both - policy.top_margin(&labels(false, true)), 20.0);
    assert_eq!(both - policy.top_margin(&labels(false, false)), 30.0);
}

#[test]
fn plot_area_shrinks_by_the_title_margins() {
    let policy = LayoutPolicy::default();
    let bare = policy.plot_area(&labels(false, false)).expect("area");
    let titled = policy.plot_area(&labels(true, true)).expect("area");
    assert_eq!(bare.height() - titled.height(), 30.0);
    assert_eq!(bare.origin, titled.origin);
}

#[test]
fn legend_rows_stack_right_of_the_plot() {
    let policy = LayoutPolicy::default();
    let area = policy.plot_area(&ChartLabels::default()).expect("area");
    let entries = vec![LegendEntry::new("a", "Series A"), LegendEntry::new("b", "Series B")];

    let legend = build_legend(&entries, area, &policy);
    assert_eq!(legend.swatches.len(), 2);
    assert_eq!(legend.labels.len(), 2);

    assert_eq!(
        legend.swatches[0].points(),
        &[Point::new(690.0, 50.0), Point::new(705.0, 50.0)]
    );
    assert_eq!(
        legend.swatches[1].points(),
        &[Point::new(690.0, 70.0), Point::new(705.0, 70.0)]
    );
    assert_eq!(legend.swatches[1].classes(), ["b", "density-curve"]);
    assert_eq!(legend.labels[1].text, "Series B");
    assert_eq!(legend.labels[1].anchor, Point::new(712.0, 70.0));
    assert!(legend.labels[0].has_class("label-legend"));
}

#[test]
fn empty_legend_emits_nothing() {
    let policy = LayoutPolicy::default();
    let area = policy.plot_area(&ChartLabels::default()).expect("area");
    let legend = build_legend(&[], area, &policy);
    assert!(legend.swatches.is_empty());
    assert!(legend.labels.is_empty());
}

#[test]
fn chart_texts_are_placed_around_the_plot() {
    let policy = LayoutPolicy::default();
    let labels = ChartLabels {
        title: Some("Title".to_owned()),
        subtitle: Some("Subtitle".to_owned()),
        x_axis: Some("x".to_owned()),
        y_axis: Some("y".to_owned()),
    };
    let area = policy.plot_area(&labels).expect("area");
    let texts = build_chart_texts(&labels, area, &policy);

    let order: Vec<&str> = texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(order, vec!["Title", "Subtitle", "x", "y"]);

    // Plot spans y 80..320 once both titles reserve their margin.
    assert_eq!(texts[0].anchor, Point::new(400.0, 40.0));
    assert_eq!(texts[1].anchor, Point::new(400.0, 60.0));
    assert_eq!(texts[2].anchor, Point::new(400.0, 370.0));
    assert_eq!(texts[3].anchor, Point::new(40.0, 200.0));
    assert!(texts[3].has_class("label-vertical"));
    assert!(texts[2].has_class("label-axis"));
}

#[test]
fn absent_texts_are_omitted() {
    let policy = LayoutPolicy::default();
    let labels = ChartLabels {
        x_axis: Some("value".to_owned()),
        ..ChartLabels::default()
    };
    let area = policy.plot_area(&labels).expect("area");
    let texts = build_chart_texts(&labels, area, &policy);
    assert_eq!(texts.len(), 1);
    assert!(texts[0].has_class("label-x"));
}
