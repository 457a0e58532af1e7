use approx::assert_relative_eq;
use statchart::core::{
    ChartBounds, PixelPoint, RangedBarDataPoint, RangedBarDataSet, ValueSpan,
};
use statchart::extensions::MarkerKind;
use statchart::resolve::{linear_marker_location, resolve_linear};
use statchart::{ChartStyle, RangedBarChartData};

#[test]
fn four_bars_width_400_bucket_x150_to_index_1() {
    let bounds = ChartBounds::new(400.0, 200.0);
    let resolved = resolve_linear(PixelPoint::new(150.0, 50.0), bounds, 4);
    assert_eq!(resolved, Some(1));
}

#[test]
fn right_edge_resolves_to_nothing() {
    let bounds = ChartBounds::new(300.0, 200.0);
    // floor(300 / 100) == 3, one past the last bar.
    assert_eq!(resolve_linear(PixelPoint::new(300.0, 50.0), bounds, 3), None);
}

#[test]
fn negative_x_resolves_to_nothing() {
    let bounds = ChartBounds::new(300.0, 200.0);
    assert_eq!(resolve_linear(PixelPoint::new(-0.5, 50.0), bounds, 3), None);
}

#[test]
fn empty_dataset_resolves_to_nothing() {
    let bounds = ChartBounds::new(300.0, 200.0);
    assert_eq!(resolve_linear(PixelPoint::new(10.0, 50.0), bounds, 0), None);
}

#[test]
fn invalid_bounds_resolve_to_nothing() {
    let bounds = ChartBounds::new(0.0, 200.0);
    assert_eq!(resolve_linear(PixelPoint::new(10.0, 50.0), bounds, 3), None);
}

#[test]
fn every_section_buckets_to_its_own_index() {
    let bounds = ChartBounds::new(500.0, 200.0);
    for index in 0..5 {
        let x = index as f64 * 100.0 + 50.0;
        assert_eq!(resolve_linear(PixelPoint::new(x, 0.0), bounds, 5), Some(index));
    }
}

#[test]
fn marker_anchors_at_section_center() {
    let bounds = ChartBounds::new(400.0, 200.0);
    let location = linear_marker_location(1, 4, bounds, 0.25);
    assert_relative_eq!(location.x, 150.0);
    assert_relative_eq!(location.y, 150.0);
}

#[test]
fn degenerate_value_span_clamps_range_to_one() {
    let span = ValueSpan::from_bounds(5.0, 5.0);
    assert_relative_eq!(span.range, 1.0);
    assert_relative_eq!(span.normalized(5.0), 0.0);

    let empty = ValueSpan::from_values(std::iter::empty());
    assert_relative_eq!(empty.range, 1.0);
}

#[test]
fn ranged_bar_marker_anchors_at_normalized_midpoint() {
    // Envelope: min lower 0, max upper 10 => range 10.
    let data_set = RangedBarDataSet::new(vec![
        RangedBarDataPoint::new(2.0, 8.0),
        RangedBarDataPoint::new(0.0, 10.0),
    ]);
    let mut chart =
        RangedBarChartData::new(data_set, ChartStyle::ranged_bar()).expect("chart init");

    let bounds = ChartBounds::new(400.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(50.0, 120.0), bounds);

    let markers = chart.current_markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].kind, MarkerKind::Range);
    // Midpoint 5 in [0, 10] => y = 200 - (5/10) * 200 = 100; section center x = 100.
    assert_relative_eq!(markers[0].location.y, 100.0);
    assert_relative_eq!(markers[0].location.x, 100.0);
}

#[test]
fn bar_marker_y_matches_touch_marker_mapping() {
    let data_set = RangedBarDataSet::new(vec![
        RangedBarDataPoint::new(2.0, 8.0),
        RangedBarDataPoint::new(0.0, 10.0),
    ]);
    let chart = RangedBarChartData::new(data_set, ChartStyle::ranged_bar()).expect("chart init");

    let point = chart.data_set().points[0].clone();
    assert_relative_eq!(chart.bar_marker_y(&point, 200.0), 100.0);
}
