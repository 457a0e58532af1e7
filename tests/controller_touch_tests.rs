use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use statchart::core::{
    BarDataPoint, BarDataSet, ChartBounds, ChartKind, PieDataPoint, PieDataSet, PixelPoint,
    RangedBarDataPoint, RangedBarDataSet,
};
use statchart::extensions::{ExtraLineData, ExtraLinePoint, ExtraLineStyle, MarkerKind};
use statchart::interaction::{TouchContext, TouchSubscriber};
use statchart::resolve::ResolvedTouch;
use statchart::{BarChartData, ChartError, ChartStyle, DoughnutChartData, PieChartData, RangedBarChartData};

type EventLog = Rc<RefCell<Vec<(String, usize, ChartKind)>>>;

struct RecordingSubscriber {
    id: String,
    log: EventLog,
}

impl RecordingSubscriber {
    fn boxed(id: &str, log: &EventLog) -> Box<Self> {
        Box::new(Self {
            id: id.to_owned(),
            log: Rc::clone(log),
        })
    }
}

impl TouchSubscriber for RecordingSubscriber {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_touch(&mut self, touches: &[ResolvedTouch], _context: TouchContext) {
        for touch in touches {
            self.log
                .borrow_mut()
                .push((self.id.clone(), touch.index, touch.kind));
        }
    }
}

fn three_bar_chart() -> BarChartData {
    let data_set = BarDataSet::new(vec![
        BarDataPoint::new(3.0).with_legend_tag("alpha"),
        BarDataPoint::new(6.0),
        BarDataPoint::new(9.0),
    ])
    .with_legend_title("Sales");
    BarChartData::new(data_set, ChartStyle::bar()).expect("chart init")
}

#[test]
fn gesture_end_clears_state_without_publishing() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut chart = three_bar_chart();
    chart.subscribe(RecordingSubscriber::boxed("markers", &log));

    let bounds = ChartBounds::new(300.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(150.0, 40.0), bounds);
    assert!(chart.is_touch_current());
    assert_eq!(chart.current_info_points().len(), 1);
    assert_eq!(chart.current_markers().len(), 1);
    let published = log.borrow().len();
    assert_eq!(published, 1);

    chart.touch_did_finish();
    assert!(!chart.is_touch_current());
    assert!(chart.current_info_points().is_empty());
    assert!(chart.current_markers().is_empty());
    assert!(chart.highlighted_legend_tag().is_none());
    // No event accompanies the transition back to idle.
    assert_eq!(log.borrow().len(), published);
}

#[test]
fn out_of_range_touch_publishes_nothing() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut chart = three_bar_chart();
    chart.subscribe(RecordingSubscriber::boxed("markers", &log));

    let bounds = ChartBounds::new(300.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(300.0, 40.0), bounds);
    assert!(log.borrow().is_empty());
    assert!(chart.current_markers().is_empty());
}

#[test]
fn subscribers_observe_events_in_subscription_order() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut chart = three_bar_chart();
    chart.subscribe(RecordingSubscriber::boxed("markers", &log));
    chart.subscribe(RecordingSubscriber::boxed("info-box", &log));

    let bounds = ChartBounds::new(300.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(50.0, 40.0), bounds);
    chart.set_touch_interaction(PixelPoint::new(250.0, 40.0), bounds);

    let observed: Vec<(String, usize)> = log
        .borrow()
        .iter()
        .map(|(id, index, _)| (id.clone(), *index))
        .collect();
    assert_eq!(
        observed,
        vec![
            ("markers".to_owned(), 0),
            ("info-box".to_owned(), 0),
            ("markers".to_owned(), 2),
            ("info-box".to_owned(), 2),
        ]
    );
}

#[test]
fn publishing_without_subscribers_still_updates_state() {
    let mut chart = three_bar_chart();
    let bounds = ChartBounds::new(300.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(50.0, 40.0), bounds);
    assert_eq!(chart.current_markers().len(), 1);
    assert_eq!(chart.highlighted_legend_tag(), Some("alpha"));
}

#[test]
fn dataset_replacement_clears_in_flight_touch_state() {
    let mut chart = three_bar_chart();
    let bounds = ChartBounds::new(300.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(250.0, 40.0), bounds);
    assert!(chart.is_touch_current());

    chart.set_data_set(BarDataSet::new(vec![BarDataPoint::new(1.0)]));
    assert!(!chart.is_touch_current());
    assert!(chart.current_info_points().is_empty());
    assert!(chart.current_markers().is_empty());

    // The next sample resolves against the fresh dataset.
    chart.set_touch_interaction(PixelPoint::new(250.0, 40.0), bounds);
    assert_eq!(chart.current_info_points().len(), 1);
    assert_relative_eq!(chart.current_info_points()[0].value, 1.0);
}

#[test]
fn average_of_empty_dataset_is_zero() {
    let bars = BarChartData::new(BarDataSet::default(), ChartStyle::bar()).expect("chart init");
    assert_relative_eq!(bars.average(), 0.0);

    let ranged = RangedBarChartData::new(RangedBarDataSet::default(), ChartStyle::ranged_bar())
        .expect("chart init");
    assert_relative_eq!(ranged.average(), 0.0);
}

#[test]
fn ranged_average_is_mean_of_midpoints() {
    let data_set = RangedBarDataSet::new(vec![
        RangedBarDataPoint::new(2.0, 8.0),
        RangedBarDataPoint::new(4.0, 6.0),
        RangedBarDataPoint::new(0.0, 10.0),
    ]);
    let chart = RangedBarChartData::new(data_set, ChartStyle::ranged_bar()).expect("chart init");
    assert_relative_eq!(chart.average(), 5.0);
}

#[test]
fn extra_line_sample_is_merged_and_tagged() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let data_set = RangedBarDataSet::new(vec![
        RangedBarDataPoint::new(2.0, 8.0).with_legend_tag("set-a"),
        RangedBarDataPoint::new(0.0, 10.0).with_legend_tag("set-a"),
    ]);
    let extra_line = ExtraLineData::new(
        vec![ExtraLinePoint::new(4.0), ExtraLinePoint::new(6.0)],
        "avg-line",
    )
    .with_style(ExtraLineStyle {
        marker: MarkerKind::Point,
    });
    let mut chart = RangedBarChartData::new(data_set, ChartStyle::ranged_bar())
        .expect("chart init")
        .with_extra_line(extra_line);
    chart.subscribe(RecordingSubscriber::boxed("markers", &log));

    let bounds = ChartBounds::new(400.0, 200.0);
    chart.set_touch_interaction(PixelPoint::new(50.0, 120.0), bounds);

    let observed = log.borrow();
    assert_eq!(observed.len(), 2);
    assert_eq!(observed[0].2, ChartKind::RangedBar);
    assert_eq!(observed[1].2, ChartKind::ExtraLine);

    // The overlay's own marker kind wins for its touch.
    let markers = chart.current_markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].kind, MarkerKind::Range);
    assert_eq!(markers[1].kind, MarkerKind::Point);

    // Info points snapshot both touches; the overlay sample collapses to a
    // zero-height range carrying the overlay's legend tag.
    let info = chart.current_info_points();
    assert_eq!(info.len(), 2);
    assert_relative_eq!(info[1].lower_value, info[1].upper_value);
    assert_eq!(info[1].legend_tag.as_deref(), Some("avg-line"));
    assert_eq!(chart.highlighted_legend_tag(), Some("set-a"));

    // The overlay also contributes a legend row.
    assert!(chart.legends().get("avg-line").is_some());
}

#[test]
fn unsubscribing_leaves_remaining_delivery_intact() {
    use statchart::interaction::TouchChannel;

    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut channel = TouchChannel::new();
    channel.subscribe(RecordingSubscriber::boxed("markers", &log));
    channel.subscribe(RecordingSubscriber::boxed("info-box", &log));
    assert_eq!(channel.subscriber_count(), 2);

    assert!(channel.unsubscribe("markers"));
    assert!(!channel.unsubscribe("markers"));

    let touches = [ResolvedTouch {
        index: 0,
        location: PixelPoint::new(1.0, 2.0),
        kind: ChartKind::Bar,
        value: 3.0,
        description: None,
        legend_tag: None,
    }];
    channel.publish(
        &touches,
        TouchContext {
            chart_kind: ChartKind::Bar,
            bounds: ChartBounds::new(100.0, 100.0),
            points_len: 1,
        },
    );
    let observed = log.borrow();
    assert_eq!(observed.len(), 1);
    assert_eq!(observed[0].0, "info-box");
}

#[test]
fn legend_registry_preserves_insertion_order() {
    let chart = three_bar_chart();
    let tags: Vec<&str> = chart.legends().iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, vec!["Sales", "alpha"]);
}

#[test]
fn pie_touch_resolves_full_sector_marker_at_center() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let data_set = PieDataSet::new(vec![
        PieDataPoint::new(1.0).with_legend_tag("east"),
        PieDataPoint::new(1.0).with_legend_tag("west"),
    ])
    .with_computed_angles()
    .expect("partition");
    let mut chart = PieChartData::new(data_set, ChartStyle::pie()).expect("chart init");
    chart.subscribe(RecordingSubscriber::boxed("markers", &log));

    let bounds = ChartBounds::new(200.0, 200.0);
    // Right of center: 90 degrees, inside the first half-circle sector.
    chart.set_touch_interaction(PixelPoint::new(150.0, 100.0), bounds);

    assert!(chart.is_touch_current());
    assert_eq!(log.borrow().as_slice(), &[("markers".to_owned(), 0, ChartKind::Pie)]);
    let markers = chart.current_markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].kind, MarkerKind::FullSector);
    assert_relative_eq!(markers[0].location.x, 100.0);
    assert_relative_eq!(markers[0].location.y, 100.0);
    assert_eq!(chart.highlighted_legend_tag(), Some("east"));

    chart.touch_did_finish();
    assert!(!chart.is_touch_current());
    assert!(chart.current_info_points().is_empty());
}

#[test]
fn doughnut_hole_touch_publishes_nothing() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let data_set = PieDataSet::new(vec![PieDataPoint::new(1.0), PieDataPoint::new(3.0)])
        .with_computed_angles()
        .expect("partition");
    let mut chart =
        DoughnutChartData::new(data_set, ChartStyle::doughnut(0.6)).expect("chart init");
    chart.subscribe(RecordingSubscriber::boxed("markers", &log));

    let bounds = ChartBounds::new(200.0, 200.0);
    // Radius 20 from center, well inside the 60-pixel hole.
    chart.set_touch_interaction(PixelPoint::new(120.0, 100.0), bounds);
    assert!(log.borrow().is_empty());
    assert!(chart.current_markers().is_empty());

    // On the ring, the same angle resolves.
    chart.set_touch_interaction(PixelPoint::new(180.0, 100.0), bounds);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn invalid_hole_ratio_is_rejected() {
    let data_set = PieDataSet::new(vec![PieDataPoint::new(1.0)])
        .with_computed_angles()
        .expect("partition");
    let result = DoughnutChartData::new(data_set, ChartStyle::doughnut(1.5));
    assert!(matches!(result, Err(ChartError::InvalidStyle(_))));
}

#[test]
fn broken_partition_is_rejected() {
    let mut data_set = PieDataSet::new(vec![PieDataPoint::new(1.0), PieDataPoint::new(1.0)])
        .with_computed_angles()
        .expect("partition");
    data_set.points[1].start_angle += 0.25;
    let result = PieChartData::new(data_set, ChartStyle::pie());
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}
