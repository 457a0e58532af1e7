use statchart::api::{ChartStyle, LegendEntry, LegendRegistry};
use statchart::core::{ChartKind, PieDataPoint, PieDataSet, PixelPoint};
use statchart::extensions::{MarkerDescriptor, MarkerKind};
use statchart::interaction::InfoViewState;
use statchart::resolve::ResolvedTouch;

#[test]
fn chart_style_round_trips_through_json() {
    let style = ChartStyle::doughnut(0.4);
    let json = serde_json::to_string(&style).expect("serialize");
    let restored: ChartStyle = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(style, restored);
}

#[test]
fn marker_descriptor_round_trips_through_json() {
    let marker = MarkerDescriptor {
        kind: MarkerKind::Range,
        location: PixelPoint::new(12.5, 80.0),
    };
    let json = serde_json::to_string(&marker).expect("serialize");
    let restored: MarkerDescriptor = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(marker, restored);
}

#[test]
fn resolved_touch_round_trips_through_json() {
    let touch = ResolvedTouch {
        index: 3,
        location: PixelPoint::new(150.0, 90.0),
        kind: ChartKind::ExtraLine,
        value: 7.25,
        description: Some("overlay".to_owned()),
        legend_tag: Some("avg-line".to_owned()),
    };
    let json = serde_json::to_string(&touch).expect("serialize");
    let restored: ResolvedTouch = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(touch, restored);
}

#[test]
fn pie_data_set_round_trips_with_computed_angles() {
    let data_set = PieDataSet::new(vec![
        PieDataPoint::new(2.0).with_legend_tag("north"),
        PieDataPoint::new(6.0),
    ])
    .with_computed_angles()
    .expect("partition");

    let json = serde_json::to_string(&data_set).expect("serialize");
    let restored: PieDataSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(data_set, restored);
    restored.validate_partition().expect("partition survives");
}

#[test]
fn legend_registry_round_trips_in_order() {
    let mut legends = LegendRegistry::new();
    legends.register(
        "Sales",
        LegendEntry {
            title: "Sales".to_owned(),
            chart_kind: ChartKind::Bar,
        },
    );
    legends.register(
        "avg-line",
        LegendEntry {
            title: "avg-line".to_owned(),
            chart_kind: ChartKind::ExtraLine,
        },
    );

    let json = serde_json::to_string(&legends).expect("serialize");
    let restored: LegendRegistry = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(legends, restored);
    let tags: Vec<&str> = restored.iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, vec!["Sales", "avg-line"]);
}

#[test]
fn idle_info_view_state_is_default() {
    let state = InfoViewState::default();
    assert!(!state.is_touch_current());

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: InfoViewState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(state, restored);
}
