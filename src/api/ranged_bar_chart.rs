use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::api::legend::{LegendEntry, LegendRegistry};
use crate::api::style::ChartStyle;
use crate::core::{ChartBounds, ChartKind, PixelPoint, RangedBarDataPoint, RangedBarDataSet};
use crate::error::ChartResult;
use crate::extensions::{ExtraLineData, MarkerDescriptor, MarkerStyle, build_markers};
use crate::interaction::{InfoViewState, TouchChannel, TouchContext, TouchSubscriber};
use crate::resolve::{ResolvedTouch, linear_marker_location, resolve_linear};

/// Ranged-bar chart orchestrator.
///
/// A touch resolves to the bar under the pointer; the marker anchors at the
/// bar's midpoint, normalized against the dataset's value envelope.
pub struct RangedBarChartData {
    data_set: RangedBarDataSet,
    style: ChartStyle,
    extra_line: Option<ExtraLineData>,
    channel: TouchChannel,
    legends: LegendRegistry,
    info: InfoViewState,
    marker_data: Vec<MarkerDescriptor>,
    touch_point_data: Vec<RangedBarDataPoint>,
    highlighted_legend_tag: Option<String>,
}

impl RangedBarChartData {
    pub fn new(data_set: RangedBarDataSet, style: ChartStyle) -> ChartResult<Self> {
        let style = style.validate()?;
        let mut controller = Self {
            data_set,
            style,
            extra_line: None,
            channel: TouchChannel::new(),
            legends: LegendRegistry::new(),
            info: InfoViewState::default(),
            marker_data: Vec::new(),
            touch_point_data: Vec::new(),
            highlighted_legend_tag: None,
        };
        controller.setup_legends();
        Ok(controller)
    }

    /// Attaches an overlay line whose nearest sample is merged into every
    /// published touch set, tagged `ChartKind::ExtraLine`.
    #[must_use]
    pub fn with_extra_line(mut self, extra_line: ExtraLineData) -> Self {
        self.legends.register(
            extra_line.legend_tag.clone(),
            LegendEntry {
                title: extra_line.legend_tag.clone(),
                chart_kind: ChartKind::ExtraLine,
            },
        );
        self.extra_line = Some(extra_line);
        self
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn TouchSubscriber>) {
        self.channel.subscribe(subscriber);
    }

    #[must_use]
    pub fn data_set(&self) -> &RangedBarDataSet {
        &self.data_set
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    #[must_use]
    pub fn legends(&self) -> &LegendRegistry {
        &self.legends
    }

    #[must_use]
    pub fn info_view(&self) -> InfoViewState {
        self.info
    }

    #[must_use]
    pub fn is_touch_current(&self) -> bool {
        self.info.is_touch_current()
    }

    #[must_use]
    pub fn current_markers(&self) -> &[MarkerDescriptor] {
        &self.marker_data
    }

    #[must_use]
    pub fn current_info_points(&self) -> &[RangedBarDataPoint] {
        &self.touch_point_data
    }

    #[must_use]
    pub fn highlighted_legend_tag(&self) -> Option<&str> {
        self.highlighted_legend_tag.as_deref()
    }

    /// Replaces the dataset and drops any in-flight gesture state so stale
    /// indices never survive the swap.
    pub fn set_data_set(&mut self, data_set: RangedBarDataSet) {
        debug!(count = data_set.points.len(), "replace ranged-bar dataset");
        self.data_set = data_set;
        self.clear_touch_state();
        self.legends = LegendRegistry::new();
        self.setup_legends();
        if let Some(extra_line) = &self.extra_line {
            self.legends.register(
                extra_line.legend_tag.clone(),
                LegendEntry {
                    title: extra_line.legend_tag.clone(),
                    chart_kind: ChartKind::ExtraLine,
                },
            );
        }
    }

    /// Records one gesture sample and resolves it against the dataset.
    pub fn set_touch_interaction(&mut self, touch_location: PixelPoint, chart_bounds: ChartBounds) {
        self.info.on_touch(touch_location, chart_bounds);
        self.process_touch_interaction(touch_location, chart_bounds);
    }

    /// Ends the gesture: clears transient state without publishing.
    pub fn touch_did_finish(&mut self) {
        self.clear_touch_state();
    }

    /// Mean of the per-point midpoints, which equals the mean of the upper
    /// and lower averages; `0.0` for an empty dataset.
    #[must_use]
    pub fn average(&self) -> f64 {
        let count = self.data_set.points.len();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self.data_set.points.iter().map(|point| point.midpoint()).sum();
        sum / count as f64
    }

    /// Y anchor for a bar at the given plot height; the same mapping the
    /// touch resolver uses for marker placement.
    #[must_use]
    pub fn bar_marker_y(&self, point: &RangedBarDataPoint, height: f64) -> f64 {
        let span = self.data_set.value_span();
        height - span.normalized(point.midpoint()) * height
    }

    fn process_touch_interaction(&mut self, touch_location: PixelPoint, chart_bounds: ChartBounds) {
        let count = self.data_set.points.len();
        let Some(index) = resolve_linear(touch_location, chart_bounds, count) else {
            trace!(x = touch_location.x, "ranged-bar touch outside plotted range");
            return;
        };

        let point = &self.data_set.points[index];
        let span = self.data_set.value_span();
        let location =
            linear_marker_location(index, count, chart_bounds, span.normalized(point.midpoint()));

        let mut touches: SmallVec<[ResolvedTouch; 2]> = SmallVec::new();
        touches.push(ResolvedTouch {
            index,
            location,
            kind: ChartKind::RangedBar,
            value: point.midpoint(),
            description: point.description.clone(),
            legend_tag: point.legend_tag.clone(),
        });
        if let Some(sample) = self
            .extra_line
            .as_ref()
            .and_then(|line| line.point_and_location(touch_location, chart_bounds))
        {
            touches.push(ResolvedTouch {
                index: sample.index,
                location: sample.location,
                kind: ChartKind::ExtraLine,
                value: sample.value,
                description: sample.description,
                legend_tag: Some(sample.legend_tag),
            });
        }

        self.publish(&touches, chart_bounds);
    }

    fn publish(&mut self, touches: &[ResolvedTouch], chart_bounds: ChartBounds) {
        self.marker_data = build_markers(touches, self.marker_style());
        self.touch_point_data = touches
            .iter()
            .map(|touch| match touch.kind {
                // Overlay points collapse to a zero-height range at the
                // sampled value.
                ChartKind::ExtraLine => RangedBarDataPoint {
                    lower_value: touch.value,
                    upper_value: touch.value,
                    x_label: None,
                    description: touch.description.clone(),
                    legend_tag: touch.legend_tag.clone(),
                },
                _ => self.data_set.points[touch.index].clone(),
            })
            .collect();
        self.highlighted_legend_tag = touches
            .iter()
            .find(|touch| touch.kind != ChartKind::ExtraLine)
            .and_then(|touch| touch.legend_tag.clone());

        let context = TouchContext {
            chart_kind: ChartKind::RangedBar,
            bounds: chart_bounds,
            points_len: self.data_set.points.len(),
        };
        self.channel.publish(touches, context);
    }

    fn marker_style(&self) -> MarkerStyle {
        let mut style = self.style.marker_style();
        if let Some(extra_line) = &self.extra_line {
            style.extra_line_marker = extra_line.style.marker;
        }
        style
    }

    fn clear_touch_state(&mut self) {
        self.touch_point_data.clear();
        self.marker_data.clear();
        self.highlighted_legend_tag = None;
        self.info.on_touch_finish();
    }

    fn setup_legends(&mut self) {
        if !self.data_set.legend_title.is_empty() {
            self.legends.register(
                self.data_set.legend_title.clone(),
                LegendEntry {
                    title: self.data_set.legend_title.clone(),
                    chart_kind: ChartKind::RangedBar,
                },
            );
        }
        for point in &self.data_set.points {
            if let Some(tag) = &point.legend_tag {
                self.legends.register(
                    tag.clone(),
                    LegendEntry {
                        title: tag.clone(),
                        chart_kind: ChartKind::RangedBar,
                    },
                );
            }
        }
    }
}
