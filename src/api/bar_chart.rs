use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::api::legend::{LegendEntry, LegendRegistry};
use crate::api::style::ChartStyle;
use crate::core::{BarDataPoint, BarDataSet, ChartBounds, ChartKind, PixelPoint};
use crate::error::ChartResult;
use crate::extensions::{ExtraLineData, MarkerDescriptor, MarkerStyle, build_markers};
use crate::interaction::{InfoViewState, TouchChannel, TouchContext, TouchSubscriber};
use crate::resolve::{ResolvedTouch, linear_marker_location, resolve_linear};

/// Bar chart orchestrator.
///
/// Owns the dataset and routes raw pointer input into the resolver, the
/// marker builder and the touch channel, exposing read-only reactive state
/// for the rendering layer.
pub struct BarChartData {
    data_set: BarDataSet,
    style: ChartStyle,
    extra_line: Option<ExtraLineData>,
    channel: TouchChannel,
    legends: LegendRegistry,
    info: InfoViewState,
    marker_data: Vec<MarkerDescriptor>,
    touch_point_data: Vec<BarDataPoint>,
    highlighted_legend_tag: Option<String>,
}

impl BarChartData {
    pub fn new(data_set: BarDataSet, style: ChartStyle) -> ChartResult<Self> {
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
    pub fn data_set(&self) -> &BarDataSet {
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
    pub fn current_info_points(&self) -> &[BarDataPoint] {
        &self.touch_point_data
    }

    #[must_use]
    pub fn highlighted_legend_tag(&self) -> Option<&str> {
        self.highlighted_legend_tag.as_deref()
    }

    /// Replaces the dataset. Any in-flight gesture state is dropped so a
    /// previously resolved index can never outlive the data it pointed into.
    pub fn set_data_set(&mut self, data_set: BarDataSet) {
        debug!(count = data_set.points.len(), "replace bar dataset");
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
    /// Observers treat `is_touch_current == false` as "no marker".
    pub fn touch_did_finish(&mut self) {
        self.clear_touch_state();
    }

    /// Mean of all bar values; `0.0` for an empty dataset.
    #[must_use]
    pub fn average(&self) -> f64 {
        let count = self.data_set.points.len();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self.data_set.points.iter().map(|point| point.value).sum();
        sum / count as f64
    }

    fn process_touch_interaction(&mut self, touch_location: PixelPoint, chart_bounds: ChartBounds) {
        let count = self.data_set.points.len();
        let Some(index) = resolve_linear(touch_location, chart_bounds, count) else {
            trace!(x = touch_location.x, "bar touch outside plotted range");
            return;
        };

        let point = &self.data_set.points[index];
        let span = self.data_set.value_span();
        let location =
            linear_marker_location(index, count, chart_bounds, span.normalized(point.value));

        let mut touches: SmallVec<[ResolvedTouch; 2]> = SmallVec::new();
        touches.push(ResolvedTouch {
            index,
            location,
            kind: ChartKind::Bar,
            value: point.value,
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
                ChartKind::ExtraLine => BarDataPoint {
                    value: touch.value,
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
            chart_kind: ChartKind::Bar,
            bounds: chart_bounds,
            points_len: self.data_set.points.len(),
        };
        self.channel.publish(touches, context);
    }

    fn marker_style(&self) -> MarkerStyle {
        let mut style = self.style.marker_style();
        // The overlay's own marker configuration takes precedence for
        // extra-line touches.
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
                    chart_kind: ChartKind::Bar,
                },
            );
        }
        for point in &self.data_set.points {
            if let Some(tag) = &point.legend_tag {
                self.legends.register(
                    tag.clone(),
                    LegendEntry {
                        title: tag.clone(),
                        chart_kind: ChartKind::Bar,
                    },
                );
            }
        }
    }
}
