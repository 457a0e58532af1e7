use tracing::{debug, trace};

use crate::api::legend::{LegendEntry, LegendRegistry};
use crate::api::style::ChartStyle;
use crate::core::{ChartBounds, ChartKind, PieDataPoint, PieDataSet, PixelPoint};
use crate::error::ChartResult;
use crate::extensions::{MarkerDescriptor, build_markers};
use crate::interaction::{InfoViewState, TouchChannel, TouchContext, TouchSubscriber};
use crate::resolve::{ResolvedTouch, SectorGeometry, resolve_sector};

/// Shared orchestration for the radial chart variants; pie and doughnut
/// differ only in kind tag and hole geometry.
struct RadialChartData {
    kind: ChartKind,
    data_set: PieDataSet,
    style: ChartStyle,
    geometry: SectorGeometry,
    channel: TouchChannel,
    legends: LegendRegistry,
    info: InfoViewState,
    marker_data: Vec<MarkerDescriptor>,
    touch_point_data: Vec<PieDataPoint>,
    highlighted_legend_tag: Option<String>,
}

impl RadialChartData {
    fn new(kind: ChartKind, data_set: PieDataSet, style: ChartStyle) -> ChartResult<Self> {
        let style = style.validate()?;
        data_set.validate_partition()?;
        let geometry = SectorGeometry::doughnut(style.hole_ratio);
        let mut controller = Self {
            kind,
            data_set,
            style,
            geometry,
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

    fn set_data_set(&mut self, data_set: PieDataSet) -> ChartResult<()> {
        data_set.validate_partition()?;
        debug!(count = data_set.points.len(), "replace sector dataset");
        self.data_set = data_set;
        self.clear_touch_state();
        self.legends = LegendRegistry::new();
        self.setup_legends();
        Ok(())
    }

    fn set_touch_interaction(&mut self, touch_location: PixelPoint, chart_bounds: ChartBounds) {
        self.info.on_touch(touch_location, chart_bounds);
        self.process_touch_interaction(touch_location, chart_bounds);
    }

    fn process_touch_interaction(&mut self, touch_location: PixelPoint, chart_bounds: ChartBounds) {
        let Some(index) = resolve_sector(
            touch_location,
            chart_bounds,
            &self.data_set.points,
            self.geometry,
        ) else {
            trace!(
                x = touch_location.x,
                y = touch_location.y,
                "touch outside any sector"
            );
            return;
        };

        let point = &self.data_set.points[index];
        // Full-sector markers have no single anchor point; the chart center
        // stands in as the descriptor location.
        let touches = [ResolvedTouch {
            index,
            location: chart_bounds.center(),
            kind: self.kind,
            value: point.value,
            description: point.description.clone(),
            legend_tag: point.legend_tag.clone(),
        }];

        self.marker_data = build_markers(&touches, self.style.marker_style());
        self.touch_point_data = vec![self.data_set.points[index].clone()];
        self.highlighted_legend_tag = touches[0].legend_tag.clone();

        let context = TouchContext {
            chart_kind: self.kind,
            bounds: chart_bounds,
            points_len: self.data_set.points.len(),
        };
        self.channel.publish(&touches, context);
    }

    fn touch_did_finish(&mut self) {
        self.clear_touch_state();
    }

    fn clear_touch_state(&mut self) {
        self.touch_point_data.clear();
        self.marker_data.clear();
        self.highlighted_legend_tag = None;
        self.info.on_touch_finish();
    }

    fn average(&self) -> f64 {
        let count = self.data_set.points.len();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self.data_set.points.iter().map(|point| point.value).sum();
        sum / count as f64
    }

    fn setup_legends(&mut self) {
        if !self.data_set.legend_title.is_empty() {
            self.legends.register(
                self.data_set.legend_title.clone(),
                LegendEntry {
                    title: self.data_set.legend_title.clone(),
                    chart_kind: self.kind,
                },
            );
        }
        for point in &self.data_set.points {
            if let Some(tag) = &point.legend_tag {
                self.legends.register(
                    tag.clone(),
                    LegendEntry {
                        title: tag.clone(),
                        chart_kind: self.kind,
                    },
                );
            }
        }
    }
}

macro_rules! radial_chart_surface {
    () => {
        pub fn subscribe(&mut self, subscriber: Box<dyn TouchSubscriber>) {
            self.radial.channel.subscribe(subscriber);
        }

        #[must_use]
        pub fn data_set(&self) -> &PieDataSet {
            &self.radial.data_set
        }

        #[must_use]
        pub fn style(&self) -> ChartStyle {
            self.radial.style
        }

        #[must_use]
        pub fn legends(&self) -> &LegendRegistry {
            &self.radial.legends
        }

        #[must_use]
        pub fn info_view(&self) -> InfoViewState {
            self.radial.info
        }

        #[must_use]
        pub fn is_touch_current(&self) -> bool {
            self.radial.info.is_touch_current()
        }

        #[must_use]
        pub fn current_markers(&self) -> &[MarkerDescriptor] {
            &self.radial.marker_data
        }

        #[must_use]
        pub fn current_info_points(&self) -> &[PieDataPoint] {
            &self.radial.touch_point_data
        }

        #[must_use]
        pub fn highlighted_legend_tag(&self) -> Option<&str> {
            self.radial.highlighted_legend_tag.as_deref()
        }

        /// Replaces the dataset after checking the sector-partition
        /// invariant; any in-flight gesture state is dropped.
        pub fn set_data_set(&mut self, data_set: PieDataSet) -> ChartResult<()> {
            self.radial.set_data_set(data_set)
        }

        /// Records one gesture sample and resolves it to a sector.
        pub fn set_touch_interaction(
            &mut self,
            touch_location: PixelPoint,
            chart_bounds: ChartBounds,
        ) {
            self.radial.set_touch_interaction(touch_location, chart_bounds);
        }

        /// Ends the gesture: clears transient state without publishing.
        pub fn touch_did_finish(&mut self) {
            self.radial.touch_did_finish();
        }

        /// Mean of all sector values; `0.0` for an empty dataset.
        #[must_use]
        pub fn average(&self) -> f64 {
            self.radial.average()
        }
    };
}

/// Pie chart orchestrator.
pub struct PieChartData {
    radial: RadialChartData,
}

impl PieChartData {
    /// The dataset must satisfy the sector-partition invariant
    /// (see [`PieDataSet::validate_partition`]).
    pub fn new(data_set: PieDataSet, style: ChartStyle) -> ChartResult<Self> {
        Ok(Self {
            radial: RadialChartData::new(ChartKind::Pie, data_set, style)?,
        })
    }

    radial_chart_surface!();
}

/// Doughnut chart orchestrator.
///
/// Identical to [`PieChartData`] except that `style.hole_ratio` excludes the
/// inner disc from touch resolution.
pub struct DoughnutChartData {
    radial: RadialChartData,
}

impl DoughnutChartData {
    pub fn new(data_set: PieDataSet, style: ChartStyle) -> ChartResult<Self> {
        Ok(Self {
            radial: RadialChartData::new(ChartKind::Doughnut, data_set, style)?,
        })
    }

    radial_chart_surface!();
}
