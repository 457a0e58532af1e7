use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::extensions::{MarkerKind, MarkerStyle};

/// Where X-axis labels are sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum XAxisLabelSource {
    /// Use each data point's own `x_label`.
    #[default]
    DataPoints,
    /// Use a label array supplied by the host alongside the chart.
    ChartData,
}

/// Where the host places the info panel for the touched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InfoBoxPlacement {
    /// Follows the touch location.
    #[default]
    Floating,
    /// Pinned to a fixed edge of the chart.
    Fixed,
    /// Rendered in the host's header area.
    Header,
}

/// Presentation knobs the interaction core consumes but never mutates.
///
/// The defaults here are how "default touch marker" reaches a controller:
/// injected at construction, not read from shared global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub marker: MarkerKind,
    pub extra_line_marker: MarkerKind,
    #[serde(default)]
    pub x_axis_label_source: XAxisLabelSource,
    #[serde(default)]
    pub info_box_placement: InfoBoxPlacement,
    /// Doughnut hole radius as a fraction of the outer radius; `0.0` for
    /// charts without a hole.
    #[serde(default)]
    pub hole_ratio: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::bar()
    }
}

impl ChartStyle {
    #[must_use]
    pub fn bar() -> Self {
        Self {
            marker: MarkerKind::Point,
            extra_line_marker: MarkerKind::Point,
            x_axis_label_source: XAxisLabelSource::default(),
            info_box_placement: InfoBoxPlacement::default(),
            hole_ratio: 0.0,
        }
    }

    #[must_use]
    pub fn ranged_bar() -> Self {
        Self {
            marker: MarkerKind::Range,
            ..Self::bar()
        }
    }

    #[must_use]
    pub fn pie() -> Self {
        Self {
            marker: MarkerKind::FullSector,
            ..Self::bar()
        }
    }

    #[must_use]
    pub fn doughnut(hole_ratio: f64) -> Self {
        Self {
            marker: MarkerKind::FullSector,
            hole_ratio,
            ..Self::bar()
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerKind) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_extra_line_marker(mut self, marker: MarkerKind) -> Self {
        self.extra_line_marker = marker;
        self
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        if !self.hole_ratio.is_finite() || !(0.0..1.0).contains(&self.hole_ratio) {
            return Err(ChartError::InvalidStyle(
                "hole_ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub(crate) fn marker_style(self) -> MarkerStyle {
        MarkerStyle {
            marker: self.marker,
            extra_line_marker: self.extra_line_marker,
        }
    }
}
