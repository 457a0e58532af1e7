use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, PixelPoint, ValueSpan};
use crate::extensions::MarkerKind;

/// One sample on an overlay line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLinePoint {
    pub value: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl ExtraLinePoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Styling the overlay carries for its own touch markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtraLineStyle {
    pub marker: MarkerKind,
}

/// Overlay line merged into a host chart's interaction stream.
///
/// The host controller queries it per gesture sample; it never owns or
/// back-references the host dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLineData {
    pub points: Vec<ExtraLinePoint>,
    pub legend_tag: String,
    pub style: ExtraLineStyle,
}

/// Result of querying the overlay for the sample nearest a touch.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraLineSample {
    pub index: usize,
    pub location: PixelPoint,
    pub value: f64,
    pub description: Option<String>,
    pub legend_tag: String,
}

impl ExtraLineData {
    #[must_use]
    pub fn new(points: Vec<ExtraLinePoint>, legend_tag: impl Into<String>) -> Self {
        Self {
            points,
            legend_tag: legend_tag.into(),
            style: ExtraLineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ExtraLineStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the overlay sample nearest the touch by horizontal distance,
    /// with its pixel anchor inside `bounds`. `None` when the overlay is
    /// empty or the bounds are unusable.
    #[must_use]
    pub fn point_and_location(
        &self,
        touch: PixelPoint,
        bounds: ChartBounds,
    ) -> Option<ExtraLineSample> {
        if !bounds.is_valid() || !touch.x.is_finite() {
            return None;
        }

        let section = bounds.width / self.points.len() as f64;
        let center_x = |index: usize| index as f64 * section + section / 2.0;
        let (index, point) = self
            .points
            .iter()
            .enumerate()
            .min_by_key(|(index, _)| OrderedFloat((center_x(*index) - touch.x).abs()))?;

        let span = ValueSpan::from_values(self.points.iter().map(|point| point.value));
        let location = PixelPoint::new(
            center_x(index),
            bounds.height - span.normalized(point.value) * bounds.height,
        );
        Some(ExtraLineSample {
            index,
            location,
            value: point.value,
            description: point.description.clone(),
            legend_tag: self.legend_tag.clone(),
        })
    }
}
