//! Pure geometry mapping a pointer coordinate to a data-point reference.
//!
//! Out-of-range input is never an error here: resolvers return `None` and the
//! caller publishes nothing, so a gesture degrades instead of failing.

use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, ChartKind, PieDataPoint, PixelPoint};

/// One resolved data-point reference for a single gesture sample.
///
/// `index` is a weak by-index reference into the dataset that produced it
/// (or into the overlay line for `ChartKind::ExtraLine`); it is discarded at
/// the next sample or at gesture end and never survives a dataset swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTouch {
    pub index: usize,
    pub location: PixelPoint,
    pub kind: ChartKind,
    pub value: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub legend_tag: Option<String>,
}

/// Buckets a pointer X into a dataset index for linear-axis charts.
///
/// Returns `None` when the bounds are unusable, the dataset is empty, or the
/// pointer falls outside the plotted range (including exactly on the right
/// edge, where `floor(x / section)` lands one past the last bar).
#[must_use]
pub fn resolve_linear(touch: PixelPoint, bounds: ChartBounds, count: usize) -> Option<usize> {
    if !bounds.is_valid() || count == 0 || !touch.x.is_finite() {
        return None;
    }
    if touch.x < 0.0 {
        return None;
    }

    let section = bounds.width / count as f64;
    let index = (touch.x / section).floor();
    if index >= count as f64 {
        return None;
    }
    Some(index as usize)
}

/// Marker anchor for a linear-axis resolution: section center X, with Y
/// placed by the value's normalized position inside the dataset envelope.
#[must_use]
pub fn linear_marker_location(
    index: usize,
    count: usize,
    bounds: ChartBounds,
    normalized: f64,
) -> PixelPoint {
    let section = bounds.width / count as f64;
    PixelPoint::new(
        index as f64 * section + section / 2.0,
        bounds.height - normalized * bounds.height,
    )
}

/// Radial gating applied before sector matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorGeometry {
    /// Inner exclusion radius as a fraction of the outer radius.
    /// `0.0` for a pie, > 0 for a doughnut hole.
    pub hole_ratio: f64,
}

impl SectorGeometry {
    pub const PIE: Self = Self { hole_ratio: 0.0 };

    #[must_use]
    pub fn doughnut(hole_ratio: f64) -> Self {
        Self { hole_ratio }
    }
}

/// Pointer angle in degrees, clockwise from 12 o'clock around the chart
/// center. Matches the axis used by [`crate::core::PieDataSet::with_computed_angles`].
#[must_use]
pub fn touch_degrees(touch: PixelPoint, bounds: ChartBounds) -> f64 {
    let center = bounds.center();
    let dx = touch.x - center.x;
    let dy = touch.y - center.y;
    // Screen Y grows downward; -dy points at 12 o'clock.
    let degrees = dx.atan2(-dy).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Maps a pointer location to the sector under it.
///
/// Sector intervals are half-open `[start, next_start)` in dataset order, so
/// a touch exactly on a shared boundary deterministically matches the sector
/// that starts there; the final sector closes the circle at 360°. Touches
/// beyond the outer radius, or inside the hole, resolve to nothing.
#[must_use]
pub fn resolve_sector(
    touch: PixelPoint,
    bounds: ChartBounds,
    points: &[PieDataPoint],
    geometry: SectorGeometry,
) -> Option<usize> {
    if !bounds.is_valid() || points.is_empty() {
        return None;
    }

    let center = bounds.center();
    let radius = (touch.x - center.x).hypot(touch.y - center.y);
    let outer = bounds.width.min(bounds.height) / 2.0;
    if radius > outer || radius < outer * geometry.hole_ratio {
        return None;
    }

    let degrees = touch_degrees(touch, bounds);
    for (index, point) in points.iter().enumerate() {
        let start = point.start_angle.to_degrees();
        let end = points
            .get(index + 1)
            .map_or(360.0, |next| next.start_angle.to_degrees());
        if start <= degrees && degrees < end {
            return Some(index);
        }
    }
    None
}
