use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, PixelPoint};
use crate::resolve::ResolvedTouch;

/// Visual shape of a touch marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarkerKind {
    /// Dot at the resolved location (bar/line-style charts).
    #[default]
    Point,
    /// Highlight of the whole resolved sector (pie/doughnut).
    FullSector,
    /// Vertical span between a ranged point's bounds.
    Range,
}

/// Placement descriptor consumed by a rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub kind: MarkerKind,
    pub location: PixelPoint,
}

/// Marker-kind selection, injected at controller construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarkerStyle {
    /// Marker for points resolved from the chart's own dataset.
    pub marker: MarkerKind,
    /// Marker for overlay-line points; wins whenever the touch is tagged
    /// `ChartKind::ExtraLine`.
    pub extra_line_marker: MarkerKind,
}

/// Builds one descriptor per resolved touch.
///
/// Pure and idempotent: equal inputs always yield equal descriptor
/// sequences, so observers can suppress redundant redraws by equality.
#[must_use]
pub fn build_markers(touches: &[ResolvedTouch], style: MarkerStyle) -> Vec<MarkerDescriptor> {
    touches
        .iter()
        .map(|touch| MarkerDescriptor {
            kind: if touch.kind == ChartKind::ExtraLine {
                style.extra_line_marker
            } else {
                style.marker
            },
            location: touch.location,
        })
        .collect()
}
