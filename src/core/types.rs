use serde::{Deserialize, Serialize};

/// Coordinate in the chart's local pixel space (origin top-left, Y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current pixel bounds of the plotted area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartBounds {
    pub width: f64,
    pub height: f64,
}

impl ChartBounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Closed tag identifying which chart variant produced a touch resolution.
///
/// `ExtraLine` marks points merged in from an overlay-line collaborator
/// rather than the chart's own dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    RangedBar,
    Line,
    Pie,
    Doughnut,
    ExtraLine,
}
