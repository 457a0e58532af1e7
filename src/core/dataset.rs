use std::f64::consts::TAU;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Single bar/line sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataPoint {
    pub value: f64,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub legend_tag: Option<String>,
}

impl BarDataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            x_label: None,
            description: None,
            legend_tag: None,
        }
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_legend_tag(mut self, tag: impl Into<String>) -> Self {
        self.legend_tag = Some(tag.into());
        self
    }
}

/// Sample with a lower/upper bound pair, drawn as a floating bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangedBarDataPoint {
    pub lower_value: f64,
    pub upper_value: f64,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub legend_tag: Option<String>,
}

impl RangedBarDataPoint {
    #[must_use]
    pub fn new(lower_value: f64, upper_value: f64) -> Self {
        Self {
            lower_value,
            upper_value,
            x_label: None,
            description: None,
            legend_tag: None,
        }
    }

    pub fn from_decimal(lower_value: Decimal, upper_value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(
            decimal_to_f64(lower_value, "lower_value")?,
            decimal_to_f64(upper_value, "upper_value")?,
        ))
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_legend_tag(mut self, tag: impl Into<String>) -> Self {
        self.legend_tag = Some(tag.into());
        self
    }

    /// Vertical anchor of the bar, halfway between the two bounds.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.lower_value + self.upper_value) / 2.0
    }
}

/// Sector of a radial chart.
///
/// `start_angle` and `amount` are radians, measured clockwise from
/// 12 o'clock. They are normally derived by
/// [`PieDataSet::with_computed_angles`] so that consecutive sectors
/// partition the full circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieDataPoint {
    pub value: f64,
    #[serde(default)]
    pub start_angle: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub legend_tag: Option<String>,
}

impl PieDataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            start_angle: 0.0,
            amount: 0.0,
            description: None,
            legend_tag: None,
        }
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_legend_tag(mut self, tag: impl Into<String>) -> Self {
        self.legend_tag = Some(tag.into());
        self
    }
}

/// Observed value envelope used to normalize marker placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueSpan {
    pub min: f64,
    pub range: f64,
}

impl ValueSpan {
    /// Builds a span from observed bounds. A degenerate envelope (all samples
    /// equal, or non-finite bounds) clamps the range to `1.0` so
    /// normalization never divides by zero.
    #[must_use]
    pub fn from_bounds(min: f64, max: f64) -> Self {
        let range = max - min;
        let range = if range.is_finite() && range > 0.0 {
            range
        } else {
            1.0
        };
        let min = if min.is_finite() { min } else { 0.0 };
        Self { min, range }
    }

    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            min = min.min(value);
            max = max.max(value);
        }
        Self::from_bounds(min, max)
    }

    /// Position of `value` inside the span; in `[0, 1]` for in-envelope values.
    #[must_use]
    pub fn normalized(self, value: f64) -> f64 {
        (value - self.min) / self.range
    }
}

/// Insertion-ordered bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BarDataSet {
    pub points: Vec<BarDataPoint>,
    #[serde(default)]
    pub legend_title: String,
}

impl BarDataSet {
    #[must_use]
    pub fn new(points: Vec<BarDataPoint>) -> Self {
        Self {
            points,
            legend_title: String::new(),
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    #[must_use]
    pub fn value_span(&self) -> ValueSpan {
        ValueSpan::from_values(self.points.iter().map(|point| point.value))
    }
}

/// Insertion-ordered ranged-bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RangedBarDataSet {
    pub points: Vec<RangedBarDataPoint>,
    #[serde(default)]
    pub legend_title: String,
}

impl RangedBarDataSet {
    #[must_use]
    pub fn new(points: Vec<RangedBarDataPoint>) -> Self {
        Self {
            points,
            legend_title: String::new(),
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    /// Envelope across both bounds: min lower value to max upper value.
    #[must_use]
    pub fn value_span(&self) -> ValueSpan {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            min = min.min(point.lower_value);
            max = max.max(point.upper_value);
        }
        ValueSpan::from_bounds(min, max)
    }
}

/// Insertion-ordered pie/doughnut sector series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PieDataSet {
    pub points: Vec<PieDataPoint>,
    #[serde(default)]
    pub legend_title: String,
}

impl PieDataSet {
    #[must_use]
    pub fn new(points: Vec<PieDataPoint>) -> Self {
        Self {
            points,
            legend_title: String::new(),
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    /// Derives each sector's `(start_angle, amount)` from the point values so
    /// the sectors partition the full circle in dataset order, starting at
    /// 12 o'clock.
    pub fn with_computed_angles(mut self) -> ChartResult<Self> {
        let mut total = 0.0;
        for point in &self.points {
            if !point.value.is_finite() || point.value < 0.0 {
                return Err(ChartError::InvalidData(
                    "sector values must be finite and >= 0".to_owned(),
                ));
            }
            total += point.value;
        }
        if self.points.is_empty() {
            return Ok(self);
        }
        if total <= 0.0 {
            return Err(ChartError::InvalidData(
                "sector values must sum to > 0".to_owned(),
            ));
        }

        let mut start = 0.0;
        for point in &mut self.points {
            let amount = point.value / total * TAU;
            point.start_angle = start;
            point.amount = amount;
            start += amount;
        }
        Ok(self)
    }

    /// Checks the sector-partition invariant: contiguous sectors starting at
    /// 12 o'clock whose amounts sum to a full turn, within floating tolerance.
    ///
    /// An empty dataset passes; it simply never resolves a touch.
    pub fn validate_partition(&self) -> ChartResult<()> {
        if self.points.is_empty() {
            return Ok(());
        }

        let tolerance = 1e-9 * TAU;
        let mut expected_start = 0.0;
        for point in &self.points {
            if !point.start_angle.is_finite() || !point.amount.is_finite() || point.amount < 0.0 {
                return Err(ChartError::InvalidData(
                    "sector angles must be finite with amount >= 0".to_owned(),
                ));
            }
            if (point.start_angle - expected_start).abs() > tolerance {
                return Err(ChartError::InvalidData(
                    "sectors must be contiguous in dataset order".to_owned(),
                ));
            }
            expected_start += point.amount;
        }
        if (expected_start - TAU).abs() > tolerance {
            return Err(ChartError::InvalidData(
                "sector amounts must sum to a full circle".to_owned(),
            ));
        }
        Ok(())
    }
}
