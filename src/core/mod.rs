pub mod dataset;
pub mod primitives;
pub mod types;

pub use dataset::{
    BarDataPoint, BarDataSet, PieDataPoint, PieDataSet, RangedBarDataPoint, RangedBarDataSet,
    ValueSpan,
};
pub use types::{ChartBounds, ChartKind, PixelPoint};
