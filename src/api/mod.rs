//! Per-chart orchestrators and the configuration they consume.

mod bar_chart;
mod legend;
mod pie_chart;
mod ranged_bar_chart;
mod style;

pub use bar_chart::BarChartData;
pub use legend::{LegendEntry, LegendRegistry};
pub use pie_chart::{DoughnutChartData, PieChartData};
pub use ranged_bar_chart::RangedBarChartData;
pub use style::{ChartStyle, InfoBoxPlacement, XAxisLabelSource};
