//! statchart: statistical-chart interaction core.
//!
//! This crate provides the data/geometry layer behind interactive bar,
//! ranged-bar, pie and doughnut charts: pointer-to-data-point resolution,
//! marker placement descriptors, and an in-process broadcast channel that
//! keeps marker overlays, info panels and legend highlighting consistent
//! without coupling them to each other. Drawing primitives and view
//! composition are left to the host rendering layer.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod resolve;
pub mod telemetry;

pub use api::{BarChartData, ChartStyle, DoughnutChartData, PieChartData, RangedBarChartData};
pub use error::{ChartError, ChartResult};
