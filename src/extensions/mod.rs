pub mod extra_line;
pub mod markers;

pub use extra_line::{ExtraLineData, ExtraLinePoint, ExtraLineSample, ExtraLineStyle};
pub use markers::{MarkerDescriptor, MarkerKind, MarkerStyle, build_markers};
