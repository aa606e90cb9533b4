//! Composed pipelines built on the core transformations.

mod heatmap;
mod value_axis;

pub use heatmap::color_series;
pub use value_axis::{AxisTick, ValueAxis, build_value_axis, tick_step_hint};
