//! chart-transform: pure numeric transformations behind dashboard charts.
//!
//! Raw series become padded axis domains, "nice" tick sets, readable labels,
//! normalized values and palette colors. Every function is pure and
//! deterministic, so results can be cached and shared across threads.

pub mod api;
pub mod color;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod telemetry;

pub use api::{AxisTick, ValueAxis, build_value_axis, color_series};
pub use color::{DEFAULT_PALETTE, Palette, PaletteRegistry, Rgb, interpolate_color};
pub use config::TransformConfig;
pub use crate::core::{
    DEFAULT_PADDING_FRACTION, Domain, DomainTuning, Normalized, calculate_domain,
    calculate_domain_tuned, calculate_domain_with_padding, calculate_nice_ticks,
    normalize_values,
};
pub use error::{ChartError, ChartResult};
pub use format::{FormatOptions, UnitPlacement, format_axis_tick, format_value};
