pub mod domain;
pub mod normalize;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod ticks;

pub use domain::{
    DEFAULT_PADDING_FRACTION, DEFAULT_ZERO_SPAN_HALF_WIDTH, Domain, DomainTuning,
    calculate_domain, calculate_domain_tuned, calculate_domain_with_padding,
};
pub use normalize::{Normalized, normalize_values};
pub use primitives::{decimal_to_f64, series_from_decimals};
pub use scale::LinearScale;
pub use series::{SeriesExtent, validate_series};
pub use ticks::{MAX_TICK_TARGET, calculate_nice_ticks, nice_step};
