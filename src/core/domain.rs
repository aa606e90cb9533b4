use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::series::{SeriesExtent, validate_series};
use crate::error::{ChartError, ChartResult};

/// Fraction of the data span added on each side of an autoscaled domain.
pub const DEFAULT_PADDING_FRACTION: f64 = 0.1;

/// Half width used when a constant series sits at zero (or padding is zero).
pub const DEFAULT_ZERO_SPAN_HALF_WIDTH: f64 = 1.0;

/// Padded numeric interval an axis must cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<Domain> for (f64, f64) {
    fn from(domain: Domain) -> Self {
        (domain.min, domain.max)
    }
}

/// Tuning controls for domain autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainTuning {
    pub padding_fraction: f64,
    pub zero_span_half_width: f64,
}

impl Default for DomainTuning {
    fn default() -> Self {
        Self {
            padding_fraction: DEFAULT_PADDING_FRACTION,
            zero_span_half_width: DEFAULT_ZERO_SPAN_HALF_WIDTH,
        }
    }
}

impl DomainTuning {
    #[must_use]
    pub fn with_padding(padding_fraction: f64) -> Self {
        Self {
            padding_fraction,
            ..Self::default()
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_fraction.is_finite() || self.padding_fraction < 0.0 {
            return Err(ChartError::InvalidInput(
                "padding fraction must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zero_span_half_width.is_finite() || self.zero_span_half_width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "zero-span half width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Computes the padded domain of `series` with [`DEFAULT_PADDING_FRACTION`].
pub fn calculate_domain(series: &[f64]) -> ChartResult<Domain> {
    calculate_domain_tuned(series, DomainTuning::default())
}

pub fn calculate_domain_with_padding(series: &[f64], padding_fraction: f64) -> ChartResult<Domain> {
    calculate_domain_tuned(series, DomainTuning::with_padding(padding_fraction))
}

/// Computes a padded domain that always contains every value of `series`.
///
/// A constant series is widened symmetrically so the result never has zero
/// width. Padding that would leave the `f64` range is clamped to
/// `[-f64::MAX, f64::MAX]`, so `min < max` holds for every finite series.
pub fn calculate_domain_tuned(series: &[f64], tuning: DomainTuning) -> ChartResult<Domain> {
    let tuning = tuning.validate()?;
    let extent = validate_series(series)?;

    let (min, max) = if extent.is_degenerate() {
        let half = degenerate_half_width(extent.min, tuning);
        (extent.min - half, extent.max + half)
    } else {
        let pad = padding(extent, tuning.padding_fraction);
        (extent.min - pad, extent.max + pad)
    };

    let clamped = Domain {
        min: min.max(-f64::MAX),
        max: max.min(f64::MAX),
    };
    if clamped.min != min || clamped.max != max {
        trace!(min, max, "clamping padded domain to the f64 range");
    }
    Ok(clamped)
}

fn padding(extent: SeriesExtent, padding_fraction: f64) -> f64 {
    let span = extent.span();
    if span.is_finite() {
        return span * padding_fraction;
    }
    // Span beyond f64::MAX: halve the terms so a zero fraction stays zero.
    (extent.max / 2.0 - extent.min / 2.0) * padding_fraction * 2.0
}

fn degenerate_half_width(value: f64, tuning: DomainTuning) -> f64 {
    let mut half = value.abs() * tuning.padding_fraction;
    if half <= 0.0 {
        trace!(value, "constant series at zero or unpadded, using fallback half width");
        half = tuning.zero_span_half_width;
    }
    // Keep the widening visible at the value's floating-point resolution.
    half.max(value.abs() * f64::EPSILON * 4.0)
}
