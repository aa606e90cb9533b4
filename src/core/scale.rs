use crate::error::{ChartError, ChartResult};

/// Affine mapping between a numeric domain and the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidInput(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` onto `[0, 1]` (values outside the domain map outside it).
    ///
    /// The domain start maps to exactly `0` and the domain end to exactly `1`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span.is_finite() {
            return (value - self.domain_start) / span;
        }

        // Domains wider than f64::MAX: halve every term so the subtraction stays finite.
        let half_span = self.domain_end / 2.0 - self.domain_start / 2.0;
        (value / 2.0 - self.domain_start / 2.0) / half_span
    }

    #[must_use]
    pub fn denormalize(self, normalized: f64) -> f64 {
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
