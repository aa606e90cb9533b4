use crate::error::{ChartError, ChartResult};

/// Literal extrema of a validated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesExtent {
    pub min: f64,
    pub max: f64,
}

impl SeriesExtent {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }
}

/// Checks that `series` is non-empty and finite, returning its extrema.
///
/// Single pass over the input; the first offending element is reported by index.
pub fn validate_series(series: &[f64]) -> ChartResult<SeriesExtent> {
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "series must contain at least one value".to_owned(),
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (index, value) in series.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::InvalidInput(format!(
                "series value at index {index} must be finite, got {value}"
            )));
        }
        min = min.min(value);
        max = max.max(value);
    }

    Ok(SeriesExtent { min, max })
}

#[cfg(test)]
mod tests {
    use super::validate_series;
    use crate::error::ChartError;

    #[test]
    fn extent_tracks_literal_extrema() {
        let extent = validate_series(&[3.0, -2.5, 7.0, 0.0]).expect("valid series");
        assert_eq!(extent.min, -2.5);
        assert_eq!(extent.max, 7.0);
        assert_eq!(extent.span(), 9.5);
        assert!(!extent.is_degenerate());
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(matches!(
            validate_series(&[]),
            Err(ChartError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_value_reports_its_index() {
        let err = validate_series(&[1.0, 2.0, f64::NEG_INFINITY]).expect_err("must fail");
        assert!(err.to_string().contains("index 2"));
    }
}
