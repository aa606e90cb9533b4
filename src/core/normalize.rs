use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::series::validate_series;
use crate::error::ChartResult;

/// Series rescaled onto `[0, 1]` together with the extrema used for the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    pub normalized: Vec<f64>,
    pub min: f64,
    pub max: f64,
}

/// Maps `series` linearly onto `[0, 1]` using its literal (unpadded) extrema.
///
/// A constant series normalizes to all zeros.
pub fn normalize_values(series: &[f64]) -> ChartResult<Normalized> {
    let extent = validate_series(series)?;

    let normalized = if extent.is_degenerate() {
        vec![0.0; series.len()]
    } else {
        let scale = LinearScale::new(extent.min, extent.max)?;
        series
            .iter()
            .map(|value| scale.normalize(*value).clamp(0.0, 1.0))
            .collect()
    };

    Ok(Normalized {
        normalized,
        min: extent.min,
        max: extent.max,
    })
}

#[cfg(test)]
mod tests {
    use super::normalize_values;

    #[test]
    fn evenly_spaced_series_maps_to_unit_steps() {
        let result = normalize_values(&[10.0, 20.0, 30.0]).expect("normalize");
        assert_eq!(result.normalized, vec![0.0, 0.5, 1.0]);
        assert_eq!((result.min, result.max), (10.0, 30.0));
    }

    #[test]
    fn order_and_length_are_preserved() {
        let result = normalize_values(&[5.0, -5.0, 0.0, 5.0]).expect("normalize");
        assert_eq!(result.normalized, vec![1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn constant_series_normalizes_to_zero() {
        let result = normalize_values(&[7.0, 7.0, 7.0]).expect("normalize");
        assert_eq!(result.normalized, vec![0.0, 0.0, 0.0]);
        assert_eq!((result.min, result.max), (7.0, 7.0));
    }

    #[test]
    fn invalid_series_is_rejected() {
        assert!(normalize_values(&[]).is_err());
        assert!(normalize_values(&[1.0, f64::NAN]).is_err());
    }
}
