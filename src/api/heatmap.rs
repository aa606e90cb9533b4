#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::color::{Palette, Rgb};
use crate::core::normalize_values;
use crate::error::ChartResult;

/// Maps every value of `series` to a palette color (min -> first stop, max -> last).
///
/// A constant series maps entirely to the first color.
pub fn color_series(series: &[f64], palette: &Palette) -> ChartResult<Vec<Rgb>> {
    let normalized = match normalize_values(series) {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!(error = %err, len = series.len(), "rejecting series for color mapping");
            return Err(err);
        }
    };

    // Large heatmaps can be sampled in parallel; the result is identical.
    #[cfg(feature = "parallel")]
    let colors: Vec<Rgb> = normalized
        .normalized
        .par_iter()
        .map(|t| palette.sample(*t))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let colors: Vec<Rgb> = normalized
        .normalized
        .iter()
        .map(|t| palette.sample(*t))
        .collect();

    debug!(
        len = colors.len(),
        min = normalized.min,
        max = normalized.max,
        "mapped series to palette colors"
    );
    Ok(colors)
}
