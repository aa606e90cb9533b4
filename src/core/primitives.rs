use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts decimal measurements (as exported by engineering models) into a series.
pub fn series_from_decimals(values: &[Decimal]) -> ChartResult<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| decimal_to_f64(*value, &format!("series value at index {index}")))
        .collect()
}
