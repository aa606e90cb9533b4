use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TransformConfig;
use crate::core::{Domain, LinearScale, calculate_domain_tuned, calculate_nice_ticks};
use crate::error::ChartResult;
use crate::format::{FormatOptions, format_axis_tick, format_value};

/// One labeled gridline of a value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    /// Fraction of the tick extent (`0` at the first tick, `1` at the last).
    pub position: f64,
}

/// Axis scale derived from a raw series: padded domain plus labeled nice ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub domain: Domain,
    pub step: f64,
    pub ticks: Vec<AxisTick>,
}

impl ValueAxis {
    /// Interval spanned by the outermost ticks; always contains `domain`.
    #[must_use]
    pub fn tick_extent(&self) -> (f64, f64) {
        match (self.ticks.first(), self.ticks.last()) {
            (Some(first), Some(last)) => (first.value, last.value),
            _ => (self.domain.min, self.domain.max),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().map(|tick| tick.label.as_str())
    }

    /// Tick values rendered with [`format_value`], e.g. with the panel's unit.
    #[must_use]
    pub fn value_labels(&self, options: &FormatOptions) -> Vec<String> {
        self.ticks
            .iter()
            .map(|tick| format_value(tick.value, options))
            .collect()
    }
}

/// Runs series -> domain -> ticks -> labels with the settings in `config`.
pub fn build_value_axis(series: &[f64], config: &TransformConfig) -> ChartResult<ValueAxis> {
    let tuning = config.domain_tuning()?;
    let domain = match calculate_domain_tuned(series, tuning) {
        Ok(domain) => domain,
        Err(err) => {
            warn!(error = %err, len = series.len(), "rejecting series for value axis");
            return Err(err);
        }
    };

    let values = calculate_nice_ticks(domain.min, domain.max, config.target_tick_count)?;
    let step = tick_step_hint(&values);
    let extent = match (values.first(), values.last()) {
        (Some(first), Some(last)) => LinearScale::new(*first, *last)?,
        _ => LinearScale::new(domain.min, domain.max)?,
    };

    let ticks: Vec<AxisTick> = values
        .iter()
        .map(|value| AxisTick {
            value: *value,
            label: format_axis_tick(*value),
            position: extent.normalize(*value).clamp(0.0, 1.0),
        })
        .collect();

    debug!(
        len = series.len(),
        domain_min = domain.min,
        domain_max = domain.max,
        step,
        tick_count = ticks.len(),
        "built value axis"
    );
    Ok(ValueAxis {
        domain,
        step,
        ticks,
    })
}

/// Smallest positive gap between consecutive values, or `0.0` when there is none.
pub fn tick_step_hint(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}
