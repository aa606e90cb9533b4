use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Upper bound applied to requested tick counts.
pub const MAX_TICK_TARGET: usize = 50;

const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Largest decimal exponent whose power of ten is a finite `f64`.
const MAX_STEP_EXPONENT: i32 = 308;

/// Largest `n` for which `10^n` is exactly representable.
const EXACT_POW10_LIMIT: i32 = 22;

/// Nice step expressed as `multiplier * 10^exponent`.
///
/// Ticks are rebuilt from this decomposition instead of accumulating a float
/// step, so decimal steps like `0.2` produce clean tick values.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NiceStep {
    multiplier: f64,
    exponent: i32,
}

impl NiceStep {
    fn new(multiplier: f64, exponent: i32) -> Self {
        if multiplier >= 10.0 {
            Self {
                multiplier: multiplier / 10.0,
                exponent: exponent + 1,
            }
        } else {
            Self {
                multiplier,
                exponent,
            }
        }
    }

    /// Step width; `inf` for steps such as `2e308` that exceed `f64::MAX`.
    fn value(self) -> f64 {
        self.at(1.0)
    }

    /// Tick value at `index`, rounded once from its exact decimal form.
    fn at(self, index: f64) -> f64 {
        let units = index * self.multiplier;
        let exponent = self.exponent;
        if (0..=EXACT_POW10_LIMIT).contains(&exponent) {
            units * 10_f64.powi(exponent)
        } else if (-EXACT_POW10_LIMIT..0).contains(&exponent) {
            units / 10_f64.powi(-exponent)
        } else {
            // Outside the exact power-of-ten range the decimal parser rounds once.
            format!("{units}e{exponent}")
                .parse()
                .unwrap_or_else(|_| units * 10_f64.powi(exponent))
        }
    }

    /// Fractional step index of `x`, finite even when the step width overflows.
    fn index_of(self, x: f64) -> f64 {
        let value = self.value();
        if value.is_finite() {
            x / value
        } else {
            x / 10_f64.powi(self.exponent) / self.multiplier
        }
    }
}

/// Generates evenly spaced "nice" tick values covering `[min, max]`.
///
/// Steps are drawn from `{1, 2, 5} x 10^n`. The result is strictly increasing,
/// finite, starts at or below `min`, ends at or above `max`, and usually holds
/// `target_count + 1` ticks or fewer (never more than `target_count + 3`).
/// Reversed bounds are accepted and swapped; `target_count` is clamped to
/// `[1, MAX_TICK_TARGET]`.
///
/// Near the edge of the `f64` range an outer tick whose exact value is not
/// representable is clamped to `-f64::MAX` or `f64::MAX`; the inner ticks
/// keep the nice spacing.
pub fn calculate_nice_ticks(min: f64, max: f64, target_count: usize) -> ChartResult<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidInput(
            "tick bounds must be finite".to_owned(),
        ));
    }

    let (lo, hi) = (min.min(max), min.max(max));
    let target = target_count.clamp(1, MAX_TICK_TARGET);

    if lo == hi {
        return Ok(degenerate_ticks(lo, target));
    }

    let step = select_step(lo, hi, raw_step(lo, hi, target), target);
    Ok(ticks_for_step(lo, hi, step))
}

/// Returns the nice step `calculate_nice_ticks` would use for an interval of
/// width `span` split into about `target_count` parts.
///
/// Non-positive or non-finite spans yield `0.0`.
#[must_use]
pub fn nice_step(span: f64, target_count: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let target = target_count.clamp(1, MAX_TICK_TARGET);
    select_step(0.0, span, span / target as f64, target).value()
}

/// Unrounded step width, capped at `f64::MAX` when `hi - lo` overflows.
fn raw_step(lo: f64, hi: f64, target: usize) -> f64 {
    let span = hi - lo;
    if span.is_finite() {
        return span / target as f64;
    }
    let half_span = hi / 2.0 - lo / 2.0;
    (half_span / target as f64 * 2.0).min(f64::MAX)
}

fn degenerate_ticks(value: f64, target: usize) -> Vec<f64> {
    let width = if value == 0.0 { 1.0 } else { value.abs() };
    trace!(value, width, "degenerate tick interval, widening around value");

    let step = select_step(value, value, width / target as f64, target);
    let (mut start, mut end) = snapped_indices(value, value, step);
    if start == end {
        start -= 1.0;
        end += 1.0;
    }
    collect_ticks(start, end, step)
}

fn select_step(lo: f64, hi: f64, raw_step: f64, target: usize) -> NiceStep {
    let mut raw_step = raw_step;

    // Below this the tick index would exceed f64's exact integer range.
    let resolution = lo.abs().max(hi.abs()) * f64::EPSILON * 16.0;
    if raw_step < resolution {
        trace!(raw_step, resolution, "raising tick step to float resolution");
        raw_step = resolution;
    }
    if raw_step < f64::MIN_POSITIVE {
        raw_step = f64::MIN_POSITIVE;
    }

    let exponent = raw_step.log10().floor() as i32;
    let mut fallback = None;
    for multiplier in NICE_MULTIPLIERS {
        let candidate = NiceStep::new(multiplier, exponent);
        if candidate.exponent > MAX_STEP_EXPONENT {
            break;
        }
        if candidate.value() < raw_step * (1.0 - 1e-9) {
            continue;
        }
        let (start, end) = snapped_indices(lo, hi, candidate);
        if end - start <= target as f64 {
            return candidate;
        }
        fallback = Some(candidate);
    }
    fallback.unwrap_or_else(|| NiceStep::new(5.0, exponent))
}

fn ticks_for_step(lo: f64, hi: f64, step: NiceStep) -> Vec<f64> {
    let (start, end) = snapped_indices(lo, hi, step);
    collect_ticks(start, end, step)
}

/// Step indices of the outermost ticks, snapped outward so they cover `[lo, hi]`.
fn snapped_indices(lo: f64, hi: f64, step: NiceStep) -> (f64, f64) {
    let mut start = step.index_of(lo).floor();
    let mut end = step.index_of(hi).ceil();
    if step.at(start) > lo {
        start -= 1.0;
    }
    if step.at(end) < hi {
        end += 1.0;
    }
    (start, end)
}

fn collect_ticks(start: f64, end: f64, step: NiceStep) -> Vec<f64> {
    let count = (end - start) as usize + 1;
    let mut ticks = Vec::with_capacity(count);
    for offset in 0..count {
        let value = step.at(start + offset as f64).clamp(-f64::MAX, f64::MAX);
        // Normalize -0.0 so the zero tick formats and compares as plain zero.
        ticks.push(if value == 0.0 { 0.0 } else { value });
    }
    ticks
}
