//! Value and axis-label formatting.
//!
//! Formatting is display-only and total: every function accepts any `f64`
//! (non-finite values render as `NaN`, `inf`, `-inf`) and never panics.

mod options;

pub use options::{FormatOptions, UnitPlacement};

/// Decimal digits used by [`format_value`] when `precision` is unset.
pub const DEFAULT_VALUE_PRECISION: u8 = 1;
/// Mantissa digits used for scientific notation when `precision` is unset.
pub const DEFAULT_SCIENTIFIC_PRECISION: u8 = 2;

const MAX_PRECISION: u8 = 12;
const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
/// Compact labels switch to scientific notation from here on.
const COMPACT_SCIENTIFIC_FROM: f64 = 1e15;
const SCIENTIFIC_BELOW: f64 = 1e-3;

const AXIS_COMPACT_PRECISION: u8 = 1;
const AXIS_SMALL_PRECISION: u8 = 3;
const AXIS_PRECISION: u8 = 2;

/// Formats an axis tick label.
///
/// Millions use `M` and thousands `k`. Magnitudes below `1e-3` or from
/// `1e15` upward use scientific notation. Zero is always `"0"` and trailing
/// zeros are trimmed.
#[must_use]
pub fn format_axis_tick(value: f64) -> String {
    if let Some(label) = non_finite_label(value) {
        return label;
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    let body = if let Some(compact) = format_compact(magnitude, AXIS_COMPACT_PRECISION, true) {
        compact
    } else if magnitude < SCIENTIFIC_BELOW {
        format_scientific(magnitude, AXIS_PRECISION, true)
    } else if magnitude < 1.0 {
        trim_decimal(format_decimal(magnitude, AXIS_SMALL_PRECISION))
    } else {
        trim_decimal(format_decimal(magnitude, AXIS_PRECISION))
    };
    with_sign(value, body)
}

/// Formats a value for tooltips, tables and legends.
///
/// `is_scientific` wins over `compact`; `compact` only applies from `1e3`
/// upward and falls back to scientific notation from `1e15`. Units are appended last, so an unset unit never leaks into the
/// label.
#[must_use]
pub fn format_value(value: f64, options: &FormatOptions) -> String {
    let body = match non_finite_label(value) {
        Some(label) => label,
        None => with_sign(value, format_magnitude(value.abs(), options)),
    };
    apply_units(body, options)
}

fn format_magnitude(magnitude: f64, options: &FormatOptions) -> String {
    let explicit = options.precision.map(|precision| precision.min(MAX_PRECISION));
    let trim = explicit.is_none();

    if options.is_scientific {
        let precision = explicit.unwrap_or(DEFAULT_SCIENTIFIC_PRECISION);
        return format_scientific(magnitude, precision, trim);
    }

    let precision = explicit.unwrap_or(DEFAULT_VALUE_PRECISION);
    if options.compact {
        if let Some(compact) = format_compact(magnitude, precision, trim) {
            return compact;
        }
    }

    let text = format_decimal(magnitude, precision);
    if trim { trim_decimal(text) } else { text }
}

fn format_compact(magnitude: f64, precision: u8, trim: bool) -> Option<String> {
    if magnitude < THOUSAND {
        return None;
    }
    if magnitude >= COMPACT_SCIENTIFIC_FROM {
        return Some(format_scientific(magnitude, precision, trim));
    }

    let factor = 10_f64.powi(i32::from(precision));
    let (scaled, suffix) = if magnitude >= MILLION
        || (magnitude / THOUSAND * factor).round() >= THOUSAND * factor
    {
        // Values like 999_960 round to "1000k"; promote them to millions.
        (magnitude / MILLION, "M")
    } else {
        (magnitude / THOUSAND, "k")
    };

    let text = format_decimal(scaled, precision);
    let mut text = if trim { trim_decimal(text) } else { text };
    text.push_str(suffix);
    Some(text)
}

fn format_scientific(magnitude: f64, precision: u8, trim: bool) -> String {
    let precision = usize::from(precision);
    let text = format!("{magnitude:.precision$e}");
    if !trim {
        return text;
    }
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}e{exponent}", trim_decimal(mantissa.to_owned()))
        }
        None => text,
    }
}

fn format_decimal(value: f64, precision: u8) -> String {
    let precision = usize::from(precision);
    format!("{value:.precision$}")
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').len();
        text.truncate(trimmed_len);
        if text.ends_with('.') {
            text.pop();
        }
    }

    if text == "-0" { "0".to_owned() } else { text }
}

/// Prefixes `-` for negative values unless rounding produced a zero label.
fn with_sign(value: f64, body: String) -> String {
    if value.is_sign_negative() && !renders_as_zero(&body) {
        format!("-{body}")
    } else {
        body
    }
}

fn renders_as_zero(body: &str) -> bool {
    let mantissa = body.split('e').next().unwrap_or(body);
    mantissa.chars().all(|ch| ch == '0' || ch == '.')
}

fn non_finite_label(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_owned())
    } else if value == f64::INFINITY {
        Some("inf".to_owned())
    } else if value == f64::NEG_INFINITY {
        Some("-inf".to_owned())
    } else {
        None
    }
}

fn apply_units(body: String, options: &FormatOptions) -> String {
    let mut label = body;

    if let Some(unit) = options.resolved_unit() {
        match options.unit_placement {
            UnitPlacement::Prefix => {
                let (sign, digits) = match label.strip_prefix('-') {
                    Some(rest) => ("-", rest),
                    None => ("", label.as_str()),
                };
                label = format!("{sign}{unit}{digits}");
            }
            UnitPlacement::Suffix => {
                if !attaches_without_space(unit) {
                    label.push(' ');
                }
                label.push_str(unit);
            }
        }
    }

    if let Some(per_unit) = options.resolved_per_unit() {
        if !per_unit.starts_with('/') {
            label.push('/');
        }
        label.push_str(per_unit);
    }

    label
}

fn attaches_without_space(unit: &str) -> bool {
    unit == "%" || unit.starts_with('°')
}
