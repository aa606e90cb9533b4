use chart_transform::color::{DEFAULT_PALETTE, Palette, interpolate_color};
use chart_transform::core::{calculate_domain, calculate_nice_ticks, normalize_values};
use chart_transform::format::{FormatOptions, format_axis_tick, format_value};
use proptest::prelude::*;

fn finite_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e9f64..1.0e9, 1..200)
}

proptest! {
    #[test]
    fn domain_contains_every_value(series in finite_series()) {
        let domain = calculate_domain(&series).expect("domain");
        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(domain.min <= min);
        prop_assert!(domain.max >= max);
        prop_assert!(domain.min < domain.max);
    }

    #[test]
    fn constant_series_domain_is_strictly_wider(value in -1.0e12f64..1.0e12, len in 1usize..16) {
        let domain = calculate_domain(&vec![value; len]).expect("domain");
        prop_assert!(domain.min < value);
        prop_assert!(domain.max > value);
    }

    #[test]
    fn ticks_cover_and_are_evenly_spaced(
        min in -1.0e7f64..1.0e7,
        width in 0.0f64..1.0e7,
        target in 1usize..20
    ) {
        let max = min + width;
        let ticks = calculate_nice_ticks(min, max, target).expect("ticks");
        prop_assert!(ticks.len() >= 2);
        prop_assert!(ticks.len() <= target + 3);
        prop_assert!(ticks[0] <= min);
        prop_assert!(ticks[ticks.len() - 1] >= max);

        let step = ticks[1] - ticks[0];
        prop_assert!(step > 0.0);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            let gap = pair[1] - pair[0];
            let tolerance = step * 1e-6 + ticks[0].abs().max(ticks[ticks.len() - 1].abs()) * 1e-12;
            prop_assert!((gap - step).abs() <= tolerance);
        }
    }

    #[test]
    fn ticks_are_deterministic(min in -1.0e5f64..1.0e5, width in 0.0f64..1.0e5, target in 1usize..12) {
        let first = calculate_nice_ticks(min, min + width, target).expect("ticks");
        let second = calculate_nice_ticks(min, min + width, target).expect("ticks");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn normalization_stays_in_unit_interval(series in finite_series()) {
        let result = normalize_values(&series).expect("normalize");
        prop_assert_eq!(result.normalized.len(), series.len());
        prop_assert!(result.normalized.iter().all(|value| (0.0..=1.0).contains(value)));

        let min_index = series.iter().position(|value| *value == result.min).expect("min index");
        let max_index = series.iter().position(|value| *value == result.max).expect("max index");
        prop_assert_eq!(result.normalized[min_index], 0.0);
        if result.min != result.max {
            prop_assert_eq!(result.normalized[max_index], 1.0);
        }
    }

    #[test]
    fn colors_always_use_rgb_format(t in -2.0f64..3.0) {
        let color = interpolate_color(DEFAULT_PALETTE, t).expect("color");
        let inner = color
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .expect("rgb wrapper");
        let channels: Vec<&str> = inner.split(", ").collect();
        prop_assert_eq!(channels.len(), 3);
        for channel in channels {
            prop_assert!(channel.parse::<u8>().is_ok());
        }
    }

    #[test]
    fn palette_sampling_is_continuous(t in 0.0f64..0.999) {
        let palette = Palette::from_hex(DEFAULT_PALETTE).expect("palette");
        let here = palette.sample(t);
        let next = palette.sample(t + 0.001);
        prop_assert!(here.red.abs_diff(next.red) <= 2);
        prop_assert!(here.green.abs_diff(next.green) <= 2);
        prop_assert!(here.blue.abs_diff(next.blue) <= 2);
    }

    #[test]
    fn formatting_is_total(value in proptest::num::f64::ANY) {
        let tick = format_axis_tick(value);
        prop_assert!(!tick.is_empty());
        let label = format_value(value, &FormatOptions::default().with_compact(true));
        prop_assert!(!label.is_empty());
        prop_assert!(!label.contains("undefined"));
    }
}
