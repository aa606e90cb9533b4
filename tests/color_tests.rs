use chart_transform::color::{
    DEFAULT_PALETTE, Palette, PaletteRegistry, Rgb, STRESS_PALETTE, interpolate_color,
};
use chart_transform::{ChartError, color_series};

fn is_rgb_css(text: &str) -> bool {
    let Some(inner) = text
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = inner.split(", ").collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit()))
}

#[test]
fn endpoints_match_first_and_last_palette_colors() {
    let first = Rgb::from_hex(DEFAULT_PALETTE[0]).expect("first");
    let last = Rgb::from_hex(DEFAULT_PALETTE[DEFAULT_PALETTE.len() - 1]).expect("last");
    assert_eq!(
        interpolate_color(DEFAULT_PALETTE, 0.0).expect("t=0"),
        first.to_string()
    );
    assert_eq!(
        interpolate_color(DEFAULT_PALETTE, 1.0).expect("t=1"),
        last.to_string()
    );
}

#[test]
fn output_uses_comma_space_rgb_format() {
    assert_eq!(
        interpolate_color(&["#2563eb", "#dc2626"], 0.0).expect("color"),
        "rgb(37, 99, 235)"
    );
    for step in 0..=20 {
        let t = f64::from(step) / 20.0;
        let color = interpolate_color(DEFAULT_PALETTE, t).expect("color");
        assert!(is_rgb_css(&color), "unexpected format {color}");
    }
}

#[test]
fn boundaries_share_stop_color() {
    let palette = Palette::from_hex(STRESS_PALETTE).expect("palette");
    let middle = Rgb::from_hex(STRESS_PALETTE[1]).expect("middle");
    assert_eq!(palette.sample(0.5), middle);

    let below = palette.sample(0.5 - 1e-9);
    let above = palette.sample(0.5 + 1e-9);
    for (left, right) in [(below, middle), (above, middle)] {
        assert!(left.red.abs_diff(right.red) <= 1);
        assert!(left.green.abs_diff(right.green) <= 1);
        assert!(left.blue.abs_diff(right.blue) <= 1);
    }
}

#[test]
fn out_of_range_parameters_are_clamped() {
    assert_eq!(
        interpolate_color(DEFAULT_PALETTE, -0.5).expect("below"),
        interpolate_color(DEFAULT_PALETTE, 0.0).expect("zero")
    );
    assert_eq!(
        interpolate_color(DEFAULT_PALETTE, 1.5).expect("above"),
        interpolate_color(DEFAULT_PALETTE, 1.0).expect("one")
    );
}

#[test]
fn invalid_palettes_raise_invalid_input() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        interpolate_color(&empty, 0.5),
        Err(ChartError::InvalidInput(_))
    ));
    assert!(matches!(
        interpolate_color(&["#ffffff", "nope"], 0.5),
        Err(ChartError::InvalidInput(_))
    ));
}

#[test]
fn named_palette_drives_series_colors() {
    let registry = PaletteRegistry::with_builtins().expect("registry");
    let stress = registry.resolve("stress").expect("stress palette");
    let colors = color_series(&[120.0, 80.0, 160.0], stress).expect("colors");
    assert_eq!(colors[1], Rgb::from_hex(STRESS_PALETTE[0]).expect("safe"));
    assert_eq!(colors[0], Rgb::from_hex(STRESS_PALETTE[1]).expect("warning"));
    assert_eq!(colors[2], Rgb::from_hex(STRESS_PALETTE[2]).expect("critical"));
}
