//! Palette parsing and piecewise-linear color interpolation.

mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

pub use registry::PaletteRegistry;

/// Default gradient: blue, teal, yellow, orange, red.
pub const DEFAULT_PALETTE: &[&str] = &["#2563eb", "#14b8a6", "#facc15", "#f97316", "#dc2626"];

/// Diverging cold-to-hot ramp for temperature maps.
pub const THERMAL_PALETTE: &[&str] = &["#313695", "#74add1", "#fee090", "#f46d43", "#a50026"];

/// Safe, warning, critical.
pub const STRESS_PALETTE: &[&str] = &["#16a34a", "#eab308", "#dc2626"];

/// 8-bit RGB color. `Display` renders the `rgb(R, G, B)` form used for fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rrggbb` or `#rgb`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid_hex(hex));
        }

        let channel = |range: std::ops::Range<usize>, repeat: bool| -> ChartResult<u8> {
            let text = &digits[range];
            let value = u8::from_str_radix(text, 16).map_err(|_| invalid_hex(hex))?;
            Ok(if repeat { value * 17 } else { value })
        };

        match digits.len() {
            6 => Ok(Self::new(
                channel(0..2, false)?,
                channel(2..4, false)?,
                channel(4..6, false)?,
            )),
            3 => Ok(Self::new(
                channel(0..1, true)?,
                channel(1..2, true)?,
                channel(2..3, true)?,
            )),
            _ => Err(invalid_hex(hex)),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Channel-wise linear blend; `amount` 0 yields `self`, 1 yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, amount: f64) -> Self {
        let mix = |from: u8, to: u8| -> u8 {
            let from = f64::from(from);
            let value = from + (f64::from(to) - from) * amount;
            value.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

fn invalid_hex(hex: &str) -> ChartError {
    ChartError::InvalidInput(format!("`{hex}` is not a #rgb or #rrggbb color"))
}

/// Ordered color stops of a gradient. Always holds at least two colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: SmallVec<[Rgb; 8]>,
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = Rgb>) -> ChartResult<Self> {
        let colors: SmallVec<[Rgb; 8]> = colors.into_iter().collect();
        if colors.len() < 2 {
            return Err(ChartError::InvalidInput(format!(
                "palette needs at least 2 colors, got {}",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> ChartResult<Self> {
        let parsed = colors
            .iter()
            .map(|color| Rgb::from_hex(color.as_ref()))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    pub fn default_palette() -> ChartResult<Self> {
        Self::from_hex(DEFAULT_PALETTE)
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color at position `t` along the gradient.
    ///
    /// The palette is split into `len - 1` equal segments; adjacent segments
    /// share their boundary color. `t` is clamped to `[0, 1]` and `NaN`
    /// samples the first color.
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = self.colors.len() - 1;
        let scaled = t * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;
        self.colors[index].lerp(self.colors[index + 1], local)
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ChartError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_hex(&colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors.iter().map(|color| color.to_hex()).collect()
    }
}

/// Interpolates `palette` (hex strings) at `t` and returns `rgb(R, G, B)`.
pub fn interpolate_color<S: AsRef<str>>(palette: &[S], t: f64) -> ChartResult<String> {
    Ok(Palette::from_hex(palette)?.sample(t).to_string())
}
