//! Deterministic plugin colors.
//!
//! Maps a plugin name to a color of a fixed sequential scale. The mapping is a
//! presentation aid, not a hash: many names share a color.

use core::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` clamped to `0..=1`.
    #[must_use]
    pub fn lerp(self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Returns the CSS hex form, e.g. `#440154`.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A sequential color scale over a numeric domain.
///
/// Inputs are clamped to the domain, then mapped piecewise-linearly across
/// evenly spaced color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: (f64, f64),
    stops: Vec<Color>,
}

/// Viridis ramp, sampled at ten even steps.
const VIRIDIS: [Color; 10] = [
    Color::rgb(0x44, 0x01, 0x54),
    Color::rgb(0x48, 0x28, 0x78),
    Color::rgb(0x3e, 0x49, 0x89),
    Color::rgb(0x31, 0x68, 0x8e),
    Color::rgb(0x26, 0x82, 0x8e),
    Color::rgb(0x1f, 0x9e, 0x89),
    Color::rgb(0x35, 0xb7, 0x79),
    Color::rgb(0x6e, 0xce, 0x58),
    Color::rgb(0xb5, 0xde, 0x2b),
    Color::rgb(0xfd, 0xe7, 0x25),
];

impl ColorScale {
    /// Creates a scale. Returns `None` without stops or with an empty or
    /// inverted domain.
    #[must_use]
    pub fn new(domain: (f64, f64), stops: Vec<Color>) -> Option<Self> {
        (!stops.is_empty() && domain.0 < domain.1).then_some(Self { domain, stops })
    }

    /// The plugin scale: viridis over `[1, 10]`.
    #[must_use]
    pub fn viridis() -> Self {
        Self {
            domain: (1.0, 10.0),
            stops: VIRIDIS.to_vec(),
        }
    }

    /// Returns the color for `value`.
    #[must_use]
    pub fn sample(&self, value: f64) -> Color {
        let (lo, hi) = self.domain;
        let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);

        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }
        let scaled = t * last as f64;
        let index = (scaled.floor() as usize).min(last - 1);
        self.stops[index].lerp(self.stops[index + 1], scaled - index as f64)
    }
}

/// Returns the color for a plugin name.
///
/// Sums the UTF-16 code units of `name`, takes the remainder modulo 10 and
/// samples [`ColorScale::viridis`]. A remainder of 0 falls below the domain
/// and clamps to the first color.
#[must_use]
pub fn color_for(name: &str) -> Color {
    let sum: u64 = name.encode_utf16().map(u64::from).sum();
    ColorScale::viridis().sample((sum % 10) as f64)
}
