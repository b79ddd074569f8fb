// File: crates/grapher-core/src/palette.rs
// Summary: Deterministic series colors from the golden-ratio hue sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Saturation used for every series color.
pub const SATURATION: f64 = 1.0;
/// Lightness used for every series color.
pub const LIGHTNESS: f64 = 0.5;

/// RGB color; displays and serializes as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSL (each component in `[0, 1]`) to RGB.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        if s == 0.0 {
            let v = channel(l);
            return Self::rgb(v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::rgb(
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid hex color '{s}'"));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex color '{s}'"));
        Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

/// Hue of the `index`-th color: `frac(1 + phi * index)`.
pub fn hue_at(index: usize) -> f64 {
    let phi = (5f64.sqrt() + 1.0) / 2.0;
    (1.0 + phi * index as f64) % 1.0
}

/// Color of the `index`-th series.
pub fn color_at(index: usize) -> Color {
    Color::from_hsl(hue_at(index), SATURATION, LIGHTNESS)
}

/// First `n` colors of the sequence. Depends only on `n`, never on entity names.
pub fn colors_for(n: usize) -> Vec<Color> {
    (0..n).map(color_at).collect()
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }
    if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
    if t < 1.0 / 2.0 { return q; }
    if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
    p
}

#[inline]
fn channel(x: f64) -> u8 {
    // Round half up, then clamp into the byte range.
    (x * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
