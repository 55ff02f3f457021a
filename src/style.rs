//! Color types used by chart data, configuration, and the emitted primitives.

use std::sync::Arc;

/// An sRGB color with 8-bit channels and a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Same color with the given alpha (clamped to 0..=1).
    pub fn with_opacity(self, a: f64) -> Self {
        Rgba {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let parse2 = |h: &str| u8::from_str_radix(h, 16).ok();
        match hex.len() {
            3 => {
                let expand = |h: &str| parse2(&h.repeat(2));
                Some(Rgba::opaque(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            6 => Some(Rgba::opaque(
                parse2(&hex[0..2])?,
                parse2(&hex[2..4])?,
                parse2(&hex[4..6])?,
            )),
            8 => Some(Rgba::new(
                parse2(&hex[0..2])?,
                parse2(&hex[2..4])?,
                parse2(&hex[4..6])?,
                parse2(&hex[6..8])? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS representation: hex when fully opaque, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        if (self.a - 1.0).abs() < f64::EPSILON {
            self.to_hex()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// A color generator: maps an opacity factor in 0..=1 to a concrete color.
///
/// Chart data and configuration carry these wherever the chart needs to derive
/// several opacity samples from one base color (gradient stops, grid lines,
/// bar-top tints).
pub type ColorFn = Arc<dyn Fn(f64) -> Rgba + Send + Sync>;

/// A `ColorFn` that returns `base` at the requested opacity.
pub fn solid_color(base: Rgba) -> ColorFn {
    Arc::new(move |opacity| base.with_opacity(opacity))
}
