//! HSL lightness algebra used to derive dark-mode palettes.
//!
//! Colors are carried as `hsl(H, S%, L%)` strings. Anything that does not match
//! that pattern is passed through untouched: a single bad color must never
//! break a portal's theme.

use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::palette::ColorScale;

/// Lightness added to every primary shade in dark mode.
pub const DARK_SCALE_LIGHTNESS_SHIFT: f64 = 10.0;

/// Lightness added to the accent in dark mode. Half of the scale shift.
pub const DARK_ACCENT_LIGHTNESS_SHIFT: f64 = DARK_SCALE_LIGHTNESS_SHIFT / 2.0;

static HSL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsl\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$")
        .expect("HSL pattern is valid")
});

/// A parsed `hsl(H, S%, L%)` color.
///
/// Hue and saturation keep their authored text so re-serialization never
/// perturbs them.
#[derive(Debug, Clone, PartialEq)]
pub struct Hsl {
    hue: String,
    saturation: String,
    lightness: f64,
}

impl Hsl {
    /// Parse a color string, returning [None] if it is not well-formed HSL.
    pub fn parse(color: &str) -> Option<Self> {
        let caps = HSL_PATTERN.captures(color.trim())?;
        Some(Self {
            hue: caps[1].to_string(),
            saturation: caps[2].to_string(),
            lightness: caps[3].parse().ok()?,
        })
    }

    /// Hue as authored.
    pub fn hue(&self) -> &str {
        &self.hue
    }

    /// Saturation percentage as authored, without the `%` sign.
    pub fn saturation(&self) -> &str {
        &self.saturation
    }

    /// Lightness percentage.
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Shift lightness by `delta` percentage points, clamped to `[0, 100]`.
    pub fn shifted(&self, delta: f64) -> Self {
        let lightness = ((self.lightness + delta).clamp(0.0, 100.0) * 100.0).round() / 100.0;
        Self {
            hue: self.hue.clone(),
            saturation: self.saturation.clone(),
            lightness,
        }
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Shift the lightness of an HSL color string by `delta` percentage points.
///
/// The result lightness is clamped to `[0, 100]` and rounded to two
/// decimals. Input that is not well-formed HSL is returned unchanged, as is
/// input whose lightness the shift does not move. A zero delta is always the
/// identity, even for authored lightness with more precision than the rounding.
pub fn adjust_lightness(color: &str, delta: f64) -> String {
    let Some(hsl) = Hsl::parse(color) else {
        log::warn!("Color '{}' is not in hsl(h, s%, l%) form, leaving it unshifted", color);
        return color.to_string();
    };
    if hsl.lightness + delta == hsl.lightness {
        return color.to_string();
    }

    let shifted = hsl.shifted(delta);
    if shifted.lightness == hsl.lightness {
        return color.to_string();
    }
    shifted.to_string()
}

/// Brighten every shade of a scale for dark mode.
pub fn derive_dark_scale(scale: &ColorScale) -> ColorScale {
    scale.map(|color| adjust_lightness(color, DARK_SCALE_LIGHTNESS_SHIFT))
}

/// Brighten an accent color for dark mode, by half the scale shift.
pub fn derive_dark_accent(color: &str) -> String {
    adjust_lightness(color, DARK_ACCENT_LIGHTNESS_SHIFT)
}
