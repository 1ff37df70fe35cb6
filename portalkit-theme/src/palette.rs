//! Color scales and surface palettes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::id::ColorMode;

/// One of the ten fixed shade keys of a [ColorScale].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    /// Lightest shade.
    S50,
    /// Shade 100.
    S100,
    /// Shade 200.
    S200,
    /// Shade 300.
    S300,
    /// Shade 400.
    S400,
    /// Base shade of the scale.
    S500,
    /// Shade 600.
    S600,
    /// Shade 700.
    S700,
    /// Shade 800.
    S800,
    /// Darkest shade.
    S900,
}

crate::impl_key_conversion!(Shade, {
    S50 => "50",
    S100 => "100",
    S200 => "200",
    S300 => "300",
    S400 => "400",
    S500 => "500",
    S600 => "600",
    S700 => "700",
    S800 => "800",
    S900 => "900",
});

impl Shade {
    /// All shades from lightest to darkest.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Ten lightness variants of one base hue, keyed by [Shade].
///
/// The shape is fixed by the type: a scale always holds exactly one value per
/// shade, so derivations can only change values, never keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorScale {
    shades: [String; 10],
}

impl ColorScale {
    /// Build a scale from ten colors ordered 50 through 900.
    pub fn new(shades: [&str; 10]) -> Self {
        Self {
            shades: shades.map(str::to_string),
        }
    }

    /// Get the color of one shade.
    pub fn get(&self, shade: Shade) -> &str {
        &self.shades[shade.index()]
    }

    /// Iterate `(shade, color)` pairs from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> + '_ {
        Shade::ALL.into_iter().map(move |shade| (shade, self.get(shade)))
    }

    /// Produce a new scale by transforming every shade independently.
    pub fn map(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            shades: std::array::from_fn(|i| f(&self.shades[i])),
        }
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Shade::ALL.len()))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(shade.as_str(), color)?;
        }
        map.end()
    }
}

/// Neutral surface colors. Authored per mode, never derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SurfacePalette {
    /// Page background.
    pub background: &'static str,
    /// Default text color.
    pub foreground: &'static str,
    /// Subdued fills and secondary text.
    pub muted: &'static str,
    /// Separators and outlines.
    pub border: &'static str,
}

impl SurfacePalette {
    /// Surface colors for the light mode.
    pub const fn light() -> Self {
        Self {
            background: "hsl(0, 0%, 100%)",
            foreground: "hsl(222, 47%, 11%)",
            muted: "hsl(210, 40%, 96%)",
            border: "hsl(214, 32%, 91%)",
        }
    }

    /// Surface colors for the dark mode.
    pub const fn dark() -> Self {
        Self {
            background: "hsl(222, 47%, 11%)",
            foreground: "hsl(210, 40%, 98%)",
            muted: "hsl(217, 33%, 17%)",
            border: "hsl(217, 33%, 24%)",
        }
    }

    /// Select the palette for a mode.
    pub const fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }
}

/// Semantic status colors shared by every portal and mode.
pub const STATUS_COLORS: [(&str, &str); 4] = [
    ("success", "hsl(142, 71%, 45%)"),
    ("warning", "hsl(38, 92%, 50%)"),
    ("error", "hsl(0, 84%, 60%)"),
    ("info", "hsl(199, 89%, 48%)"),
];

/// The resolved brand and surface colors of one theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedColors {
    /// Primary brand scale.
    pub primary: ColorScale,
    /// Accent color.
    pub accent: String,
    /// Neutral surface colors.
    pub surface: SurfacePalette,
}
