//! # Theme Resolver
//!
//! Turns a `(portal, mode)` pair into a complete [ThemeDescriptor].
//!
//! Resolution is pure: it reads only the immutable [catalog](crate::catalog)
//! and always produces a fresh descriptor, so equal inputs give deep-equal
//! outputs and consumers may diff descriptors by reference.
//!
//! ## Usage
//!
//! ```rust
//! use portalkit_theme::id::{ColorMode, PortalId};
//! use portalkit_theme::theme_resolver::resolve;
//!
//! let theme = resolve(PortalId::IspCustomer, ColorMode::Dark);
//! assert_eq!(theme.metadata.name, "Customer Portal");
//! assert!(theme.css_vars.contains("--portal-primary-500"));
//! ```
//!
//! ## Variable naming
//!
//! | Variable | Source |
//! |---|---|
//! | `--portal-primary-{50..900}` | primary scale, dark-shifted in dark mode |
//! | `--portal-accent` | accent, dark-shifted by half in dark mode |
//! | `--portal-background`, `-foreground`, `-muted`, `-border` | mode surface palette |
//! | `--portal-success`, `-warning`, `-error`, `-info` | shared status colors |

use serde::Serialize;

use crate::catalog::{get_profile, PortalMetadata, SidebarStyle};
use crate::color::{derive_dark_accent, derive_dark_scale};
use crate::error::{ThemeError, ThemeResult};
use crate::id::{ColorMode, PortalId};
use crate::metrics::{AnimationProfile, FontScale, SpacingScale};
use crate::palette::{ResolvedColors, SurfacePalette, STATUS_COLORS};
use crate::variables::{var_name, ThemeVariables};

/// A fully resolved theme for one portal in one color mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// The resolved portal.
    pub portal: PortalId,
    /// Descriptive metadata of the portal.
    pub metadata: PortalMetadata,
    /// Preferred sidebar appearance.
    pub sidebar_style: SidebarStyle,
    /// Resolved colors for the mode.
    pub colors: ResolvedColors,
    /// Typography scale.
    pub font_size: FontScale,
    /// Spacing density.
    pub spacing: SpacingScale,
    /// Motion personality.
    pub animations: AnimationProfile,
    /// Flattened CSS custom properties.
    pub css_vars: ThemeVariables,
    /// The mode this descriptor was resolved for.
    pub mode: ColorMode,
}

impl ThemeDescriptor {
    /// Serialize the descriptor, e.g. as a hydration payload.
    pub fn to_json(&self) -> ThemeResult<String> {
        serde_json::to_string(self).map_err(|e| ThemeError::Serialization(e.to_string()))
    }
}

/// Resolve the theme of a portal for a color mode.
pub fn resolve(portal: PortalId, mode: ColorMode) -> ThemeDescriptor {
    let profile = get_profile(portal);

    let colors = ResolvedColors {
        primary: match mode {
            ColorMode::Light => profile.primary.clone(),
            ColorMode::Dark => derive_dark_scale(&profile.primary),
        },
        accent: match mode {
            ColorMode::Light => profile.accent.to_string(),
            ColorMode::Dark => derive_dark_accent(profile.accent),
        },
        surface: SurfacePalette::for_mode(mode),
    };
    let css_vars = flatten(&colors);

    log::debug!(
        "Resolved theme for {} ({} mode, {} variables)",
        portal,
        mode,
        css_vars.len()
    );

    ThemeDescriptor {
        portal,
        metadata: profile.metadata.clone(),
        sidebar_style: profile.sidebar_style,
        colors,
        font_size: profile.font_size.clone(),
        spacing: profile.spacing.clone(),
        animations: profile.animations.clone(),
        css_vars,
        mode,
    }
}

fn flatten(colors: &ResolvedColors) -> ThemeVariables {
    let mut vars = ThemeVariables::new();

    for (shade, color) in colors.primary.iter() {
        vars.set(var_name(&["primary", shade.as_str()]), color);
    }
    vars.set(var_name(&["accent"]), colors.accent.as_str());

    let surface = &colors.surface;
    vars.set(var_name(&["background"]), surface.background);
    vars.set(var_name(&["foreground"]), surface.foreground);
    vars.set(var_name(&["muted"]), surface.muted);
    vars.set(var_name(&["border"]), surface.border);

    for (status, color) in STATUS_COLORS {
        vars.set(var_name(&[status]), color);
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profiles;
    use crate::color::Hsl;
    use crate::palette::Shade;

    #[test]
    fn test_light_mode_uses_authored_colors() {
        for profile in profiles() {
            let theme = resolve(profile.id, ColorMode::Light);
            assert_eq!(theme.colors.primary, profile.primary);
            assert_eq!(theme.colors.accent, profile.accent);
            assert_eq!(theme.colors.surface, SurfacePalette::light());
        }
    }

    #[test]
    fn test_modes_differ_only_in_colors() {
        for portal in PortalId::ALL {
            let light = resolve(portal, ColorMode::Light);
            let dark = resolve(portal, ColorMode::Dark);

            assert_eq!(light.metadata, dark.metadata);
            assert_eq!(light.sidebar_style, dark.sidebar_style);
            assert_eq!(light.font_size, dark.font_size);
            assert_eq!(light.spacing, dark.spacing);
            assert_eq!(light.animations, dark.animations);
            assert_ne!(light.colors, dark.colors);
            assert_ne!(light.css_vars, dark.css_vars);
            assert_eq!(dark.mode, ColorMode::Dark);
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for portal in PortalId::ALL {
            assert_eq!(resolve(portal, ColorMode::Dark), resolve(portal, ColorMode::Dark));
        }
    }

    #[test]
    fn test_dark_mode_brightens_brand_colors() {
        let light = resolve(PortalId::IspAdmin, ColorMode::Light);
        let dark = resolve(PortalId::IspAdmin, ColorMode::Dark);

        let l = Hsl::parse(light.colors.primary.get(Shade::S500)).unwrap().lightness();
        let d = Hsl::parse(dark.colors.primary.get(Shade::S500)).unwrap().lightness();
        assert_eq!(d - l, 10.0);

        let la = Hsl::parse(&light.colors.accent).unwrap().lightness();
        let da = Hsl::parse(&dark.colors.accent).unwrap().lightness();
        assert_eq!(da - la, 5.0);
    }

    #[test]
    fn test_css_vars_follow_naming_convention() {
        let theme = resolve(PortalId::PlatformAdmin, ColorMode::Light);

        assert_eq!(theme.css_vars.len(), 10 + 1 + 4 + 4);
        assert!(theme.css_vars.names().all(|name| name.starts_with("--portal-")));
        assert_eq!(theme.css_vars.get("--portal-primary-50"), Some("hsl(239, 84%, 97%)"));
        assert_eq!(theme.css_vars.get("--portal-accent"), Some("hsl(280, 87%, 60%)"));
        assert_eq!(theme.css_vars.get("--portal-background"), Some("hsl(0, 0%, 100%)"));
        assert_eq!(theme.css_vars.get("--portal-error"), Some("hsl(0, 84%, 60%)"));
    }

    #[test]
    fn test_to_json() {
        let json = resolve(PortalId::IspCustomer, ColorMode::Light).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["portal"], "ispCustomer");
        assert_eq!(value["mode"], "light");
        assert_eq!(value["metadata"]["shortName"], "My Account");
        assert_eq!(value["fontSize"]["2xl"], "1.875rem");
        assert_eq!(value["cssVars"]["--portal-primary-500"], "hsl(262, 83%, 58%)");
    }
}
