/// Typography scale of a portal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FontScale {
    /// Font family stack.
    pub family: &'static str,
    /// Extra small text.
    pub xs: &'static str,
    /// Small text.
    pub sm: &'static str,
    /// Body text.
    pub base: &'static str,
    /// Large text.
    pub lg: &'static str,
    /// Headings.
    pub xl: &'static str,
    /// Page titles.
    #[serde(rename = "2xl")]
    pub xxl: &'static str,
}

/// Spacing density of a portal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SpacingScale {
    /// Tightest gap.
    pub xs: &'static str,
    /// Small gap.
    pub sm: &'static str,
    /// Default gap.
    pub md: &'static str,
    /// Large gap.
    pub lg: &'static str,
    /// Section gap.
    pub xl: &'static str,
}

/// Motion personality of a portal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct AnimationProfile {
    /// Micro-interactions (hover, focus), in milliseconds.
    pub duration_fast_ms: u32,
    /// Standard transitions, in milliseconds.
    pub duration_normal_ms: u32,
    /// Page and panel transitions, in milliseconds.
    pub duration_slow_ms: u32,
    /// Timing function.
    pub easing: &'static str,
    /// Keyframe used when content enters.
    pub entrance: &'static str,
}

impl FontScale {
    /// Dense scale for data-heavy admin consoles.
    pub const fn compact() -> Self {
        Self {
            family: "Inter, system-ui, sans-serif",
            xs: "0.6875rem",
            sm: "0.75rem",
            base: "0.875rem",
            lg: "1rem",
            xl: "1.125rem",
            xxl: "1.375rem",
        }
    }

    /// Default scale.
    pub const fn standard() -> Self {
        Self {
            family: "Inter, system-ui, sans-serif",
            xs: "0.75rem",
            sm: "0.875rem",
            base: "1rem",
            lg: "1.125rem",
            xl: "1.25rem",
            xxl: "1.5rem",
        }
    }

    /// Larger, friendlier scale for end customers.
    pub const fn comfortable() -> Self {
        Self {
            family: "\"Nunito Sans\", system-ui, sans-serif",
            xs: "0.8125rem",
            sm: "0.9375rem",
            base: "1.0625rem",
            lg: "1.25rem",
            xl: "1.5rem",
            xxl: "1.875rem",
        }
    }
}

impl SpacingScale {
    /// Tight spacing.
    pub const fn compact() -> Self {
        Self {
            xs: "0.125rem",
            sm: "0.25rem",
            md: "0.5rem",
            lg: "0.75rem",
            xl: "1rem",
        }
    }

    /// Default spacing.
    pub const fn standard() -> Self {
        Self {
            xs: "0.25rem",
            sm: "0.5rem",
            md: "1rem",
            lg: "1.5rem",
            xl: "2rem",
        }
    }

    /// Airy spacing.
    pub const fn relaxed() -> Self {
        Self {
            xs: "0.375rem",
            sm: "0.75rem",
            md: "1.25rem",
            lg: "2rem",
            xl: "3rem",
        }
    }
}

impl AnimationProfile {
    /// Quick, linear-feeling motion.
    pub const fn snappy() -> Self {
        Self {
            duration_fast_ms: 100,
            duration_normal_ms: 150,
            duration_slow_ms: 250,
            easing: "cubic-bezier(0.4, 0, 0.2, 1)",
            entrance: "fade-in",
        }
    }

    /// Balanced motion.
    pub const fn smooth() -> Self {
        Self {
            duration_fast_ms: 150,
            duration_normal_ms: 250,
            duration_slow_ms: 400,
            easing: "cubic-bezier(0.4, 0, 0.2, 1)",
            entrance: "slide-up",
        }
    }

    /// Soft, springy motion.
    pub const fn playful() -> Self {
        Self {
            duration_fast_ms: 200,
            duration_normal_ms: 300,
            duration_slow_ms: 500,
            easing: "cubic-bezier(0.34, 1.56, 0.64, 1)",
            entrance: "bounce-in",
        }
    }
}
